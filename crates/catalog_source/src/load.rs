use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog_core::{Catalog, CatalogError};
use catalog_logging::{catalog_debug, catalog_info};
use thiserror::Error;

use crate::{decode_catalog, into_catalog, CatalogFormat, DecodeError};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported catalog file {0} (expected .ron or .json)")]
    UnknownFormat(PathBuf),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("invalid catalog in {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Reads one catalog file. The format follows the extension.
pub fn load_catalog(path: &Path) -> Result<Catalog, SourceError> {
    let format =
        CatalogFormat::from_path(path).ok_or_else(|| SourceError::UnknownFormat(path.into()))?;
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.into(),
        source,
    })?;
    let file = decode_catalog(&text, format).map_err(|source| SourceError::Decode {
        path: path.into(),
        source,
    })?;
    let catalog = into_catalog(file).map_err(|source| SourceError::Catalog {
        path: path.into(),
        source,
    })?;
    catalog_info!(
        "Loaded catalog `{}` ({} items) from {}",
        catalog.name(),
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Loads every `.ron` and `.json` file in `dir`, in file name order.
/// Other entries are skipped; the first failing file aborts the load.
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<Catalog>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: dir.into(),
        source,
    };
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter(|e| CatalogFormat::from_path(&e.path()).is_some())
        .collect();
    entries.sort_by_key(|e| e.file_name());
    catalog_debug!("Found {} catalog files in {}", entries.len(), dir.display());

    entries
        .iter()
        .map(|entry| load_catalog(&entry.path()))
        .collect()
}
