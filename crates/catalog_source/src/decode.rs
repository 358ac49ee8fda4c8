use std::path::Path;

use thiserror::Error;

use crate::CatalogFile;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Ron,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension (`.ron` or `.json`, any case).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("ron") {
            Some(CatalogFormat::Ron)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(CatalogFormat::Json)
        } else {
            None
        }
    }
}

pub fn decode_catalog(text: &str, format: CatalogFormat) -> Result<CatalogFile, DecodeError> {
    match format {
        CatalogFormat::Ron => Ok(ron::from_str(text)?),
        CatalogFormat::Json => Ok(serde_json::from_str(text)?),
    }
}
