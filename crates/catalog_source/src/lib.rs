//! Catalog source: reads static catalog definitions (settings and records) from disk.
mod convert;
mod decode;
mod id;
mod load;
mod types;

pub use convert::{catalog_config, catalog_item, into_catalog};
pub use decode::{decode_catalog, CatalogFormat, DecodeError};
pub use id::derived_item_id;
pub use load::{load_catalog, load_catalog_dir, SourceError};
pub use types::{
    CatalogFile, DefaultCategoryRecord, ItemRecord, LinkRecord, PageSizeRecord, Preset,
    SortRecord,
};
