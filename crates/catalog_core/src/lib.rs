//! Catalog core: pure filter/sort/paginate engine, view state machine and view-model helpers.
mod catalog;
mod config;
mod date;
mod effect;
mod filter;
mod item;
mod msg;
pub mod nav;
mod paginate;
mod sort;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, CatalogError};
pub use config::{
    CatalogConfig, CategorySet, DefaultCategory, ItemsPerPage, SortPolicy, NARROW_BREAKPOINT_PX,
};
pub use date::{DateParseError, PartialDate};
pub use effect::Effect;
pub use filter::{filter_by_category, CategorySelection, ALL_LABEL};
pub use item::{CatalogItem, ItemId, ItemLink, ItemPayload, PLACEHOLDER_IMAGE};
pub use msg::{DismissReason, Msg};
pub use nav::{SectionId, SectionOffset};
pub use paginate::{page_slice, page_window, pages, total_pages, PageState};
pub use sort::{chronological_key, display_order, sort_newest_first};
pub use state::{CatalogState, PreviewState};
pub use update::update;
pub use view_model::{
    CatalogViewModel, CategoryButtonView, ItemCardView, PageButtonView, PreviewView,
};
