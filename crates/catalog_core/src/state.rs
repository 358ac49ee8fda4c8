use std::collections::BTreeSet;
use std::sync::Arc;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::filter::filter_by_category;
use crate::view_model::{
    CatalogViewModel, CategoryButtonView, ItemCardView, PageButtonView, PreviewView,
};
use crate::{Catalog, CatalogItem, CategorySelection, ItemId, PageState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Open {
        item: ItemId,
    },
}

impl PreviewState {
    pub fn is_open(&self) -> bool {
        matches!(self, PreviewState::Open { .. })
    }

    pub fn item(&self) -> Option<&ItemId> {
        match self {
            PreviewState::Idle => None,
            PreviewState::Open { item } => Some(item),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreviewChange {
    Opened,
    Replaced,
    Unchanged,
    Rejected,
}

/// State of one mounted catalog view.
///
/// The catalog itself is shared and never mutated; everything else is owned
/// by the view and only changes through [`update`](crate::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
    selection: CategorySelection,
    page: PageState,
    viewport_width: u32,
    preview: PreviewState,
    expanded: BTreeSet<ItemId>,
    dirty: bool,
}

impl CatalogState {
    pub fn new(catalog: Arc<Catalog>, viewport_width: u32) -> Self {
        let selection = catalog.config().initial_selection();
        let items_per_page = catalog.config().items_per_page.for_width(viewport_width);
        let item_count = filter_by_category(catalog.sorted_items(), &selection).len();
        Self {
            catalog,
            selection,
            page: PageState::new(items_per_page, item_count),
            viewport_width,
            preview: PreviewState::Idle,
            expanded: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn is_expanded(&self, id: &ItemId) -> bool {
        self.expanded.contains(id)
    }

    /// Filtered items in display order, across all pages.
    pub fn filtered_items(&self) -> Vec<&CatalogItem> {
        filter_by_category(self.catalog.sorted_items(), &self.selection)
    }

    /// Items on the current page.
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        let filtered = self.filtered_items();
        self.page.slice(&filtered).to_vec()
    }

    pub fn view(&self) -> CatalogViewModel {
        let filtered = self.filtered_items();
        let categories = self
            .catalog
            .config()
            .categories
            .options()
            .into_iter()
            .map(|option| CategoryButtonView {
                label: option.label().to_string(),
                selected: option == self.selection,
                selection: option,
            })
            .collect();
        let items = self
            .page
            .slice(&filtered)
            .iter()
            .map(|item| ItemCardView::from_item(item, self.is_expanded(&item.id)))
            .collect();
        let current_page = self.page.current_page();
        let pages = self
            .page
            .page_numbers()
            .map(|number| PageButtonView {
                number,
                current: number == current_page,
            })
            .collect();
        let preview = self
            .preview
            .item()
            .and_then(|id| self.catalog.get(id))
            .map(PreviewView::from_item);

        CatalogViewModel {
            title: self.catalog.name().to_string(),
            categories,
            items,
            filtered_count: filtered.len(),
            current_page,
            total_pages: self.page.total_pages(),
            pages,
            has_previous: self.page.has_previous(),
            has_next: self.page.has_next(),
            preview,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_category(&mut self, selection: CategorySelection) -> bool {
        if !self.catalog.config().categories.allows(&selection) {
            catalog_warn!(
                "Ignoring undeclared category `{}` for catalog `{}`",
                selection,
                self.catalog.name()
            );
            return false;
        }
        if selection == self.selection {
            return false;
        }

        let item_count = filter_by_category(self.catalog.sorted_items(), &selection).len();
        catalog_debug!(
            "Catalog `{}` filter {} -> {} ({} items)",
            self.catalog.name(),
            self.selection,
            selection,
            item_count
        );
        self.selection = selection;
        self.page.reset(item_count);
        self.mark_dirty();
        true
    }

    pub(crate) fn go_to_page(&mut self, page: i64) -> bool {
        self.change_page(|state| state.go_to_page(page))
    }

    pub(crate) fn next_page(&mut self) -> bool {
        self.change_page(PageState::next)
    }

    pub(crate) fn previous_page(&mut self) -> bool {
        self.change_page(PageState::previous)
    }

    pub(crate) fn resize(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let items_per_page = self.catalog.config().items_per_page.for_width(width);
        self.change_page(|state| state.set_items_per_page(items_per_page))
    }

    pub(crate) fn open_preview(&mut self, id: ItemId) -> PreviewChange {
        if !self.catalog.contains(&id) {
            catalog_warn!(
                "Ignoring preview request for unknown item `{}` in catalog `{}`",
                id,
                self.catalog.name()
            );
            return PreviewChange::Rejected;
        }
        let change = match &self.preview {
            PreviewState::Open { item } if *item == id => return PreviewChange::Unchanged,
            PreviewState::Open { .. } => PreviewChange::Replaced,
            PreviewState::Idle => PreviewChange::Opened,
        };
        catalog_debug!("Catalog `{}` preview open on `{}`", self.catalog.name(), id);
        self.preview = PreviewState::Open { item: id };
        self.mark_dirty();
        change
    }

    pub(crate) fn close_preview(&mut self) -> bool {
        if !self.preview.is_open() {
            return false;
        }
        self.preview = PreviewState::Idle;
        self.mark_dirty();
        true
    }

    pub(crate) fn toggle_details(&mut self, id: ItemId) -> bool {
        if !self.catalog.contains(&id) {
            catalog_warn!(
                "Ignoring details toggle for unknown item `{}` in catalog `{}`",
                id,
                self.catalog.name()
            );
            return false;
        }
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.mark_dirty();
        true
    }

    fn change_page(&mut self, change: impl FnOnce(&mut PageState) -> bool) -> bool {
        let changed = change(&mut self.page);
        if changed {
            catalog_debug!(
                "Catalog `{}` page {}/{} ({} per page)",
                self.catalog.name(),
                self.page.current_page(),
                self.page.total_pages(),
                self.page.items_per_page()
            );
            self.mark_dirty();
        }
        changed
    }
}
