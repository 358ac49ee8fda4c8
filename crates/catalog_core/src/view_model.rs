use crate::{CatalogItem, CategorySelection, ItemId, ItemLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    pub title: String,
    pub categories: Vec<CategoryButtonView>,
    pub items: Vec<ItemCardView>,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub pages: Vec<PageButtonView>,
    pub has_previous: bool,
    pub has_next: bool,
    pub preview: Option<PreviewView>,
    pub dirty: bool,
}

impl CatalogViewModel {
    /// Page controls are only worth drawing when there is more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButtonView {
    pub selection: CategorySelection,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCardView {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    pub date_label: Option<String>,
    pub image: String,
    pub issuer: Option<String>,
    pub tech_stack: Vec<String>,
    pub expanded: bool,
}

impl ItemCardView {
    pub(crate) fn from_item(item: &CatalogItem, expanded: bool) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            category: item.category.clone(),
            date_label: item.date_label(),
            image: item.payload.image_or_placeholder().to_string(),
            issuer: item.payload.issuer.clone(),
            tech_stack: item.payload.tech_stack.clone(),
            expanded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButtonView {
    pub number: usize,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub id: ItemId,
    pub title: String,
    pub image: String,
    pub description: Option<String>,
    pub links: Vec<ItemLink>,
}

impl PreviewView {
    pub(crate) fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image: item.payload.image_or_placeholder().to_string(),
            description: item.payload.description.clone(),
            links: item.payload.links.clone(),
        }
    }
}
