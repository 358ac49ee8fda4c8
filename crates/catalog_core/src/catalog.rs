use std::collections::HashSet;

use thiserror::Error;

use crate::sort::display_order;
use crate::{CatalogConfig, CatalogItem, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog `{0}` declares no categories and no `All` option")]
    NoCategories(String),
    #[error("duplicate item id `{0}`")]
    DuplicateId(ItemId),
    #[error("item `{id}` uses undeclared category `{category}`")]
    UnknownCategory { id: ItemId, category: String },
}

/// A validated, read-only collection together with its view settings.
///
/// Items keep their declared order; the display order from the configured
/// [`SortPolicy`](crate::SortPolicy) is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    config: CatalogConfig,
    items: Vec<CatalogItem>,
    display_order: Vec<usize>,
}

impl Catalog {
    pub fn new(config: CatalogConfig, items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if config.categories.is_empty() && !config.categories.includes_all() {
            return Err(CatalogError::NoCategories(config.name.clone()));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if !config.categories.is_uncategorized()
                && !config.categories.contains(&item.category)
            {
                return Err(CatalogError::UnknownCategory {
                    id: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        let display_order = display_order(&items, config.sort);
        Ok(Self {
            config,
            items,
            display_order,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Items in declared order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items in display order.
    pub fn sorted_items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.display_order.iter().map(|&index| &self.items[index])
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
