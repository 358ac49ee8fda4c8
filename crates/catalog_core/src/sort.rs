use std::cmp::Ordering;

use crate::{CatalogItem, SortPolicy};

/// Ordering key for an item; undated items get `None`, which sorts below any date.
pub fn chronological_key(item: &CatalogItem) -> Option<(i32, u32)> {
    item.occurred_at.map(|date| date.sort_key())
}

fn newest_first(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    chronological_key(b).cmp(&chronological_key(a))
}

/// Most recent first. Stable, so items sharing a month keep their relative order.
pub fn sort_newest_first<'a, I>(items: I) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let mut sorted: Vec<&CatalogItem> = items.into_iter().collect();
    sorted.sort_by(|a, b| newest_first(a, b));
    sorted
}

/// Display order of `items` under `policy`, as indices into `items`.
pub fn display_order(items: &[CatalogItem], policy: SortPolicy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    match policy {
        SortPolicy::NewestFirst => order.sort_by(|&a, &b| newest_first(&items[a], &items[b])),
        SortPolicy::Declared => {}
    }
    order
}
