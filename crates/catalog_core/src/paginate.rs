use std::ops::{Range, RangeInclusive};

/// Number of pages needed for `len` items; at least 1, even for no items.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}

/// Index window of 1-based `page`, clamped to `len`.
pub fn page_window(len: usize, page: usize, items_per_page: usize) -> Range<usize> {
    let per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    &items[page_window(items.len(), page, items_per_page)]
}

/// Every page in order. An empty sequence still yields one empty page.
pub fn pages<T>(items: &[T], items_per_page: usize) -> impl Iterator<Item = &[T]> + '_ {
    (1..=total_pages(items.len(), items_per_page))
        .map(move |page| page_slice(items, page, items_per_page))
}

/// Current page and page size of a paginated view.
///
/// Holds the filtered item count so that `1 <= current_page <= total_pages`
/// can be kept on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
    item_count: usize,
}

impl PageState {
    pub fn new(items_per_page: usize, item_count: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            item_count,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.items_per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    pub fn window(&self) -> Range<usize> {
        page_window(self.item_count, self.current_page, self.items_per_page)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.items_per_page)
    }

    /// Clamps `page` into `[1, total_pages]`. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let requested = if page < 1 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX)
        };
        self.set_page(requested.min(self.total_pages()))
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.set_page(self.current_page + 1)
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.set_page(self.current_page - 1)
        } else {
            false
        }
    }

    /// Starts over on page 1 for a new filtered item count.
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current_page = 1;
    }

    /// Applies a new page size and re-clamps the current page. Returns whether
    /// either value changed.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        let items_per_page = items_per_page.max(1);
        if items_per_page == self.items_per_page {
            return false;
        }
        self.items_per_page = items_per_page;
        self.current_page = self.current_page.min(self.total_pages());
        true
    }

    fn set_page(&mut self, page: usize) -> bool {
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }
}
