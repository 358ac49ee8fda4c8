use crate::CategorySelection;

/// Viewport width (px) below which responsive catalogs switch to the narrow page size.
pub const NARROW_BREAKPOINT_PX: u32 = 768;

/// The declared categories of one collection type, in button order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<String>,
    include_all: bool,
}

impl CategorySet {
    /// Duplicate names are dropped, keeping the first occurrence.
    pub fn new<I, S>(categories: I, include_all: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self {
            categories: unique,
            include_all,
        }
    }

    /// A collection without categories: only the `All` option, and items
    /// may carry any category label (usually none).
    pub fn uncategorized() -> Self {
        Self::new(Vec::<String>::new(), true)
    }

    pub fn is_uncategorized(&self) -> bool {
        self.categories.is_empty() && self.include_all
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn includes_all(&self) -> bool {
        self.include_all
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether `selection` names something a user may pick for this collection.
    pub fn allows(&self, selection: &CategorySelection) -> bool {
        match selection {
            CategorySelection::All => self.include_all,
            CategorySelection::Only(category) => self.contains(category),
        }
    }

    /// Selectable options in button order; `All` first when enabled.
    pub fn options(&self) -> Vec<CategorySelection> {
        let all = self.include_all.then_some(CategorySelection::All);
        all.into_iter()
            .chain(self.categories.iter().cloned().map(CategorySelection::Only))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultCategory {
    #[default]
    First,
    All,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsPerPage {
    Fixed(usize),
    Responsive {
        breakpoint_px: u32,
        narrow: usize,
        wide: usize,
    },
}

impl ItemsPerPage {
    /// Page size for a viewport `width` pixels wide; never zero.
    pub fn for_width(&self, width: u32) -> usize {
        let count = match *self {
            ItemsPerPage::Fixed(count) => count,
            ItemsPerPage::Responsive {
                breakpoint_px,
                narrow,
                wide,
            } => {
                if width < breakpoint_px {
                    narrow
                } else {
                    wide
                }
            }
        };
        count.max(1)
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        ItemsPerPage::Fixed(6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    #[default]
    NewestFirst,
    Declared,
}

/// Per-collection settings for the catalog view engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub name: String,
    pub categories: CategorySet,
    pub default_category: DefaultCategory,
    pub items_per_page: ItemsPerPage,
    pub sort: SortPolicy,
}

impl CatalogConfig {
    pub fn new(name: impl Into<String>, categories: CategorySet) -> Self {
        Self {
            name: name.into(),
            categories,
            default_category: DefaultCategory::default(),
            items_per_page: ItemsPerPage::default(),
            sort: SortPolicy::default(),
        }
    }

    pub fn with_default_category(mut self, default_category: DefaultCategory) -> Self {
        self.default_category = default_category;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: ItemsPerPage) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    pub fn certifications() -> Self {
        Self::new(
            "Certifications",
            CategorySet::new(
                [
                    "Intercollege Competitions",
                    "NPTEL",
                    "Course Completions",
                    "Podcasts",
                    "Workshops",
                ],
                false,
            ),
        )
        .with_default_category(DefaultCategory::Named("Course Completions".to_string()))
        .with_items_per_page(ItemsPerPage::Responsive {
            breakpoint_px: NARROW_BREAKPOINT_PX,
            narrow: 4,
            wide: 8,
        })
    }

    pub fn projects() -> Self {
        Self::new("Projects", CategorySet::new(["Featured", "Hobby"], true))
            .with_default_category(DefaultCategory::All)
            .with_items_per_page(ItemsPerPage::Responsive {
                breakpoint_px: NARROW_BREAKPOINT_PX,
                narrow: 3,
                wide: 6,
            })
    }

    pub fn materials() -> Self {
        Self::new(
            "Materials",
            CategorySet::new(["Programming Languages", "Database", "Career"], true),
        )
        .with_default_category(DefaultCategory::All)
        .with_items_per_page(ItemsPerPage::Fixed(9))
        .with_sort(SortPolicy::Declared)
    }

    /// One entry per page in source order, with numbered page buttons.
    pub fn experience() -> Self {
        Self::new("Experience", CategorySet::uncategorized())
            .with_default_category(DefaultCategory::All)
            .with_items_per_page(ItemsPerPage::Fixed(1))
            .with_sort(SortPolicy::Declared)
    }

    /// Selection a freshly mounted view starts with.
    ///
    /// `Named` falls back to `First` when the name is not declared; `All` falls
    /// back to `First` when the collection has no `All` option.
    pub fn initial_selection(&self) -> CategorySelection {
        let first = || {
            self.categories
                .categories()
                .first()
                .cloned()
                .map(CategorySelection::Only)
                .unwrap_or(CategorySelection::All)
        };
        match &self.default_category {
            DefaultCategory::Named(name) if self.categories.contains(name) => {
                CategorySelection::Only(name.clone())
            }
            DefaultCategory::All if self.categories.includes_all() => CategorySelection::All,
            DefaultCategory::Named(_) | DefaultCategory::All | DefaultCategory::First => first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_set_drops_duplicates_in_order() {
        let set = CategorySet::new(["NPTEL", "Podcasts", "NPTEL"], true);
        assert_eq!(set.categories(), ["NPTEL", "Podcasts"]);
        assert_eq!(
            set.options(),
            vec![
                CategorySelection::All,
                CategorySelection::only("NPTEL"),
                CategorySelection::only("Podcasts"),
            ]
        );
    }

    #[test]
    fn all_is_only_allowed_when_enabled() {
        let set = CategorySet::new(["NPTEL"], false);
        assert!(!set.allows(&CategorySelection::All));
        assert!(set.allows(&CategorySelection::only("NPTEL")));
        assert!(!set.allows(&CategorySelection::only("nptel")));
    }

    #[test]
    fn responsive_page_size_switches_at_breakpoint() {
        let policy = ItemsPerPage::Responsive {
            breakpoint_px: 768,
            narrow: 2,
            wide: 4,
        };
        assert_eq!(policy.for_width(767), 2);
        assert_eq!(policy.for_width(768), 4);
        assert_eq!(ItemsPerPage::Fixed(0).for_width(1024), 1);
    }

    #[test]
    fn named_default_falls_back_to_first() {
        let config = CatalogConfig::new("c", CategorySet::new(["A", "B"], false))
            .with_default_category(DefaultCategory::Named("Z".to_string()));
        assert_eq!(config.initial_selection(), CategorySelection::only("A"));

        let config = config.with_default_category(DefaultCategory::Named("B".to_string()));
        assert_eq!(config.initial_selection(), CategorySelection::only("B"));
    }

    #[test]
    fn all_default_requires_all_option() {
        let config = CatalogConfig::new("c", CategorySet::new(["A"], false))
            .with_default_category(DefaultCategory::All);
        assert_eq!(config.initial_selection(), CategorySelection::only("A"));

        let config = CatalogConfig::new("c", CategorySet::new(["A"], true))
            .with_default_category(DefaultCategory::All);
        assert_eq!(config.initial_selection(), CategorySelection::All);
    }

    #[test]
    fn presets_start_on_their_preferred_category() {
        assert_eq!(
            CatalogConfig::certifications().initial_selection(),
            CategorySelection::only("Course Completions")
        );
        assert_eq!(
            CatalogConfig::materials().initial_selection(),
            CategorySelection::All
        );
        assert_eq!(
            CatalogConfig::experience().initial_selection(),
            CategorySelection::All
        );
    }

    #[test]
    fn uncategorized_set_offers_only_all() {
        let set = CategorySet::uncategorized();
        assert!(set.is_uncategorized());
        assert_eq!(set.options(), vec![CategorySelection::All]);
        assert!(!set.allows(&CategorySelection::only("Work")));
        assert!(!CategorySet::new(["A"], true).is_uncategorized());
        assert!(!CategorySet::new(Vec::<String>::new(), false).is_uncategorized());
    }
}
