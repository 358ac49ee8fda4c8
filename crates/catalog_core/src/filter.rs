use std::fmt;

use crate::CatalogItem;

/// Label of the pass-through category button.
pub const ALL_LABEL: &str = "All";

/// The active category filter of a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    All,
    Only(String),
}

impl CategorySelection {
    pub fn only(category: impl Into<String>) -> Self {
        CategorySelection::Only(category.into())
    }

    /// Maps a button label back to a selection; `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            CategorySelection::All
        } else {
            CategorySelection::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_LABEL,
            CategorySelection::Only(category) => category,
        }
    }

    /// Exact, case-sensitive match; `All` matches everything.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keeps the items whose category matches `selection`, in their original order.
pub fn filter_by_category<'a, I>(items: I, selection: &CategorySelection) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .filter(|item| selection.matches(&item.category))
        .collect()
}
