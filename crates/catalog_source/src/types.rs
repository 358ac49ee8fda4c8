use serde::{Deserialize, Serialize};

/// On-disk catalog definition. Settings left out fall back to the preset, if
/// one is named, and then to the engine defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub include_all: Option<bool>,
    #[serde(default)]
    pub default_category: Option<DefaultCategoryRecord>,
    #[serde(default)]
    pub items_per_page: Option<PageSizeRecord>,
    #[serde(default)]
    pub sort: Option<SortRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Certifications,
    Projects,
    Materials,
    Experience,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultCategoryRecord {
    First,
    All,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSizeRecord {
    Fixed(usize),
    Responsive {
        #[serde(default)]
        breakpoint_px: Option<u32>,
        narrow: usize,
        wide: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortRecord {
    NewestFirst,
    Declared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    /// Left empty in collections without categories.
    #[serde(default)]
    pub category: String,
    /// Free-form date such as `"March 2024"` or `"October 17, 2023"`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub label: String,
    pub url: String,
}
