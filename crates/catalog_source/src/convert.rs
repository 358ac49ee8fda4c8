use catalog_core::{
    Catalog, CatalogConfig, CatalogError, CatalogItem, CategorySet, DefaultCategory, ItemId,
    ItemLink, ItemPayload, ItemsPerPage, PartialDate, SortPolicy, NARROW_BREAKPOINT_PX,
};
use catalog_logging::catalog_warn;

use crate::{
    derived_item_id, CatalogFile, DefaultCategoryRecord, ItemRecord, PageSizeRecord, Preset,
    SortRecord,
};

const DEFAULT_NAME: &str = "Catalog";

/// Builds the view settings: preset first, then every setting the file declares.
pub fn catalog_config(file: &CatalogFile) -> CatalogConfig {
    let mut config = match file.preset {
        Some(Preset::Certifications) => CatalogConfig::certifications(),
        Some(Preset::Projects) => CatalogConfig::projects(),
        Some(Preset::Materials) => CatalogConfig::materials(),
        Some(Preset::Experience) => CatalogConfig::experience(),
        None => CatalogConfig::new(DEFAULT_NAME, CategorySet::new(Vec::<String>::new(), false)),
    };

    if let Some(name) = &file.name {
        config.name = name.clone();
    }
    if file.categories.is_some() || file.include_all.is_some() {
        let categories = file
            .categories
            .clone()
            .unwrap_or_else(|| config.categories.categories().to_vec());
        let include_all = file
            .include_all
            .unwrap_or_else(|| config.categories.includes_all());
        config.categories = CategorySet::new(categories, include_all);
    }
    if let Some(default_category) = &file.default_category {
        config.default_category = match default_category {
            DefaultCategoryRecord::First => DefaultCategory::First,
            DefaultCategoryRecord::All => DefaultCategory::All,
            DefaultCategoryRecord::Named(name) => DefaultCategory::Named(name.clone()),
        };
    }
    if let Some(page_size) = file.items_per_page {
        config.items_per_page = match page_size {
            PageSizeRecord::Fixed(count) => ItemsPerPage::Fixed(count),
            PageSizeRecord::Responsive {
                breakpoint_px,
                narrow,
                wide,
            } => ItemsPerPage::Responsive {
                breakpoint_px: breakpoint_px.unwrap_or(NARROW_BREAKPOINT_PX),
                narrow,
                wide,
            },
        };
    }
    if let Some(sort) = file.sort {
        config.sort = match sort {
            SortRecord::NewestFirst => SortPolicy::NewestFirst,
            SortRecord::Declared => SortPolicy::Declared,
        };
    }
    config
}

/// Converts one record. Blank optional fields are dropped and an unreadable
/// date is logged and treated as absent.
pub fn catalog_item(record: ItemRecord) -> CatalogItem {
    let date_text = non_blank(record.date);
    let title = record.title.trim().to_string();
    let id = match non_blank(record.id) {
        Some(id) => id,
        None => derived_item_id(&title, date_text.as_deref()),
    };

    let occurred_at = date_text
        .as_deref()
        .and_then(|text| match PartialDate::parse(text) {
            Ok(date) => Some(date),
            Err(err) => {
                catalog_warn!("Item `{}` has unreadable date `{}`: {}", id, text, err);
                None
            }
        });

    let links = record
        .links
        .into_iter()
        .filter(|link| !link.url.trim().is_empty())
        .map(|link| ItemLink {
            label: link.label,
            url: link.url.trim().to_string(),
        })
        .collect();

    CatalogItem {
        id: ItemId::new(id),
        category: record.category,
        title,
        occurred_at,
        payload: ItemPayload {
            image: non_blank(record.image),
            issuer: non_blank(record.issuer),
            description: non_blank(record.description),
            tech_stack: record.tech_stack,
            links,
        },
    }
}

pub fn into_catalog(file: CatalogFile) -> Result<Catalog, CatalogError> {
    let config = catalog_config(&file);
    let items = file.items.into_iter().map(catalog_item).collect();
    Catalog::new(config, items)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
