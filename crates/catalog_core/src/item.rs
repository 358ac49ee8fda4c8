use std::fmt;

use crate::PartialDate;

/// Image shown when an item carries no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLink {
    pub label: String,
    pub url: String,
}

/// Display-only fields. The engine never filters or orders on these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemPayload {
    pub image: Option<String>,
    pub issuer: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub links: Vec<ItemLink>,
}

impl ItemPayload {
    /// The image reference, or [`PLACEHOLDER_IMAGE`] when it is missing or blank.
    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref().map(str::trim) {
            Some(image) if !image.is_empty() => image,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub category: String,
    pub title: String,
    pub occurred_at: Option<PartialDate>,
    pub payload: ItemPayload,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<ItemId>,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            occurred_at: None,
            payload: ItemPayload::default(),
        }
    }

    pub fn with_date(mut self, date: PartialDate) -> Self {
        self.occurred_at = Some(date);
        self
    }

    pub fn with_payload(mut self, payload: ItemPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn date_label(&self) -> Option<String> {
        self.occurred_at.map(|date| date.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogItem, ItemPayload, PLACEHOLDER_IMAGE};

    #[test]
    fn blank_image_falls_back_to_placeholder() {
        let mut payload = ItemPayload::default();
        assert_eq!(payload.image_or_placeholder(), PLACEHOLDER_IMAGE);

        payload.image = Some("  ".to_string());
        assert_eq!(payload.image_or_placeholder(), PLACEHOLDER_IMAGE);

        payload.image = Some("assets/certifications/iot.png".to_string());
        assert_eq!(
            payload.image_or_placeholder(),
            "assets/certifications/iot.png"
        );
    }

    #[test]
    fn undated_item_has_no_label() {
        let item = CatalogItem::new("a", "NPTEL", "Introduction to IOT");
        assert_eq!(item.date_label(), None);
    }
}
