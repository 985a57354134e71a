//! Catalog types deserialized from the catalog JSON document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product.
///
/// Immutable once loaded; identity is [`Product::id`], unique within the
/// catalog. Field names follow the wire format of the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub category: String,
    /// Sub-type within a category (e.g. "hoodie").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Flagged for promotional/featured placement.
    #[serde(default)]
    pub top: bool,
    pub description: String,
    /// Image path relative to the image root (served by the HTTP layer).
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<u32>,
}

/// Entry in the catalog's category reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Machine key matching [`Product::category`].
    pub name: String,
    /// Localized display name.
    pub title: String,
}

/// Entry in the catalog's color reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRef {
    /// Machine key matching [`Product::color`].
    pub name: String,
    /// Localized display name.
    pub title: String,
    /// CSS color value for swatches, when the document carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// The full catalog: products plus auxiliary reference lists.
///
/// Read-only after load. Query operations never mutate it; they clone the
/// products they select into their result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub goods: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub colors: Vec<ColorRef>,
}

impl Catalog {
    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.goods.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing with [`crate::DomainError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product carries the given id.
    pub fn get(&self, id: &str) -> Result<&Product, crate::DomainError> {
        self.find(id)
            .ok_or_else(|| crate::DomainError::NotFound(id.to_owned()))
    }
}
