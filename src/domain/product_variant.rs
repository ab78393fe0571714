use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A purchasable variation of a product such as a shirt size.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductVariant {
    /// Unique identifier of the variant.
    pub id: i32,
    /// Product this variant belongs to.
    pub product_id: i32,
    /// Display name, for example `Black / L`.
    pub name: String,
    /// Optional stock keeping unit identifier.
    pub sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Price override in the smallest currency unit; the product price applies when absent.
    pub price_cents: Option<i64>,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new variant.
#[derive(Debug, Clone)]
pub struct NewProductVariant {
    pub product_id: i32,
    pub name: String,
    pub sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price_cents: Option<i64>,
}

impl NewProductVariant {
    pub fn new(product_id: i32, name: impl Into<String>) -> Self {
        Self {
            product_id,
            name: name.into(),
            sku: None,
            size: None,
            color: None,
            price_cents: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}
