use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Image asset displayed for a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub alt_text: Option<String>,
    /// Display order, lowest first.
    pub position: i32,
    pub created_at: NaiveDateTime,
}

/// Payload required to attach an image to a product.
#[derive(Debug, Clone)]
pub struct NewProductImage {
    pub product_id: i32,
    pub url: String,
    pub alt_text: Option<String>,
    pub position: i32,
}

impl NewProductImage {
    pub fn new(product_id: i32, url: impl Into<String>, position: i32) -> Self {
        Self {
            product_id,
            url: url.into(),
            alt_text: None,
            position,
        }
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }
}
