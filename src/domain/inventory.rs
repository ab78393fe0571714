use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stock count held for a product, optionally narrowed to one variant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub product_id: i32,
    /// `None` when the stock is tracked for the product as a whole.
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

/// Payload required to record stock.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl NewInventoryItem {
    pub fn new(product_id: i32, variant_id: Option<i32>, quantity: i32) -> Self {
        Self {
            product_id,
            variant_id,
            quantity,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}
