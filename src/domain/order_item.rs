use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Line item of a placed order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    /// Reference of the order, usually the PayPal order id.
    pub order_reference: String,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    /// Price per unit at the time of purchase, in the smallest currency unit.
    pub unit_price_cents: i64,
    pub created_at: NaiveDateTime,
}

/// Payload required to record a line item.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_reference: String,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl NewOrderItem {
    pub fn new(
        order_reference: impl Into<String>,
        product_id: i32,
        quantity: i32,
        unit_price_cents: i64,
    ) -> Self {
        Self {
            order_reference: order_reference.into(),
            product_id,
            variant_id: None,
            quantity,
            unit_price_cents,
        }
    }

    pub fn with_variant(mut self, variant_id: i32) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
}
