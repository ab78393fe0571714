use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order_item::{NewOrderItem as DomainNewOrderItem, OrderItem as DomainOrderItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct OrderItem {
    pub id: i32,
    pub order_reference: String,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_reference: &'a str,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_reference: value.order_reference,
            product_id: value.product_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrderItem> for NewOrderItem<'a> {
    fn from(value: &'a DomainNewOrderItem) -> Self {
        Self {
            order_reference: value.order_reference.as_str(),
            product_id: value.product_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
        }
    }
}
