use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: i32,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem {
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewInventoryItem> for NewInventoryItem {
    fn from(value: &DomainNewInventoryItem) -> Self {
        Self {
            product_id: value.product_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            updated_at: value.updated_at,
        }
    }
}
