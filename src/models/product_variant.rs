use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_variant::{
    NewProductVariant as DomainNewProductVariant, ProductVariant as DomainProductVariant,
};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_variants)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_variants)]
pub struct NewProductVariant<'a> {
    pub product_id: i32,
    pub name: &'a str,
    pub sku: Option<&'a str>,
    pub size: Option<&'a str>,
    pub color: Option<&'a str>,
    pub price_cents: Option<i64>,
}

impl From<ProductVariant> for DomainProductVariant {
    fn from(value: ProductVariant) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            name: value.name,
            sku: value.sku,
            size: value.size,
            color: value.color,
            price_cents: value.price_cents,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductVariant> for NewProductVariant<'a> {
    fn from(value: &'a DomainNewProductVariant) -> Self {
        Self {
            product_id: value.product_id,
            name: value.name.as_str(),
            sku: value.sku.as_deref(),
            size: value.size.as_deref(),
            color: value.color.as_deref(),
            price_cents: value.price_cents,
        }
    }
}
