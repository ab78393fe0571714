use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_image::{
    NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub alt_text: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage<'a> {
    pub product_id: i32,
    pub url: &'a str,
    pub alt_text: Option<&'a str>,
    pub position: i32,
}

impl From<ProductImage> for DomainProductImage {
    fn from(value: ProductImage) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            url: value.url,
            alt_text: value.alt_text,
            position: value.position,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductImage> for NewProductImage<'a> {
    fn from(value: &'a DomainNewProductImage) -> Self {
        Self {
            product_id: value.product_id,
            url: value.url.as_str(),
            alt_text: value.alt_text.as_deref(),
            position: value.position,
        }
    }
}
