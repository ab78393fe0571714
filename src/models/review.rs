use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{
    NewProductReview as DomainNewProductReview, ProductReview as DomainProductReview,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct ProductReview {
    pub id: i32,
    pub product_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub body: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_reviews)]
pub struct NewProductReview<'a> {
    pub product_id: i32,
    pub author_name: &'a str,
    pub rating: i32,
    pub body: Option<&'a str>,
}

impl From<ProductReview> for DomainProductReview {
    fn from(value: ProductReview) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            author_name: value.author_name,
            rating: value.rating,
            body: value.body,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductReview> for NewProductReview<'a> {
    fn from(value: &'a DomainNewProductReview) -> Self {
        Self {
            product_id: value.product_id,
            author_name: value.author_name.as_str(),
            rating: value.rating,
            body: value.body.as_deref(),
        }
    }
}
