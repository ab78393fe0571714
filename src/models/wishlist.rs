use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::wishlist::{
    NewWishlistItem as DomainNewWishlistItem, WishlistItem as DomainWishlistItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::wishlist_items)]
pub struct WishlistItem {
    pub id: i32,
    pub product_id: i32,
    pub user_email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wishlist_items)]
pub struct NewWishlistItem<'a> {
    pub product_id: i32,
    pub user_email: &'a str,
}

impl From<WishlistItem> for DomainWishlistItem {
    fn from(value: WishlistItem) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            user_email: value.user_email,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewWishlistItem> for NewWishlistItem<'a> {
    fn from(value: &'a DomainNewWishlistItem) -> Self {
        Self {
            product_id: value.product_id,
            user_email: value.user_email.as_str(),
        }
    }
}
