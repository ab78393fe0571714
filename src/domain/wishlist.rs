use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product saved by a shopper for later.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: i32,
    pub product_id: i32,
    pub user_email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewWishlistItem {
    pub product_id: i32,
    pub user_email: String,
}

impl NewWishlistItem {
    pub fn new(product_id: i32, user_email: impl Into<String>) -> Self {
        Self {
            product_id,
            user_email: user_email.into(),
        }
    }
}
