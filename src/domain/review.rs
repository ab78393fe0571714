use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Customer review of a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductReview {
    pub id: i32,
    pub product_id: i32,
    pub author_name: String,
    /// Star rating between 1 and 5.
    pub rating: i32,
    pub body: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload required to store a review.
#[derive(Debug, Clone)]
pub struct NewProductReview {
    pub product_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub body: Option<String>,
}

impl NewProductReview {
    pub fn new(product_id: i32, author_name: impl Into<String>, rating: i32) -> Self {
        Self {
            product_id,
            author_name: author_name.into(),
            rating,
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
