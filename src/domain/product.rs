use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product_image::ProductImage;
use crate::domain::product_variant::ProductVariant;
use crate::pagination::Pagination;

/// Domain representation of a sellable catalog item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown on the product page.
    pub description: Option<String>,
    /// Catalog section the product is listed under (for example `apparel`).
    pub category: String,
    /// Base price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// ISO 4217 currency code associated with the price.
    pub currency: String,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown on the product page.
    pub description: Option<String>,
    /// Catalog section the product is listed under.
    pub category: String,
    /// Base price in the smallest currency unit.
    pub price_cents: i64,
    /// ISO 4217 currency code associated with the price.
    pub currency: String,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price_cents: i64,
        currency: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            description: None,
            category: category.into(),
            price_cents,
            currency: currency.into(),
            updated_at: now,
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A product together with its images, used by listings and the status report.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductWithImages {
    #[serde(flatten)]
    pub product: Product,
    /// Images ordered by their display position.
    pub images: Vec<ProductImage>,
}

/// A variant enriched with the stock held for it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VariantStock {
    #[serde(flatten)]
    pub variant: ProductVariant,
    /// Units in stock across all inventory rows for the variant.
    pub quantity: i64,
}

/// Everything the product page shows about a single product.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub variants: Vec<VariantStock>,
    /// Stock recorded against the product itself rather than a variant.
    pub unassigned_stock: i64,
    pub review_count: i64,
    /// Mean rating, absent when the product has no reviews.
    pub average_rating: Option<f64>,
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to a single category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
