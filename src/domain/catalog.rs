use std::fmt;

use serde::Serialize;

use crate::domain::product::{NewProduct, ProductWithImages};

/// Tables that make up the product catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTable {
    ProductReviews,
    WishlistItems,
    OrderItems,
    InventoryItems,
    ProductVariants,
    ProductImages,
    Products,
}

impl CatalogTable {
    /// Order in which rows must be deleted so that no row is removed while
    /// another still references it. Dependents come first, `products` last.
    pub const DELETION_ORDER: [CatalogTable; 7] = [
        CatalogTable::ProductReviews,
        CatalogTable::WishlistItems,
        CatalogTable::OrderItems,
        CatalogTable::InventoryItems,
        CatalogTable::ProductVariants,
        CatalogTable::ProductImages,
        CatalogTable::Products,
    ];

    /// Tables whose identity sequence restarts at 1 after a reset.
    pub const IDENTITY_TABLES: [CatalogTable; 3] = [
        CatalogTable::Products,
        CatalogTable::ProductImages,
        CatalogTable::ProductVariants,
    ];

    /// SQL name of the table.
    pub fn table_name(self) -> &'static str {
        match self {
            CatalogTable::ProductReviews => "product_reviews",
            CatalogTable::WishlistItems => "wishlist_items",
            CatalogTable::OrderItems => "order_items",
            CatalogTable::InventoryItems => "inventory_items",
            CatalogTable::ProductVariants => "product_variants",
            CatalogTable::ProductImages => "product_images",
            CatalogTable::Products => "products",
        }
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A single step of the catalog reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "table", rename_all = "snake_case")]
pub enum CatalogResetStep {
    DeleteRows(CatalogTable),
    ResetIdentity(CatalogTable),
}

impl fmt::Display for CatalogResetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogResetStep::DeleteRows(table) => write!(f, "delete rows from {table}"),
            CatalogResetStep::ResetIdentity(table) => write!(f, "reset identity of {table}"),
        }
    }
}

/// Outcome of a completed catalog reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogResetReport {
    /// Rows removed per table, in deletion order.
    pub deleted: Vec<(CatalogTable, usize)>,
    /// Tables whose identity sequence was restarted.
    pub identities_reset: Vec<CatalogTable>,
}

impl CatalogResetReport {
    pub fn total_deleted(&self) -> usize {
        self.deleted.iter().map(|(_, rows)| rows).sum()
    }
}

/// Number of products listed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub products: i64,
}

/// Diagnostic summary of the catalog contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatus {
    pub total_products: i64,
    /// Up to [`CatalogStatus::SAMPLE_SIZE`] products with their images.
    pub samples: Vec<ProductWithImages>,
    /// Product count per category, sorted by category name.
    pub categories: Vec<CategoryCount>,
}

impl CatalogStatus {
    pub const SAMPLE_SIZE: i64 = 3;

    pub fn empty() -> Self {
        Self {
            total_products: 0,
            samples: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total products: {}", self.total_products)?;

        if !self.samples.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sample products:")?;
            for sample in &self.samples {
                let product = &sample.product;
                writeln!(
                    f,
                    "  #{} {} [{}] {}.{:02} {} ({} images)",
                    product.id,
                    product.name,
                    product.category,
                    product.price_cents / 100,
                    product.price_cents.rem_euclid(100),
                    product.currency,
                    sample.images.len()
                )?;
                for image in &sample.images {
                    writeln!(f, "    - {}", image.url)?;
                }
            }
        }

        if !self.categories.is_empty() {
            writeln!(f)?;
            writeln!(f, "Products by category:")?;
            for entry in &self.categories {
                writeln!(f, "  {}: {}", entry.category, entry.products)?;
            }
        }

        Ok(())
    }
}

/// A product to seed along with its images, sizes and stock.
#[derive(Debug, Clone)]
pub struct CatalogSeedEntry {
    pub product: NewProduct,
    /// Image URLs in display order.
    pub image_urls: Vec<String>,
    /// One variant is created per size.
    pub sizes: Vec<String>,
    /// Stock recorded per variant, or for the product when there are no sizes.
    pub stock: i32,
}

/// Identifiers created while seeding one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededProduct {
    pub product_id: i32,
    pub image_ids: Vec<i32>,
    pub variant_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::product::Product;

    #[test]
    fn deletion_order_puts_products_last() {
        let order = CatalogTable::DELETION_ORDER;
        assert_eq!(order.first(), Some(&CatalogTable::ProductReviews));
        assert_eq!(order.last(), Some(&CatalogTable::Products));

        let variants = order
            .iter()
            .position(|table| *table == CatalogTable::ProductVariants)
            .unwrap();
        let inventory = order
            .iter()
            .position(|table| *table == CatalogTable::InventoryItems)
            .unwrap();
        assert!(inventory < variants, "inventory references variants");
    }

    #[test]
    fn empty_status_prints_only_the_count() {
        let rendered = CatalogStatus::empty().to_string();

        assert_eq!(rendered, "Total products: 0\n");
    }

    #[test]
    fn status_lists_samples_and_categories() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let status = CatalogStatus {
            total_products: 1,
            samples: vec![ProductWithImages {
                product: Product {
                    id: 1,
                    name: "Mask Tee".to_string(),
                    description: None,
                    category: "apparel".to_string(),
                    price_cents: 3505,
                    currency: "USD".to_string(),
                    created_at: timestamp,
                    updated_at: timestamp,
                },
                images: Vec::new(),
            }],
            categories: vec![CategoryCount {
                category: "apparel".to_string(),
                products: 1,
            }],
        };

        let rendered = status.to_string();

        assert!(rendered.contains("#1 Mask Tee [apparel] 35.05 USD (0 images)"));
        assert!(rendered.contains("Products by category:\n  apparel: 1\n"));
    }
}
