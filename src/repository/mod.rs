use crate::db::{DbConnection, DbPool};
use crate::domain::{
    catalog::{CatalogSeedEntry, CatalogTable, CategoryCount, SeededProduct},
    inventory::{InventoryItem, NewInventoryItem},
    order_item::{NewOrderItem, OrderItem},
    product::{NewProduct, Product, ProductDetail, ProductListQuery, ProductWithImages},
    product_image::{NewProductImage, ProductImage},
    product_variant::{NewProductVariant, ProductVariant},
    review::{NewProductReview, ProductReview},
    wishlist::{NewWishlistItem, WishlistItem},
};

pub mod catalog;
pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_detail(&self, id: i32) -> RepositoryResult<Option<ProductDetail>>;
    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductWithImages>)>;
}

/// Write operations over products and the rows that hang off them.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn create_product_image(&self, new_image: &NewProductImage) -> RepositoryResult<ProductImage>;
    fn create_product_variant(
        &self,
        new_variant: &NewProductVariant,
    ) -> RepositoryResult<ProductVariant>;
    fn create_inventory_item(&self, new_item: &NewInventoryItem)
    -> RepositoryResult<InventoryItem>;
    fn create_review(&self, new_review: &NewProductReview) -> RepositoryResult<ProductReview>;
    fn create_wishlist_item(&self, new_item: &NewWishlistItem) -> RepositoryResult<WishlistItem>;
    fn create_order_item(&self, new_item: &NewOrderItem) -> RepositoryResult<OrderItem>;
    /// Delete one product. Fails while dependent rows still reference it.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Bulk operations used by the maintenance binaries.
pub trait CatalogMaintenance {
    fn count_rows(&self, table: CatalogTable) -> RepositoryResult<i64>;
    /// Delete every row of `table`, returning the number removed.
    fn delete_all_rows(&self, table: CatalogTable) -> RepositoryResult<usize>;
    /// Restart the identity sequence of `table` so the next insert gets id 1.
    fn reset_identity(&self, table: CatalogTable) -> RepositoryResult<()>;
    /// Insert a product with its images, variants and stock in one transaction.
    fn seed_entry(&self, entry: &CatalogSeedEntry) -> RepositoryResult<SeededProduct>;
}

/// Aggregate reads backing the status report.
pub trait CatalogStatusReader {
    fn count_products(&self) -> RepositoryResult<i64>;
    /// Oldest `limit` products together with their images.
    fn sample_products(&self, limit: i64) -> RepositoryResult<Vec<ProductWithImages>>;
    fn count_products_by_category(&self) -> RepositoryResult<Vec<CategoryCount>>;
}
