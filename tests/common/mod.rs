//! Helpers for integration tests.
#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use doom_shop::config::{DatabaseConfig, ServerConfig};
use doom_shop::db::{AppContext, DbPool, establish_connection_pool};
use doom_shop::domain::{
    inventory::NewInventoryItem, order_item::NewOrderItem, product::NewProduct,
    product_image::NewProductImage, product_variant::NewProductVariant, review::NewProductReview,
    wishlist::NewWishlistItem,
};
use doom_shop::repository::{DieselRepository, ProductWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename, 4).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    /// Application context sharing this database's pool.
    pub fn context(&self) -> AppContext {
        AppContext::with_pool(test_config(DatabaseConfig::configured(&self.filename)), self.pool())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Server configuration with defaults and the given database settings.
pub fn test_config(database: DatabaseConfig) -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|_| None).expect("default config");
    config.database = database;
    config
}

/// Ids of the rows created by [`seed_full_catalog`].
pub struct SeededCatalog {
    pub product_ids: Vec<i32>,
    pub variant_ids: Vec<i32>,
}

/// Insert two products with one row in every dependent table each.
pub fn seed_full_catalog(repo: &DieselRepository) -> SeededCatalog {
    let mut product_ids = Vec::new();
    let mut variant_ids = Vec::new();

    for (index, (name, category)) in [("Mask Tee", "apparel"), ("Madvillainy LP", "music")]
        .into_iter()
        .enumerate()
    {
        let product = repo
            .create_product(&NewProduct::new(name, category, 3000, "USD"))
            .expect("create product");
        repo.create_product_image(&NewProductImage::new(
            product.id,
            format!("https://cdn.example.com/{index}.png"),
            0,
        ))
        .expect("create image");
        let variant = repo
            .create_product_variant(&NewProductVariant::new(product.id, "Default").with_size("M"))
            .expect("create variant");
        repo.create_inventory_item(&NewInventoryItem::new(product.id, Some(variant.id), 5))
            .expect("create inventory");
        repo.create_review(&NewProductReview::new(product.id, "Viktor", 5))
            .expect("create review");
        repo.create_wishlist_item(&NewWishlistItem::new(product.id, "fan@example.com"))
            .expect("create wishlist item");
        repo.create_order_item(
            &NewOrderItem::new(format!("ORDER-{index}"), product.id, 1, 3000)
                .with_variant(variant.id),
        )
        .expect("create order item");

        product_ids.push(product.id);
        variant_ids.push(variant.id);
    }

    SeededCatalog {
        product_ids,
        variant_ids,
    }
}
