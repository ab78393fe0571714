use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::{
    domain::catalog::{CatalogSeedEntry, CatalogTable, CategoryCount, SeededProduct},
    domain::inventory::NewInventoryItem,
    domain::product::ProductWithImages,
    domain::product_image::NewProductImage,
    domain::product_variant::NewProductVariant,
    models::product::Product as DbProduct,
    repository::product::{
        insert_inventory_item, insert_product, insert_product_image, insert_product_variant,
        with_images,
    },
    repository::{
        CatalogMaintenance, CatalogStatusReader, DieselRepository, RepositoryError,
        RepositoryResult,
    },
};

impl CatalogMaintenance for DieselRepository {
    fn count_rows(&self, table: CatalogTable) -> RepositoryResult<i64> {
        use crate::schema::{
            inventory_items, order_items, product_images, product_reviews, product_variants,
            products, wishlist_items,
        };

        let mut conn = self.conn()?;
        let count = match table {
            CatalogTable::ProductReviews => {
                product_reviews::table.count().get_result::<i64>(&mut conn)
            }
            CatalogTable::WishlistItems => {
                wishlist_items::table.count().get_result::<i64>(&mut conn)
            }
            CatalogTable::OrderItems => order_items::table.count().get_result::<i64>(&mut conn),
            CatalogTable::InventoryItems => {
                inventory_items::table.count().get_result::<i64>(&mut conn)
            }
            CatalogTable::ProductVariants => {
                product_variants::table.count().get_result::<i64>(&mut conn)
            }
            CatalogTable::ProductImages => {
                product_images::table.count().get_result::<i64>(&mut conn)
            }
            CatalogTable::Products => products::table.count().get_result::<i64>(&mut conn),
        }?;

        Ok(count)
    }

    fn delete_all_rows(&self, table: CatalogTable) -> RepositoryResult<usize> {
        use crate::schema::{
            inventory_items, order_items, product_images, product_reviews, product_variants,
            products, wishlist_items,
        };

        let mut conn = self.conn()?;
        let deleted = match table {
            CatalogTable::ProductReviews => {
                diesel::delete(product_reviews::table).execute(&mut conn)
            }
            CatalogTable::WishlistItems => diesel::delete(wishlist_items::table).execute(&mut conn),
            CatalogTable::OrderItems => diesel::delete(order_items::table).execute(&mut conn),
            CatalogTable::InventoryItems => {
                diesel::delete(inventory_items::table).execute(&mut conn)
            }
            CatalogTable::ProductVariants => {
                diesel::delete(product_variants::table).execute(&mut conn)
            }
            CatalogTable::ProductImages => diesel::delete(product_images::table).execute(&mut conn),
            CatalogTable::Products => diesel::delete(products::table).execute(&mut conn),
        }?;

        Ok(deleted)
    }

    fn reset_identity(&self, table: CatalogTable) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        // AUTOINCREMENT counters live in sqlite_sequence; without a row the
        // next id is max(id) + 1, which is 1 for an empty table.
        diesel::sql_query("DELETE FROM sqlite_sequence WHERE name = ?")
            .bind::<Text, _>(table.table_name())
            .execute(&mut conn)?;

        Ok(())
    }

    fn seed_entry(&self, entry: &CatalogSeedEntry) -> RepositoryResult<SeededProduct> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let product = insert_product(conn, &entry.product)?;

            let mut image_ids = Vec::with_capacity(entry.image_urls.len());
            for (position, url) in entry.image_urls.iter().enumerate() {
                let image = NewProductImage::new(product.id, url, position as i32)
                    .with_alt_text(product.name.clone());
                image_ids.push(insert_product_image(conn, &image)?.id);
            }

            let mut variant_ids = Vec::with_capacity(entry.sizes.len());
            for size in &entry.sizes {
                let variant =
                    NewProductVariant::new(product.id, format!("{} / {size}", product.name))
                        .with_size(size);
                let variant = insert_product_variant(conn, &variant)?;
                insert_inventory_item(
                    conn,
                    &NewInventoryItem::new(product.id, Some(variant.id), entry.stock),
                )?;
                variant_ids.push(variant.id);
            }

            if entry.sizes.is_empty() {
                insert_inventory_item(
                    conn,
                    &NewInventoryItem::new(product.id, None, entry.stock),
                )?;
            }

            Ok(SeededProduct {
                product_id: product.id,
                image_ids,
                variant_ids,
            })
        })
    }
}

impl CatalogStatusReader for DieselRepository {
    fn count_products(&self) -> RepositoryResult<i64> {
        self.count_rows(CatalogTable::Products)
    }

    fn sample_products(&self, limit: i64) -> RepositoryResult<Vec<ProductWithImages>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_products = products::table
            .order(products::id.asc())
            .limit(limit)
            .load::<DbProduct>(&mut conn)?;

        with_images(&mut conn, db_products)
    }

    fn count_products_by_category(&self) -> RepositoryResult<Vec<CategoryCount>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let rows = products::table
            .group_by(products::category)
            .select((products::category, count_star()))
            .order(products::category.asc())
            .load::<(String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(category, products)| CategoryCount { category, products })
            .collect())
    }
}
