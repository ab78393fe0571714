use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    domain::inventory::{
        InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
    },
    domain::order_item::{NewOrderItem as DomainNewOrderItem, OrderItem as DomainOrderItem},
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetail, ProductListQuery,
        ProductWithImages, VariantStock,
    },
    domain::product_image::{
        NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
    },
    domain::product_variant::{
        NewProductVariant as DomainNewProductVariant, ProductVariant as DomainProductVariant,
    },
    domain::review::{
        NewProductReview as DomainNewProductReview, ProductReview as DomainProductReview,
    },
    domain::wishlist::{
        NewWishlistItem as DomainNewWishlistItem, WishlistItem as DomainWishlistItem,
    },
    models::inventory::{InventoryItem as DbInventoryItem, NewInventoryItem as DbNewInventoryItem},
    models::order_item::{NewOrderItem as DbNewOrderItem, OrderItem as DbOrderItem},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    models::product_image::{NewProductImage as DbNewProductImage, ProductImage as DbProductImage},
    models::product_variant::{
        NewProductVariant as DbNewProductVariant, ProductVariant as DbProductVariant,
    },
    models::review::{NewProductReview as DbNewProductReview, ProductReview as DbProductReview},
    models::wishlist::{NewWishlistItem as DbNewWishlistItem, WishlistItem as DbWishlistItem},
    repository::{DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult},
};

const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn get_product_detail(&self, id: i32) -> RepositoryResult<Option<ProductDetail>> {
        use crate::schema::{inventory_items, product_reviews, product_variants};

        let mut conn = self.conn()?;
        let Some(db_product) = crate::schema::products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let images = load_images_for_products(&mut conn, std::slice::from_ref(&db_product))?
            .pop()
            .unwrap_or_default();

        let variants = DbProductVariant::belonging_to(&db_product)
            .order(product_variants::id.asc())
            .load::<DbProductVariant>(&mut conn)?;

        let stock_rows = inventory_items::table
            .filter(inventory_items::product_id.eq(db_product.id))
            .select((inventory_items::variant_id, inventory_items::quantity))
            .load::<(Option<i32>, i32)>(&mut conn)?;

        let mut stock_by_variant: HashMap<i32, i64> = HashMap::new();
        let mut unassigned_stock = 0i64;
        for (variant_id, quantity) in stock_rows {
            match variant_id {
                Some(variant_id) => {
                    *stock_by_variant.entry(variant_id).or_default() += i64::from(quantity);
                }
                None => unassigned_stock += i64::from(quantity),
            }
        }

        let ratings = product_reviews::table
            .filter(product_reviews::product_id.eq(db_product.id))
            .select(product_reviews::rating)
            .load::<i32>(&mut conn)?;
        let review_count = ratings.len() as i64;
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: f64 = ratings.iter().map(|rating| f64::from(*rating)).sum();
            Some(sum / ratings.len() as f64)
        };

        let variants = variants
            .into_iter()
            .map(|variant| {
                let quantity = stock_by_variant.remove(&variant.id).unwrap_or_default();
                VariantStock {
                    variant: DomainProductVariant::from(variant),
                    quantity,
                }
            })
            .collect();

        Ok(Some(ProductDetail {
            product: db_product.into(),
            images,
            variants,
            unassigned_stock,
            review_count,
            average_rating,
        }))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductWithImages>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let filtered = || {
            let mut items = products::table.into_boxed::<Sqlite>();

            if let Some(category) = query.category.as_ref() {
                items = items.filter(products::category.eq(category.clone()));
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", escape_like(term));
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE)
                        .or(products::description.like(pattern).escape(LIKE_ESCAPE)),
                );
            }

            items
        };

        let total = filtered().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered().order((products::created_at.desc(), products::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX));
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        if db_products.is_empty() {
            return Ok((total, Vec::new()));
        }

        Ok((total, with_images(&mut conn, db_products)?))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        let mut conn = self.conn()?;
        insert_product(&mut conn, new_product)
    }

    fn create_product_image(
        &self,
        new_image: &DomainNewProductImage,
    ) -> RepositoryResult<DomainProductImage> {
        let mut conn = self.conn()?;
        insert_product_image(&mut conn, new_image)
    }

    fn create_product_variant(
        &self,
        new_variant: &DomainNewProductVariant,
    ) -> RepositoryResult<DomainProductVariant> {
        let mut conn = self.conn()?;
        insert_product_variant(&mut conn, new_variant)
    }

    fn create_inventory_item(
        &self,
        new_item: &DomainNewInventoryItem,
    ) -> RepositoryResult<DomainInventoryItem> {
        let mut conn = self.conn()?;
        insert_inventory_item(&mut conn, new_item)
    }

    fn create_review(
        &self,
        new_review: &DomainNewProductReview,
    ) -> RepositoryResult<DomainProductReview> {
        use crate::schema::product_reviews;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(product_reviews::table)
            .values(&DbNewProductReview::from(new_review))
            .get_result::<DbProductReview>(&mut conn)?;

        Ok(created.into())
    }

    fn create_wishlist_item(
        &self,
        new_item: &DomainNewWishlistItem,
    ) -> RepositoryResult<DomainWishlistItem> {
        use crate::schema::wishlist_items;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(wishlist_items::table)
            .values(&DbNewWishlistItem::from(new_item))
            .get_result::<DbWishlistItem>(&mut conn)?;

        Ok(created.into())
    }

    fn create_order_item(
        &self,
        new_item: &DomainNewOrderItem,
    ) -> RepositoryResult<DomainOrderItem> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(order_items::table)
            .values(&DbNewOrderItem::from(new_item))
            .get_result::<DbOrderItem>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(product_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

pub(crate) fn insert_product(
    conn: &mut SqliteConnection,
    new_product: &DomainNewProduct,
) -> RepositoryResult<DomainProduct> {
    use crate::schema::products;

    let created = diesel::insert_into(products::table)
        .values(&DbNewProduct::from(new_product))
        .get_result::<DbProduct>(conn)?;

    Ok(created.into())
}

pub(crate) fn insert_product_image(
    conn: &mut SqliteConnection,
    new_image: &DomainNewProductImage,
) -> RepositoryResult<DomainProductImage> {
    use crate::schema::product_images;

    let created = diesel::insert_into(product_images::table)
        .values(&DbNewProductImage::from(new_image))
        .get_result::<DbProductImage>(conn)?;

    Ok(created.into())
}

pub(crate) fn insert_product_variant(
    conn: &mut SqliteConnection,
    new_variant: &DomainNewProductVariant,
) -> RepositoryResult<DomainProductVariant> {
    use crate::schema::product_variants;

    let created = diesel::insert_into(product_variants::table)
        .values(&DbNewProductVariant::from(new_variant))
        .get_result::<DbProductVariant>(conn)?;

    Ok(created.into())
}

pub(crate) fn insert_inventory_item(
    conn: &mut SqliteConnection,
    new_item: &DomainNewInventoryItem,
) -> RepositoryResult<DomainInventoryItem> {
    use crate::schema::inventory_items;

    let created = diesel::insert_into(inventory_items::table)
        .values(&DbNewInventoryItem::from(new_item))
        .get_result::<DbInventoryItem>(conn)?;

    Ok(created.into())
}

/// Attach images to each product, preserving the order of `db_products`.
pub(crate) fn with_images(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductWithImages>> {
    let images = load_images_for_products(conn, &db_products)?;

    Ok(db_products
        .into_iter()
        .zip(images)
        .map(|(product, images)| ProductWithImages {
            product: product.into(),
            images,
        })
        .collect())
}

fn load_images_for_products(
    conn: &mut SqliteConnection,
    db_products: &[DbProduct],
) -> RepositoryResult<Vec<Vec<DomainProductImage>>> {
    use crate::schema::product_images;

    let rows = DbProductImage::belonging_to(db_products)
        .order((product_images::position.asc(), product_images::id.asc()))
        .load::<DbProductImage>(conn)?;

    Ok(rows
        .grouped_by(db_products)
        .into_iter()
        .map(|group| group.into_iter().map(Into::into).collect())
        .collect())
}
