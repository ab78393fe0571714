use doom_shop::domain::catalog::{CatalogSeedEntry, CatalogTable};
use doom_shop::domain::product::{NewProduct, ProductListQuery};
use doom_shop::domain::review::NewProductReview;
use doom_shop::repository::{CatalogMaintenance, ProductReader, ProductWriter, RepositoryError};

mod common;

fn entry(name: &str, category: &str, sizes: &[&str], stock: i32) -> CatalogSeedEntry {
    CatalogSeedEntry {
        product: NewProduct::new(name, category, 3000, "USD")
            .with_description(format!("{name} from the villain's vault")),
        image_urls: vec![format!(
            "https://cdn.example.com/{}.png",
            name.to_lowercase().replace(' ', "-")
        )],
        sizes: sizes.iter().map(|size| size.to_string()).collect(),
        stock,
    }
}

#[test]
fn seed_entry_creates_variants_with_stock() {
    let test_db = common::TestDb::new("test_seed_entry_creates_variants_with_stock.db");
    let repo = test_db.repo();

    let seeded = repo
        .seed_entry(&entry("Mask Tee", "apparel", &["S", "M"], 7))
        .expect("seed entry");

    assert_eq!(seeded.variant_ids.len(), 2);
    assert_eq!(repo.count_rows(CatalogTable::InventoryItems).unwrap(), 2);

    let detail = repo
        .get_product_detail(seeded.product_id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(detail.images.len(), 1);
    assert_eq!(detail.variants.len(), 2);
    assert_eq!(detail.variants[0].variant.size.as_deref(), Some("S"));
    assert_eq!(detail.variants[0].variant.name, "Mask Tee / S");
    assert!(detail.variants.iter().all(|variant| variant.quantity == 7));
    assert_eq!(detail.unassigned_stock, 0);
    assert_eq!(detail.review_count, 0);
    assert!(detail.average_rating.is_none());
}

#[test]
fn seed_entry_without_sizes_tracks_product_stock() {
    let test_db = common::TestDb::new("test_seed_entry_without_sizes.db");
    let repo = test_db.repo();

    let seeded = repo
        .seed_entry(&entry("Madvillainy LP", "music", &[], 25))
        .expect("seed entry");

    let detail = repo.get_product_detail(seeded.product_id).unwrap().unwrap();
    assert!(detail.variants.is_empty());
    assert_eq!(detail.unassigned_stock, 25);
}

#[test]
fn product_detail_summarizes_reviews() {
    let test_db = common::TestDb::new("test_product_detail_summarizes_reviews.db");
    let repo = test_db.repo();
    let seeded = repo
        .seed_entry(&entry("Villain Hoodie", "apparel", &[], 1))
        .expect("seed entry");

    repo.create_review(&NewProductReview::new(seeded.product_id, "Zev", 5))
        .unwrap();
    repo.create_review(&NewProductReview::new(seeded.product_id, "Daniel", 4).with_body("Heavy."))
        .unwrap();

    let detail = repo.get_product_detail(seeded.product_id).unwrap().unwrap();
    assert_eq!(detail.review_count, 2);
    assert_eq!(detail.average_rating, Some(4.5));
}

#[test]
fn review_rating_out_of_range_is_rejected() {
    let test_db = common::TestDb::new("test_review_rating_out_of_range.db");
    let repo = test_db.repo();
    let seeded = repo
        .seed_entry(&entry("Villain Hoodie", "apparel", &[], 1))
        .expect("seed entry");

    let result = repo.create_review(&NewProductReview::new(seeded.product_id, "Zev", 6));

    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[test]
fn list_products_filters_and_paginates() {
    let test_db = common::TestDb::new("test_list_products_filters_and_paginates.db");
    let repo = test_db.repo();
    for name in ["Mask Tee", "Villain Hoodie", "Metal Face Cap"] {
        repo.seed_entry(&entry(name, "apparel", &[], 1)).unwrap();
    }
    repo.seed_entry(&entry("Madvillainy LP", "music", &[], 1))
        .unwrap();

    let (total, items) = repo
        .list_products(ProductListQuery::new().category("apparel"))
        .unwrap();
    assert_eq!(total, 3);
    assert!(items.iter().all(|item| item.product.category == "apparel"));
    assert!(items.iter().all(|item| item.images.len() == 1));

    let (total, items) = repo
        .list_products(ProductListQuery::new().search("hoodie"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].product.name, "Villain Hoodie");

    let (total, items) = repo
        .list_products(ProductListQuery::new().paginate(2, 3))
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(items.len(), 1);
    // Newest first, so the last page holds the first product inserted.
    assert_eq!(items[0].product.name, "Mask Tee");
}

#[test]
fn list_products_search_matches_wildcards_literally() {
    let test_db = common::TestDb::new("test_list_products_search_wildcards.db");
    let repo = test_db.repo();
    for name in ["100% Cotton Tee", "Mask_Pin", "Villain Hoodie", "Back\\slash Cap"] {
        repo.seed_entry(&entry(name, "apparel", &[], 1)).unwrap();
    }

    let search = |term: &str| {
        repo.list_products(ProductListQuery::new().search(term))
            .unwrap()
            .1
            .into_iter()
            .map(|item| item.product.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(search("%"), vec!["100% Cotton Tee"]);
    assert_eq!(search("_"), vec!["Mask_Pin"]);
    assert_eq!(search("\\"), vec!["Back\\slash Cap"]);
    assert!(search("%%%").is_empty());
}

#[test]
fn missing_product_is_none() {
    let test_db = common::TestDb::new("test_missing_product_is_none.db");
    let repo = test_db.repo();

    assert!(repo.get_product_by_id(99).unwrap().is_none());
    assert!(repo.get_product_detail(99).unwrap().is_none());
    assert!(matches!(
        repo.delete_product(99),
        Err(RepositoryError::NotFound)
    ));
}
