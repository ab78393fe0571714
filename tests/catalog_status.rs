use doom_shop::domain::catalog::{CatalogStatus, CategoryCount};
use doom_shop::forms::catalog::CatalogUpload;
use doom_shop::services::catalog::{catalog_status, seed_catalog};

mod common;

const CATALOG_CSV: &[u8] = b"name,category,price,currency,images,sizes,stock
Mask Tee,apparel,35,USD,https://cdn.example.com/tee-front.png|https://cdn.example.com/tee-back.png,S|M|L,10
Madvillainy LP,music,29.99,USD,https://cdn.example.com/lp.png,,25
Villain Hoodie,apparel,70,USD,,M|XL,3
Operation Doomsday CD,music,14,USD,,,40
";

#[test]
fn empty_catalog_reports_zero_and_nothing_else() {
    let test_db = common::TestDb::new("test_empty_catalog_status.db");
    let repo = test_db.repo();

    let status = catalog_status(&repo).expect("status should load");

    assert_eq!(status, CatalogStatus::empty());
    assert_eq!(status.to_string(), "Total products: 0\n");
}

#[test]
fn status_samples_three_products_with_images() {
    let test_db = common::TestDb::new("test_status_samples_three_products.db");
    let repo = test_db.repo();
    let entries = CatalogUpload::new(CATALOG_CSV.to_vec())
        .into_seed_entries()
        .expect("catalog csv");
    seed_catalog(&repo, &entries).expect("seed");

    let status = catalog_status(&repo).expect("status should load");

    assert_eq!(status.total_products, 4);
    assert_eq!(status.samples.len(), 3);
    let names: Vec<&str> = status
        .samples
        .iter()
        .map(|sample| sample.product.name.as_str())
        .collect();
    assert_eq!(names, vec!["Mask Tee", "Madvillainy LP", "Villain Hoodie"]);
    assert_eq!(status.samples[0].images.len(), 2);
    assert_eq!(
        status.samples[0].images[0].url,
        "https://cdn.example.com/tee-front.png"
    );
    assert!(status.samples[2].images.is_empty());

    assert_eq!(
        status.categories,
        vec![
            CategoryCount {
                category: "apparel".to_string(),
                products: 2,
            },
            CategoryCount {
                category: "music".to_string(),
                products: 2,
            },
        ]
    );

    let rendered = status.to_string();
    assert!(rendered.starts_with("Total products: 4\n"));
    assert!(rendered.contains("Products by category:"));
}
