use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use doom_shop::config::{CheckoutConfig, DatabaseConfig, PaymentEnvironment};
use doom_shop::configure_app;
use doom_shop::db::AppContext;
use doom_shop::domain::catalog::CatalogSeedEntry;
use doom_shop::domain::product::NewProduct;
use doom_shop::repository::CatalogMaintenance;

mod common;

#[actix_web::test]
async fn products_endpoint_lists_seeded_products() {
    let test_db = common::TestDb::new("test_routes_products_endpoint.db");
    test_db
        .repo()
        .seed_entry(&CatalogSeedEntry {
            product: NewProduct::new("Mask Tee", "apparel", 3500, "USD"),
            image_urls: vec!["https://cdn.example.com/tee.png".to_string()],
            sizes: vec!["M".to_string()],
            stock: 3,
        })
        .expect("seed entry");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.context()))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/products?category=apparel")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["products"]["total_items"], 1);
    assert_eq!(body["products"]["items"][0]["name"], "Mask Tee");
    assert_eq!(
        body["products"]["items"][0]["images"][0]["url"],
        "https://cdn.example.com/tee.png"
    );
    assert_eq!(body["category"], "apparel");

    let req = test::TestRequest::get().uri("/api/v1/products/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Mask Tee");
    assert_eq!(body["variants"][0]["quantity"], 3);

    let req = test::TestRequest::get().uri("/api/v1/products/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn products_endpoint_past_last_page_is_empty() {
    let test_db = common::TestDb::new("test_routes_products_huge_page.db");
    test_db
        .repo()
        .seed_entry(&CatalogSeedEntry {
            product: NewProduct::new("Mask Tee", "apparel", 3500, "USD"),
            image_urls: Vec::new(),
            sizes: Vec::new(),
            stock: 1,
        })
        .expect("seed entry");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.context()))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/products?page={}", usize::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["products"]["total_items"], 1);
    assert_eq!(body["products"]["items"], json!([]));
}

#[actix_web::test]
async fn products_endpoint_without_database_is_unavailable() {
    let context = AppContext::initialize(common::test_config(DatabaseConfig::Unconfigured))
        .expect("context");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["database"], "unconfigured");
}

#[actix_web::test]
async fn unknown_route_returns_json_not_found() {
    let context = AppContext::initialize(common::test_config(DatabaseConfig::Unconfigured))
        .expect("context");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get().uri("/no-such-page").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["path"], "/no-such-page");
}

#[actix_web::test]
async fn checkout_config_is_exposed_without_secret() {
    let mut config = common::test_config(DatabaseConfig::Unconfigured);
    config.checkout = Some(CheckoutConfig {
        client_id: "client-123".to_string(),
        client_secret: Some("top-secret".to_string()),
        environment: PaymentEnvironment::Sandbox,
        currency: "USD".to_string(),
    });
    let context = AppContext::initialize(config).expect("context");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/checkout/config")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["options"]["clientId"], "client-123");
    assert!(!body.to_string().contains("top-secret"));

    let req = test::TestRequest::post()
        .uri("/api/v1/checkout/events")
        .set_json(json!({"event": "cancel", "data": {"orderID": "8XY"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn checkout_config_is_missing_when_disabled() {
    let context = AppContext::initialize(common::test_config(DatabaseConfig::Unconfigured))
        .expect("context");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(configure_app),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/checkout/config")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
