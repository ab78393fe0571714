pub mod config;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

use actix_web::web;

use crate::routes::api::{
    api_v1_checkout_config, api_v1_checkout_event, api_v1_product, api_v1_products,
};
use crate::routes::main::{health, not_found};

/// Register every route of the storefront API on an actix `App`.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(
            web::scope("/api")
                .service(api_v1_products)
                .service(api_v1_product)
                .service(api_v1_checkout_config)
                .service(api_v1_checkout_event),
        )
        .default_service(web::to(not_found));
}
