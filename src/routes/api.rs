use actix_web::{HttpResponse, Responder, get, post, web};

use crate::db::AppContext;
use crate::domain::checkout::CheckoutEvent;
use crate::routes::service_error_response;
use crate::services::{checkout, products};

#[get("/v1/products")]
/// Return a JSON page of products with optional category, search and page filters.
///
/// Responds with `503 Service Unavailable` when the database is not configured.
pub async fn api_v1_products(
    params: web::Query<products::ProductsQuery>,
    ctx: web::Data<AppContext>,
) -> impl Responder {
    let repo = match ctx.repository() {
        Ok(repo) => repo,
        Err(err) => return service_error_response(err, "list products"),
    };

    match products::load_products_page(&repo, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "list products"),
    }
}

#[get("/v1/products/{product_id}")]
/// Return a single product with its images, variants, stock and rating summary.
pub async fn api_v1_product(
    product_id: web::Path<i32>,
    ctx: web::Data<AppContext>,
) -> impl Responder {
    let repo = match ctx.repository() {
        Ok(repo) => repo,
        Err(err) => return service_error_response(err, "load product"),
    };

    match products::load_product(&repo, product_id.into_inner()) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(err) => service_error_response(err, "load product"),
    }
}

#[get("/v1/checkout/config")]
/// Public PayPal settings for the checkout button. The client secret is never included.
pub async fn api_v1_checkout_config(ctx: web::Data<AppContext>) -> impl Responder {
    match checkout::client_config(ctx.config().checkout.as_ref()) {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(err) => service_error_response(err, "load checkout config"),
    }
}

#[post("/v1/checkout/events")]
/// Accept a callback reported by the checkout button.
pub async fn api_v1_checkout_event(event: web::Json<CheckoutEvent>) -> impl Responder {
    match checkout::record_event(&event) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, "record checkout event"),
    }
}
