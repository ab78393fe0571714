use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Map a service error onto a JSON response, logging server-side failures.
pub fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({"error": "not found"})),
        ServiceError::DatabaseUnconfigured => {
            log::warn!("Cannot {action}: {err}");
            HttpResponse::ServiceUnavailable().json(json!({"error": "catalog unavailable"}))
        }
        ServiceError::CheckoutDisabled => {
            HttpResponse::NotFound().json(json!({"error": "checkout disabled"}))
        }
        ServiceError::Form(message) => HttpResponse::BadRequest().json(json!({"error": message})),
        ServiceError::Repository(_) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
