use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::db::AppContext;

#[get("/health")]
/// Liveness probe that also reports whether the catalog database is reachable.
pub async fn health(ctx: web::Data<AppContext>) -> impl Responder {
    let database = match ctx.pool() {
        Some(pool) => match pool.get() {
            Ok(_) => "ok",
            Err(err) => {
                log::error!("Database health check failed: {err}");
                "unavailable"
            }
        },
        None => "unconfigured",
    };

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "environment": ctx.config().environment.to_string(),
        "database": database,
    }))
}

/// Fallback for every unmatched route.
pub async fn not_found(req: HttpRequest) -> impl Responder {
    log::debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(json!({
        "error": "not found",
        "path": req.path(),
    }))
}
