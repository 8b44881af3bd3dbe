//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};

use crate::context::AppContext;
use crate::db;

#[get("/healthz")]
pub async fn healthz(ctx: web::Data<AppContext>) -> impl Responder {
    if let Err(e) = db::ping(&ctx.db).await {
        log::warn!("readiness check failed: {e:#}");
        return HttpResponse::ServiceUnavailable().body("db");
    }

    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
