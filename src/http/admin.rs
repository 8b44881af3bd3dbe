//! Schema maintenance endpoints.

use actix_web::{get, web, HttpResponse};

use crate::context::AppContext;
use crate::db::schema;
use crate::http::error::ApiError;
use crate::http::response::{self, Status};

/// GET /db/reset: drops every table and recreates the schema.
#[get("/db/reset")]
pub async fn reset(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    log::warn!("database reset requested; all data will be wiped");
    schema::reset(&ctx.db).await?;
    Ok(response::status(Status::DbReset))
}

/// GET /db/update: creates missing tables, keeps existing data.
#[get("/db/update")]
pub async fn update(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    schema::update(&ctx.db).await?;
    Ok(response::status(Status::DbUpdated))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reset).service(update);
}
