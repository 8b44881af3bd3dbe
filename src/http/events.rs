//! Event-type definitions.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::context::AppContext;
use crate::db::{event_repo, models::NewEvent};
use crate::http::body::Body;
use crate::http::error::ApiError;
use crate::http::response::{self, Status};

/// GET /event
#[get("/event")]
pub async fn list(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let rows = event_repo::list(&ctx.db).await?;
    Ok(response::data(rows))
}

/// POST /event
#[post("/event")]
pub async fn create(
    info: Body<NewEvent>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    event_repo::insert(&ctx.db, &info)
        .await
        .map_err(ApiError::from_write)?;
    Ok(response::status(Status::Created))
}

/// DELETE /event/{name}
#[delete("/event/{name}")]
pub async fn remove(
    path: web::Path<String>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    event_repo::delete(&ctx.db, &path).await?;
    Ok(response::status(Status::Deleted))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create).service(remove);
}
