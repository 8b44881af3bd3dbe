//! Match logging and per-match event lists.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::Serialize;

use crate::context::AppContext;
use crate::db::{match_repo, models::NewMatch};
use crate::http::error::ApiError;
use crate::http::response::{self, Status};

/// Body of `DELETE /match/{id}`. Deployed clients read the misspelled key.
#[derive(Debug, Serialize)]
pub struct MatchDeleted {
    pub staus: Status,
}

/// GET /match
#[get("/match")]
pub async fn list(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let rows = match_repo::list(&ctx.db).await?;
    Ok(response::data(rows))
}

/// GET /match/{id}
///
/// A non-numeric id cannot name a match and is reported as NOT_FOUND.
#[get("/match/{id}")]
pub async fn show(
    path: web::Path<String>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let Ok(id) = path.parse::<i64>() else {
        return Ok(response::status(Status::NotFound));
    };

    match match_repo::find_with_events(&ctx.db, id).await? {
        Some(found) => Ok(response::data(found)),
        None => Ok(response::status(Status::NotFound)),
    }
}

/// POST /match
#[post("/match")]
pub async fn create(
    info: web::Json<NewMatch>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let id = match_repo::insert_with_events(&ctx.db, &info)
        .await
        .map_err(ApiError::from_write)?;
    log::debug!("match {id} recorded with {} event(s)", info.events.len());
    Ok(response::status(Status::Created))
}

/// DELETE /match/{id}
#[delete("/match/{id}")]
pub async fn remove(
    path: web::Path<String>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    if let Ok(id) = path.parse::<i64>() {
        match_repo::delete(&ctx.db, id).await?;
    }
    Ok(HttpResponse::Ok().json(MatchDeleted {
        staus: Status::Deleted,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(show)
        .service(create)
        .service(remove);
}
