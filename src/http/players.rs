//! Player registration, lookup and removal.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::context::AppContext;
use crate::db::{models::NewPlayer, player_repo};
use crate::http::body::Body;
use crate::http::error::ApiError;
use crate::http::response::{self, Status};

/// GET /player
#[get("/player")]
pub async fn list(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let rows = player_repo::list_usernames(&ctx.db).await?;
    Ok(response::data(rows))
}

/// GET /player/{username}
#[get("/player/{username}")]
pub async fn show(
    path: web::Path<String>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    match player_repo::find_with_timeline(&ctx.db, &path).await? {
        Some(timeline) => Ok(response::data(timeline)),
        None => Ok(response::status(Status::NotFound)),
    }
}

/// POST /player
#[post("/player")]
pub async fn create(
    info: Body<NewPlayer>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    player_repo::insert(&ctx.db, &info)
        .await
        .map_err(ApiError::from_write)?;
    Ok(response::status(Status::Created))
}

/// DELETE /player/{username}
#[delete("/player/{username}")]
pub async fn remove(
    path: web::Path<String>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let rows = player_repo::delete(&ctx.db, &path).await?;
    log::debug!("deleted {rows} player row(s) for {}", path.as_str());
    Ok(response::status(Status::Deleted))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(show)
        .service(create)
        .service(remove);
}
