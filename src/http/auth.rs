//! Password login and session tokens (HS256 JWT).
//!
//! Tokens carry only the username and an issue time; they never expire and
//! no route requires one yet.

use actix_web::{post, web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::db::player_repo;
use crate::http::body::Body;
use crate::http::error::ApiError;
use crate::http::response::{self, Status};

//////////////////////////////////////////////////
// Tokens
//////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iat: i64,
}

/// Signs `{username, iat}` with `secret`.
pub fn issue_token(secret: &str, username: &str) -> jsonwebtoken::errors::Result<String> {
    let claims = Claims {
        username: username.to_owned(),
        iat: Utc::now().timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies the signature and returns the claims. There is no `exp` claim
/// to check.
pub fn decode_token(secret: &str, token: &str) -> jsonwebtoken::errors::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

//////////////////////////////////////////////////
// POST /player/login
//////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: Status,
    pub token: String,
}

#[post("/player/login")]
pub async fn login(
    info: Body<LoginRequest>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let username = info.username.as_deref().filter(|s| !s.is_empty());
    let password = info.password.as_deref().filter(|s| !s.is_empty());
    let (Some(username), Some(password)) = (username, password) else {
        return Ok(response::status(Status::InvalidData));
    };

    let Some(player) = player_repo::find_by_credentials(&ctx.db, username, password).await? else {
        return Ok(response::status(Status::InvalidLogin));
    };

    let token =
        issue_token(&ctx.settings.jwt_secret, &player.username).context("signing session token")?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        status: Status::Success,
        token,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
