use crate::http;
use crate::http::error::ApiError;
use actix_cors::Cors;
use actix_web::{
    error::{JsonPayloadError, UrlencodedError},
    web, HttpRequest,
};
use serde_json::error::Category;

/// Mount every HTTP sub-module at the root.
///
/// The login route is registered ahead of `/player/{username}`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(reject_json))
        .app_data(web::FormConfig::default().error_handler(reject_form))
        .configure(http::docs::init_routes)
        .configure(http::health::init_routes)
        .configure(http::auth::init_routes)
        .configure(http::players::init_routes)
        .configure(http::events::init_routes)
        .configure(http::matches::init_routes)
        .configure(http::admin::init_routes);
}

/// Any origin, any method; responses carry `Access-Control-Allow-Origin: *`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Well-formed JSON with a value of the wrong type fails like a column
/// constraint. Anything the parser cannot read is a 500 carrying its message.
fn reject_json(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("rejecting body for {} {}: {err}", req.method(), req.path());
    match &err {
        JsonPayloadError::Deserialize(e) if e.classify() == Category::Data => {
            ApiError::InvalidData.into()
        }
        _ => ApiError::Internal(anyhow::anyhow!(err.to_string())).into(),
    }
}

fn reject_form(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("rejecting form for {} {}: {err}", req.method(), req.path());
    match err {
        UrlencodedError::Parse(_) => ApiError::InvalidData.into(),
        other => ApiError::Internal(anyhow::anyhow!(other.to_string())).into(),
    }
}
