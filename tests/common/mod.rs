//! Shared setup: a fresh in-memory database per test.

#![allow(dead_code, unused_macros)]

use actix_web::web;
use matchlog_server::{config::Settings, context::AppContext};

pub const SECRET: &str = "test-secret";

pub async fn context() -> web::Data<AppContext> {
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".into()),
        "JWT_SECRET" => Some(SECRET.into()),
        _ => None,
    });
    let ctx = AppContext::init(settings)
        .await
        .expect("in-memory database");
    web::Data::new(ctx)
}

/// Initialises the full route table over `$ctx`.
macro_rules! app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($ctx.clone())
                .configure(matchlog_server::http::routes::init_routes),
        )
        .await
    };
}

/// Sends a request and decodes the JSON reply.
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let body: serde_json::Value =
            actix_web::test::call_and_read_body_json(&$app, $req.to_request()).await;
        body
    }};
}
