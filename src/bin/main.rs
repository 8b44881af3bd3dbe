use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use matchlog_server::{config::Settings, context::AppContext, http, metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configuration
    let settings = Settings::from_env();
    if settings.jwt_secret_is_default {
        log::warn!("JWT_SECRET is not set; session tokens are signed with the built-in default");
    }
    let bind_addr = settings.bind_addr();

    // Database pool + schema
    let ctx = web::Data::new(AppContext::init(settings).await?);
    let prometheus = metrics::build()?;

    log::info!("listening on '{bind_addr}'");
    HttpServer::new(move || {
        App::new()
            .wrap(prometheus.clone())
            .wrap(http::routes::cors())
            .wrap(Logger::default())
            .app_data(ctx.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("binding {bind_addr}"))?
    .run()
    .await
    .context("running http server")
}
