use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};

const API_REFERENCE: &str = include_str!("../../static/api-reference.html");

/// GET /: static API reference.
#[get("/")]
pub async fn reference() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(API_REFERENCE)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(reference);
}
