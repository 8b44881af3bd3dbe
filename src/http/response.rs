//! JSON envelopes shared by every endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

/// Status strings understood by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Created,
    Deleted,
    NameTaken,
    InvalidData,
    InvalidReference,
    InvalidLogin,
    DbReset,
    DbUpdated,
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// `200 {"status": ...}`
pub fn status(status: Status) -> HttpResponse {
    HttpResponse::Ok().json(StatusBody { status })
}

/// `200 {"data": ...}`
pub fn data<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(DataBody { data })
}
