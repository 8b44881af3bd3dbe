//! Maps data-layer failures onto API status strings.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

use super::response::{self, Status};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid data")]
    InvalidData,
    #[error("name already taken")]
    NameTaken,
    #[error("reference to a missing record")]
    InvalidReference,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Classifies a failed insert by the constraint it violated. Anything
    /// that is not a constraint violation stays [`ApiError::Internal`].
    pub fn from_write(err: anyhow::Error) -> Self {
        let kind = err
            .downcast_ref::<sqlx::Error>()
            .and_then(|e| e.as_database_error())
            .map(|e| e.kind());

        match kind {
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation) => Self::NameTaken,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            _ => Self::Internal(err),
        }
    }
}

// Classified failures are part of the normal contract and go out as 200.
impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::InvalidData => response::status(Status::InvalidData),
            Self::NameTaken => response::status(Status::NameTaken),
            Self::InvalidReference => response::status(Status::InvalidReference),
            Self::Internal(err) => {
                log::error!("{err:?}");
                HttpResponse::InternalServerError()
                    .json(json!({ "err": err.root_cause().to_string() }))
            }
        }
    }
}
