use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    // Clients only get the status; the reason stays in the log.
    fn error_response(&self) -> HttpResponse {
        debug!("{}: {}", self.kind(), self);
        HttpResponse::build(self.status_code()).finish()
    }
}
