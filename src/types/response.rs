use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

/// Success side of every handler. `NoContent` is the empty-listing answer.
pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    NoContent,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
