use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Liveness check. Always 200 with an empty body once the server is up.
#[get("")]
pub async fn health(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::EmptyOk)
}
