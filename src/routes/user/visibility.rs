use actix_web::{patch, web};
use std::sync::Arc;
use tracing::info;

use crate::store::user_store::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RVisibilityUpdate, User};

#[patch("/{user_id}/visibility")]
pub async fn set_visibility(
    _req: actix_web::HttpRequest,
    store: web::Data<Arc<UserStore>>,
    path: web::Path<String>,
    body: web::Json<RVisibilityUpdate>,
) -> ApiResult<User> {
    let user_id = path.into_inner();

    let is_public = body
        .is_public
        .ok_or_else(|| AppError::BadRequest("isPublic is required".into()))?;

    let user = store
        .set_visibility(&user_id, is_public)
        .ok_or(AppError::NotFound)?;

    info!("Profile {} is now {}", user.id, if is_public { "public" } else { "private" });

    Ok(ApiResponse::Ok(user))
}
