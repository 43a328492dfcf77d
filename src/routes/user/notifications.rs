use actix_web::{patch, web};
use std::sync::Arc;
use tracing::info;

use crate::store::user_store::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RNotificationsUpdate, User};

#[patch("/{user_id}/notifications")]
pub async fn set_notifications(
    _req: actix_web::HttpRequest,
    store: web::Data<Arc<UserStore>>,
    path: web::Path<String>,
    body: web::Json<RNotificationsUpdate>,
) -> ApiResult<User> {
    let user_id = path.into_inner();

    let is_enabled = body
        .is_enabled
        .ok_or_else(|| AppError::BadRequest("isEnabled is required".into()))?;

    let user = store
        .set_notifications(&user_id, is_enabled)
        .ok_or(AppError::NotFound)?;

    info!("Notifications for {} set to {}", user.id, is_enabled);

    Ok(ApiResponse::Ok(user))
}
