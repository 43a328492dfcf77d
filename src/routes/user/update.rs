use actix_web::{put, web};
use std::sync::Arc;
use tracing::info;

use crate::store::user_store::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, User};

#[put("/{user_id}")]
pub async fn update_user(
    _req: actix_web::HttpRequest,
    store: web::Data<Arc<UserStore>>,
    path: web::Path<String>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<User> {
    let user_id = path.into_inner();

    // id and role in the body are discarded by the store.
    let user = store
        .update(&user_id, User::from(body.into_inner()))
        .ok_or(AppError::NotFound)?;

    info!("Profile {} updated", user.id);

    Ok(ApiResponse::Ok(user))
}
