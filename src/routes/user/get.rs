use actix_web::{get, web};
use std::sync::Arc;

use crate::store::user_store::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("/{user_id}")]
pub async fn get_user(
    _req: actix_web::HttpRequest,
    store: web::Data<Arc<UserStore>>,
    path: web::Path<String>,
) -> ApiResult<User> {
    let user_id = path.into_inner();

    let user = store.get_by_id(&user_id).ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(user))
}
