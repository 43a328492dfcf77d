use actix_web::{get, web};
use std::sync::Arc;

use crate::store::user_store::UserStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("")]
pub async fn list_users(
    _req: actix_web::HttpRequest,
    store: web::Data<Arc<UserStore>>,
) -> ApiResult<Vec<User>> {
    let users = store.list_all();

    if users.is_empty() {
        return Ok(ApiResponse::NoContent);
    }

    Ok(ApiResponse::Ok(users))
}
