use actix_web::web;
use tracing::warn;

use crate::types::error::AppError;

pub mod health;
pub mod user;

/// Every JSON extractor failure (bad syntax, wrong content type, wrong field
/// types) becomes a bare 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("Rejected payload for {} {}: {}", req.method(), req.path(), err);
        AppError::BadRequest(err.to_string()).into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/users")
            .service(user::list::list_users)
            .service(user::get::get_user)
            .service(user::update::update_user)
            .service(user::visibility::set_visibility)
            .service(user::notifications::set_notifications)
    );
}
