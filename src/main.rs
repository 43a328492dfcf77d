use actix_web::{middleware::Logger, web, App, HttpServer};
use profile_settings::config::EnvConfig;
use profile_settings::routes::configure_routes;
use profile_settings::store::user_store::UserStore;
use profile_settings::utils::webutils::cors;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let store = Arc::new(if config.seed_default_user {
        UserStore::seeded()
    } else {
        UserStore::new()
    });

    info!("Starting server on {} (CORS origin {})", addr, config.cors_origin);

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_origin))
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
