use actix_web::{web, App};
use std::sync::Arc;
use profile_settings::store::user_store::UserStore;

pub struct TestClient {
    pub store: Arc<UserStore>,
}

impl TestClient {
    pub fn new(store: Arc<UserStore>) -> Self {
        TestClient { store }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.store)))
            .configure(profile_settings::routes::configure_routes)
    }
}
