use std::sync::Arc;
use profile_settings::store::user_store::UserStore;

pub mod client;

pub struct TestContext {
    pub store: Arc<UserStore>,
}

impl TestContext {
    /// Store as the server starts it by default: holding `usr_001`.
    pub fn new() -> TestContext {
        TestContext {
            store: Arc::new(UserStore::seeded()),
        }
    }

    #[allow(dead_code)]
    pub fn empty() -> TestContext {
        TestContext {
            store: Arc::new(UserStore::new()),
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use profile_settings::types::user::User;
    use serde_json::{json, Value};

    pub fn seed_user() -> User {
        User::default_profile()
    }

    pub fn hostile_update() -> Value {
        json!({
            "userId": "ignored",
            "fullName": "New Name",
            "emailAddress": "n@e.com",
            "userRole": "Hacker",
            "isProfilePublic": false,
            "isNotificationsEnabled": false
        })
    }
}
