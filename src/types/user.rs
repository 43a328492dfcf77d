use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "userId")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "emailAddress")]
    pub email: String,
    #[serde(rename = "userRole")]
    pub role: String,
    #[serde(rename = "isProfilePublic")]
    pub is_profile_public: bool,
    #[serde(rename = "isNotificationsEnabled")]
    pub notifications_enabled: bool,
}

impl User {
    /// The profile every fresh process starts with.
    pub fn default_profile() -> Self {
        User {
            id: "usr_001".to_string(),
            full_name: "Fawad Khan".to_string(),
            email: "fawad.khan@example.com".to_string(),
            role: "Researcher".to_string(),
            is_profile_public: true,
            notifications_enabled: true,
        }
    }
}

/// Body of `PUT /api/users/{id}`.
///
/// `userId` and `userRole` may be sent but the store keeps its own values.
/// Missing or null strings read as empty, missing booleans as `false`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserUpdate {
    #[serde(rename = "userId", default)]
    pub id: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email: Option<String>,
    #[serde(rename = "userRole", default)]
    pub role: Option<String>,
    #[serde(rename = "isProfilePublic", default)]
    pub is_profile_public: bool,
    #[serde(rename = "isNotificationsEnabled", default)]
    pub notifications_enabled: bool,
}

impl From<RUserUpdate> for User {
    fn from(body: RUserUpdate) -> Self {
        User {
            id: body.id.unwrap_or_default(),
            full_name: body.full_name.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
            role: body.role.unwrap_or_default(),
            is_profile_public: body.is_profile_public,
            notifications_enabled: body.notifications_enabled,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RVisibilityUpdate {
    #[serde(rename = "isPublic", default)]
    pub is_public: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RNotificationsUpdate {
    #[serde(rename = "isEnabled", default)]
    pub is_enabled: Option<bool>,
}
