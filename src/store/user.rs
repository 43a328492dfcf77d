use tracing::debug;

use crate::store::user_store::UserStore;
use crate::types::user::User;

impl UserStore {
    /// Snapshot of every record. Order is unspecified.
    pub fn list_all(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    /// Replaces the record with `record`, except `id` and `role` which always
    /// keep their stored values.
    pub fn update(&self, id: &str, record: User) -> Option<User> {
        let mut entry = self.users.get_mut(id)?;
        let updated = User {
            id: entry.id.clone(),
            role: entry.role.clone(),
            ..record
        };
        *entry = updated.clone();
        debug!("Updated profile {}", id);
        Some(updated)
    }

    pub fn set_visibility(&self, id: &str, is_public: bool) -> Option<User> {
        let mut entry = self.users.get_mut(id)?;
        entry.is_profile_public = is_public;
        debug!("Set visibility of {} to {}", id, is_public);
        Some(entry.value().clone())
    }

    pub fn set_notifications(&self, id: &str, is_enabled: bool) -> Option<User> {
        let mut entry = self.users.get_mut(id)?;
        entry.notifications_enabled = is_enabled;
        debug!("Set notifications of {} to {}", id, is_enabled);
        Some(entry.value().clone())
    }
}
