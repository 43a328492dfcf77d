use dashmap::DashMap;
use tracing::info;

use crate::types::user::User;

/// In-memory profile storage keyed by user id.
///
/// Backed by a sharded map: writers on different ids do not contend, writers
/// on the same id hold that shard's lock for the whole read-modify-write.
#[derive(Debug, Default)]
pub struct UserStore {
    pub(crate) users: DashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn seeded() -> Self {
        let store = Self::new();
        let seed = User::default_profile();
        info!("Seeding profile store with {}", seed.id);
        store.insert(seed);
        store
    }

    /// Places `user` under its own id, replacing any previous record.
    pub fn insert(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
