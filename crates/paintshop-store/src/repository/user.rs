//! # User Repository
//!
//! Profiles keyed by the id the authentication provider hands out.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::StoreResult;
use paintshop_core::UserProfile;

/// Profile storage.
pub trait UserRepository: Send + Sync {
    fn get(&self, id: &str) -> StoreResult<Option<UserProfile>>;

    /// Inserts or replaces the profile with the same id.
    fn upsert(&self, user: UserProfile) -> StoreResult<UserProfile>;
}

#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        InMemoryUsers::default()
    }
}

impl UserRepository for InMemoryUsers {
    fn get(&self, id: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self.users.read()?.get(id).cloned())
    }

    fn upsert(&self, user: UserProfile) -> StoreResult<UserProfile> {
        debug!(user_id = %user.id, is_admin = user.is_admin, "Profile upsert");
        self.users.write()?.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces() {
        let repo = InMemoryUsers::new();
        let mut user = UserProfile {
            id: "u1".to_string(),
            email: "anna@example.com".to_string(),
            name: "Anna".to_string(),
            is_admin: false,
        };
        repo.upsert(user.clone()).unwrap();

        user.name = "Anna K.".to_string();
        repo.upsert(user).unwrap();

        assert_eq!(repo.get("u1").unwrap().unwrap().name, "Anna K.");
        assert!(repo.get("u2").unwrap().is_none());
    }
}
