//! User data access

use std::collections::{HashMap, HashSet};

use super::model::User;
use crate::error::{ProtogenError, Result};

/// Data-access interface for users
pub trait UserStore {
    /// Insert a batch of new users
    fn create(&mut self, users: &[User]) -> Result<()>;

    /// Fetch one user by id
    fn take(&self, user_id: &str) -> Result<User>;
}

/// In-memory [`UserStore`] used by tests and local tooling
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for MemoryUserStore {
    /// All-or-nothing: an id that already exists or repeats within the batch rejects the whole batch
    fn create(&mut self, users: &[User]) -> Result<()> {
        let mut seen = HashSet::new();
        for user in users {
            if self.users.contains_key(&user.user_id) || !seen.insert(user.user_id.as_str()) {
                return Err(ProtogenError::UserAlreadyExists {
                    user_id: user.user_id.clone(),
                });
            }
        }

        for user in users {
            self.users.insert(user.user_id.clone(), user.clone());
        }
        Ok(())
    }

    fn take(&self, user_id: &str) -> Result<User> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProtogenError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }
}
