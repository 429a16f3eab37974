//! In-memory user directory.
//!
//! Emails are unique, compared exactly (case-sensitive). The directory starts
//! with one demo account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

pub const DEMO_USER_ID: &str = "1";
pub const DEMO_USER_EMAIL: &str = "demo@example.com";
pub const DEMO_USER_NAME: &str = "Demo User";
const DEMO_AVATAR: &str = "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400";
pub const DEFAULT_AVATAR: &str = "https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg?auto=compress&cs=tinysrgb&w=400";

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Registered users in insertion order.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding only the demo account.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: vec![User {
                id: DEMO_USER_ID.to_owned(),
                email: DEMO_USER_EMAIL.to_owned(),
                name: DEMO_USER_NAME.to_owned(),
                avatar: Some(DEMO_AVATAR.to_owned()),
            }],
        }
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Create an account with a fresh id and the default avatar.
    pub fn register(&mut self, name: &str, email: &str) -> Result<User, AuthError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_owned(),
            name: name.to_owned(),
            avatar: Some(DEFAULT_AVATAR.to_owned()),
        };
        self.insert(user.clone())?;
        Ok(user)
    }

    /// Add a prepared record, rejecting a duplicate email or id.
    pub fn insert(&mut self, user: User) -> Result<(), AuthError> {
        if self.find_by_email(&user.email).is_some() || self.find_by_id(&user.id).is_some() {
            return Err(AuthError::DuplicateAccount { email: user.email });
        }
        self.users.push(user);
        Ok(())
    }

    /// Remove by id, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Option<User> {
        let idx = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
