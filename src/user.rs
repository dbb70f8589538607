//! User value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable user record.
///
/// Fields never change after construction; a "changed" user is a new value.
/// Equality is structural. Construction performs no validation; that
/// happens at the registry boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(name={}, email={})", self.name, self.email)
    }
}
