//! In-memory user registry with validated insertion.

use crate::email::is_valid_email;
use crate::error::ValidationError;
use crate::user::User;

/// Minimum accepted password length, in characters.
const PASSWORD_MIN: usize = 6;

/// An ordered, growable collection of users.
///
/// Insertion order is preserved and duplicate emails are accepted as
/// written; lookups return the first match.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate inputs and append a new user.
    ///
    /// Preconditions are checked in order and the first failure wins:
    /// non-blank name, then email shape, then password length. The password
    /// is checked for strength but never stored. On failure the registry is
    /// left unchanged.
    pub fn register_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if password.chars().count() < PASSWORD_MIN {
            return Err(ValidationError::PasswordTooShort);
        }

        self.users.push(User::new(name, email));
        Ok(())
    }

    /// Find the first user whose email matches exactly.
    ///
    /// Linear scan in insertion order, case-sensitive, no normalization.
    /// Absence is a normal outcome, not an error.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email() == email)
    }

    /// Registered users in insertion order.
    #[allow(dead_code)] // Exercised by tests
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[allow(dead_code)] // Exercised by tests
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[allow(dead_code)] // Exercised by tests
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
