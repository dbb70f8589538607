//! Validation failures shared by the guarded divider and the user registry.

use thiserror::Error;

/// A precondition on input data was not met.
///
/// Every variant carries a fixed human-readable message. Callers catch and
/// print the message at the demo boundary; a validation failure never
/// terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The name cannot be empty")]
    EmptyName,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("The password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("The divisor cannot be zero")]
    ZeroDivisor,
}
