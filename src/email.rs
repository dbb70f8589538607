//! Shallow email format check.

/// Check that a string looks roughly like an email address.
///
/// True iff the string contains both `@` and `.`. This is a format
/// heuristic only, not an RFC 5322 validator; it says nothing about
/// deliverability.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
