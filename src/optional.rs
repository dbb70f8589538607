//! Display formatting for an optional name.

/// Format an optional name as its character length, or a fixed fallback
/// when absent.
pub fn describe_length(name: Option<&str>) -> String {
    match name {
        Some(name) => name.chars().count().to_string(),
        None => "Name not provided".to_string(),
    }
}
