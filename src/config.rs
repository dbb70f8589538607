//! Sample-data configuration for the demo runner.
//!
//! Config only varies demo *inputs*; the demo semantics and every printed
//! message stay fixed. Without a config file the built-in defaults
//! reproduce the canonical sample run.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::user::User;

/// A validation error in the sample-data configuration
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Inputs for the guarded-division demo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DivideSample {
    pub dividend: i64,
    pub divisor: i64,
}

/// One registration attempt for the registry demo
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationSample {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sample inputs for all five demos
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Input to the optional-value demo; absent by default
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_sample_email")]
    pub sample_email: String,
    #[serde(default = "default_sample_user")]
    pub sample_user: User,
    #[serde(default = "default_divide")]
    pub divide: DivideSample,
    /// Registration batch, attempted in order
    #[serde(default = "default_users")]
    pub users: Vec<RegistrationSample>,
    #[serde(default = "default_lookup_email")]
    pub lookup_email: String,
}

fn default_sample_email() -> String {
    "juan.perez@example.com".to_string()
}

fn default_sample_user() -> User {
    User::new("Juan Pérez", "juan.perez@example.com")
}

fn default_divide() -> DivideSample {
    DivideSample {
        dividend: 10,
        divisor: 0,
    }
}

fn default_users() -> Vec<RegistrationSample> {
    vec![
        RegistrationSample {
            name: "Juan Pérez".to_string(),
            email: "juan.perez@example.com".to_string(),
            password: "password123".to_string(),
        },
        RegistrationSample {
            name: "Ana Gómez".to_string(),
            email: "ana.gomez@example.com".to_string(),
            password: "password456".to_string(),
        },
        // Aborts the batch: the registry demo shows fail-fast registration
        RegistrationSample {
            name: "Invalid".to_string(),
            email: "invalid_email".to_string(),
            password: "pass".to_string(),
        },
    ]
}

fn default_lookup_email() -> String {
    "juan.perez@example.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            sample_email: default_sample_email(),
            sample_user: default_sample_user(),
            divide: default_divide(),
            users: default_users(),
            lookup_email: default_lookup_email(),
        }
    }
}

impl Config {
    /// Load sample data from a specific TOML path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the sample data and return any issues found
    pub fn validate(&self) -> Result<(), Vec<ConfigIssue>> {
        let mut issues = Vec::new();

        if self.users.is_empty() {
            issues.push(ConfigIssue {
                field: "users".to_string(),
                message: "At least one registration sample is required".to_string(),
            });
        }

        if self.lookup_email.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "lookup_email".to_string(),
                message: "Must not be blank".to_string(),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
