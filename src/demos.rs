//! The demo runner: five self-contained demonstrations, run in a fixed
//! order, each producing human-readable lines. No data flows between them.

use anyhow::{anyhow, Result};

use crate::config::{Config, RegistrationSample};
use crate::divide::divide;
use crate::email::is_valid_email;
use crate::error::ValidationError;
use crate::optional::describe_length;
use crate::registry::UserRegistry;

/// A named demonstration
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    run: fn(&Config) -> Vec<String>,
}

/// All demos, in canonical run order
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "optional",
        description: "format an optional name, with a fallback when absent",
        run: run_optional,
    },
    Demo {
        name: "email",
        description: "shallow email format check (@ and . present)",
        run: run_email,
    },
    Demo {
        name: "user",
        description: "immutable user value with structural equality",
        run: run_user,
    },
    Demo {
        name: "divide",
        description: "integer division guarded against a zero divisor",
        run: run_divide,
    },
    Demo {
        name: "registry",
        description: "validated registration and lookup in a user registry",
        run: run_registry,
    },
];

/// Look up a demo by name
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

/// Run the named demos in the given order, or every demo when the list is
/// empty, printing each output line. Unknown names fail before any demo
/// runs.
pub fn run(names: &[String], config: &Config) -> Result<()> {
    for line in render(names, config)? {
        println!("{}", line);
    }
    Ok(())
}

/// Build the output lines of the named demos without printing them.
fn render(names: &[String], config: &Config) -> Result<Vec<String>> {
    let selected: Vec<&Demo> = if names.is_empty() {
        DEMOS.iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                find(name)
                    .ok_or_else(|| anyhow!("Unknown demo: {}. Use --list-demos to see all.", name))
            })
            .collect::<Result<_>>()?
    };

    Ok(selected
        .iter()
        .flat_map(|demo| (demo.run)(config))
        .collect())
}

fn run_optional(config: &Config) -> Vec<String> {
    vec![format!(
        "The length of the name is: {}",
        describe_length(config.name.as_deref())
    )]
}

fn run_email(config: &Config) -> Vec<String> {
    let line = if is_valid_email(&config.sample_email) {
        "The email is valid"
    } else {
        "The email is invalid"
    };
    vec![line.to_string()]
}

fn run_user(config: &Config) -> Vec<String> {
    vec![format!("User: {}", config.sample_user)]
}

fn run_divide(config: &Config) -> Vec<String> {
    let line = match divide(config.divide.dividend, config.divide.divisor) {
        Ok(quotient) => format!("Result: {}", quotient),
        Err(err) => format!("Error: {}", err),
    };
    vec![line]
}

fn run_registry(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();
    let mut registry = UserRegistry::new();

    // Fail-fast batch: the first rejected sample aborts the rest, but
    // earlier registrations stay in the registry
    if let Err(err) = register_batch(&mut registry, &config.users) {
        lines.push(format!("Error registering user: {}", err));
    }

    lines.push(match registry.user_by_email(&config.lookup_email) {
        Some(user) => format!("User found: Name: {}, Email: {}", user.name(), user.email()),
        None => "User not found".to_string(),
    });
    lines
}

fn register_batch(
    registry: &mut UserRegistry,
    batch: &[RegistrationSample],
) -> Result<(), ValidationError> {
    for sample in batch {
        registry.register_user(&sample.name, &sample.email, &sample.password)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = DEMOS.iter().map(|demo| demo.name).collect();
        assert_eq!(names, ["optional", "email", "user", "divide", "registry"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("registry").unwrap().name, "registry");
        assert!(find("bogus").is_none());
    }

    #[test]
    fn test_unknown_demo_name_is_an_error() {
        let config = Config::default();
        let err = render(&["optional".to_string(), "bogus".to_string()], &config).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_default_config_renders_canonical_lines() {
        let config = Config::default();
        let lines = render(&[], &config).unwrap();
        assert_eq!(
            lines,
            [
                "The length of the name is: Name not provided",
                "The email is valid",
                "User: User(name=Juan Pérez, email=juan.perez@example.com)",
                "Error: The divisor cannot be zero",
                "Error registering user: Invalid email",
                "User found: Name: Juan Pérez, Email: juan.perez@example.com",
            ]
        );
    }

    #[test]
    fn test_subset_renders_in_requested_order() {
        let config = Config::default();
        let lines = render(
            &["divide".to_string(), "optional".to_string()],
            &config,
        )
        .unwrap();
        assert_eq!(
            lines,
            [
                "Error: The divisor cannot be zero",
                "The length of the name is: Name not provided",
            ]
        );
    }

    #[test]
    fn test_fixture_config_renders_success_lines() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/fixtures/sample_config.toml"
        ));
        let config = Config::load_from(path).unwrap();
        let lines = render(&[], &config).unwrap();
        assert_eq!(
            lines,
            [
                "The length of the name is: 3",
                "The email is valid",
                "User: User(name=Ada Lovelace, email=ada@lovelace.org)",
                "Result: 3",
                "User found: Name: Ada Lovelace, Email: ada@lovelace.org",
            ]
        );
    }

    #[test]
    fn test_registry_demo_miss_renders_not_found() {
        let mut config = Config::default();
        config.lookup_email = "missing@example.com".to_string();
        let lines = run_registry(&config);
        assert_eq!(
            lines,
            [
                "Error registering user: Invalid email",
                "User not found",
            ]
        );
    }

    #[test]
    fn test_register_batch_short_circuits() {
        let mut registry = UserRegistry::new();
        let err = register_batch(&mut registry, &Config::default().users).unwrap_err();

        // The third sample fails the email check; the first two are kept
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.users()[0].name(), "Juan Pérez");
        assert_eq!(registry.users()[1].name(), "Ana Gómez");
        assert!(registry
            .user_by_email("juan.perez@example.com")
            .is_some());
    }

    #[test]
    fn test_register_batch_all_valid() {
        let mut registry = UserRegistry::new();
        let batch = vec![
            RegistrationSample {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
            },
            RegistrationSample {
                name: "B".to_string(),
                email: "b@x.com".to_string(),
                password: "secret2".to_string(),
            },
        ];
        register_batch(&mut registry, &batch).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
