//! Substitution context passed to the render tool
//!
//! Default values come from a single table of `{key, env var, default}`
//! entries so the fallback policy stays auditable in one place.

use std::fmt;

/// One context variable: rendered key, environment source, fallback value
#[derive(Debug, Clone, Copy)]
pub struct ContextVar {
    pub key: &'static str,
    pub env: &'static str,
    pub default: &'static str,
}

/// Environment-derived context variables, in the order they are passed
/// to the renderer
pub const CONTEXT_VARS: &[ContextVar] = &[
    ContextVar {
        key: "author",
        env: "USER",
        default: "your name",
    },
    ContextVar {
        key: "email",
        env: "USER_EMAIL",
        default: "your@email.com",
    },
    ContextVar {
        key: "github_username",
        env: "GITHUB_USERNAME",
        default: "your_username",
    },
];

/// Ordered substitution variables for one invocation
///
/// Immutable once built; iteration order is the order entries were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    entries: Vec<(String, String)>,
}

impl Context {
    /// Build the context from the process environment, appending
    /// `project_name` when the caller supplied one
    pub fn from_env(project_name: Option<&str>) -> Self {
        Self::from_lookup(|var| std::env::var(var).ok(), project_name)
    }

    /// Build the context from an arbitrary variable lookup
    ///
    /// Seam for tests; `from_env` is this with `std::env::var`.
    pub fn from_lookup<F>(lookup: F, project_name: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut entries: Vec<(String, String)> = CONTEXT_VARS
            .iter()
            .map(|var| {
                let value = lookup(var.env).unwrap_or_else(|| var.default.to_string());
                (var.key.to_string(), value)
            })
            .collect();

        if let Some(name) = project_name {
            entries.push(("project_name".to_string(), name.to_string()));
        }

        Self { entries }
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_when_unset() {
        let context = Context::from_lookup(|_| None, None);
        let entries: Vec<_> = context.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("author", "your name"),
                ("email", "your@email.com"),
                ("github_username", "your_username"),
            ]
        );
    }

    #[test]
    fn test_env_values_win() {
        let context = Context::from_lookup(
            |var| match var {
                "USER" => Some("alice".to_string()),
                "GITHUB_USERNAME" => Some("alice-gh".to_string()),
                _ => None,
            },
            None,
        );
        let entries: Vec<_> = context.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("author", "alice"),
                ("email", "your@email.com"),
                ("github_username", "alice-gh"),
            ]
        );
    }

    #[test]
    fn test_project_name_appended_last() {
        let context = Context::from_lookup(|_| None, Some("demo"));
        assert_eq!(context.iter().count(), 4);
        let last = context.iter().last().unwrap();
        assert_eq!(last, ("project_name", "demo"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("USER_EMAIL", "alice@example.com");
        let context = Context::from_env(None);
        std::env::remove_var("USER_EMAIL");

        let email = context
            .iter()
            .find(|(k, _)| *k == "email")
            .map(|(_, v)| v.to_string())
            .unwrap();
        assert_eq!(email, "alice@example.com");
    }
}
