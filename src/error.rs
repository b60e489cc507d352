//! Error types for the role hierarchy.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RoleError>;

/// Errors surfaced by the typed and `try_*` parts of the API.
///
/// The variadic [`RoleManager`](crate::RoleManager) contract never returns
/// these; it degrades to a no-op or `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// A variadic call carried the wrong number of temporal arguments.
    #[error("{operation} expects {expected} temporal argument(s), got {actual}")]
    InvalidArguments {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No constructor is registered under the requested name.
    #[error("no role manager registered under '{0}'")]
    UnknownManager(String),
}

impl RoleError {
    pub(crate) fn invalid_arguments(
        operation: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::InvalidArguments {
            operation,
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for RoleError {
    fn from(err: serde_json::Error) -> Self {
        RoleError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_message() {
        let err = RoleError::invalid_arguments("add_link", 2, 1);
        assert_eq!(
            err.to_string(),
            "add_link expects 2 temporal argument(s), got 1"
        );
    }

    #[test]
    fn test_unknown_manager_message() {
        let err = RoleError::UnknownManager("domain".into());
        assert_eq!(err.to_string(), "no role manager registered under 'domain'");
    }
}
