//! Core value types: timestamps, validity windows, configuration and stats.

use crate::error::{Result, RoleError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A point in time encoded as a lexicographically sortable string.
///
/// Ordering is plain string ordering, so callers must use a format where
/// lexicographic order matches chronological order (zero-padded ISO-8601,
/// for example `2024-03-01T12:00:00Z`).
///
/// ```rust
/// use session_rbac::Timestamp;
///
/// let early = Timestamp::new("2020-01-01");
/// let late = Timestamp::new("2020-12-31");
/// assert!(early < late);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Timestamp {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed validity interval `[start, end]` of a session.
///
/// An inverted window (`start > end`) is accepted and simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    pub fn new(start: impl Into<Timestamp>, end: impl Into<Timestamp>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns true when `start <= at <= end`.
    #[inline]
    pub fn contains(&self, at: &Timestamp) -> bool {
        self.start <= *at && *at <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Manager configuration.
///
/// ```rust
/// use session_rbac::Config;
///
/// let config = Config::default().with_max_hierarchy_level(3);
/// assert_eq!(config.max_hierarchy_level, 3);
///
/// let json = r#"{ "max_hierarchy_level": 5 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.max_hierarchy_level, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of inheritance hops a containment query follows.
    /// Also the only guard against cycles in the hierarchy.
    #[serde(default = "Config::default_max_hierarchy_level")]
    pub max_hierarchy_level: usize,
}

impl Config {
    pub const DEFAULT_MAX_HIERARCHY_LEVEL: usize = 10;

    const fn default_max_hierarchy_level() -> usize {
        Self::DEFAULT_MAX_HIERARCHY_LEVEL
    }

    pub fn with_max_hierarchy_level(mut self, level: usize) -> Self {
        self.max_hierarchy_level = level;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_hierarchy_level == 0 {
            return Err(RoleError::InvalidConfig(
                "max_hierarchy_level must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| RoleError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file on disk (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RoleError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RoleError::InvalidConfig(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_hierarchy_level: Self::default_max_hierarchy_level(),
        }
    }
}

/// Structural statistics about a manager's hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerStats {
    /// Number of roles ever referenced by a mutation
    pub role_count: usize,
    /// Total sessions across all roles, duplicates included
    pub session_count: usize,
    /// Depth budget shared by every containment query
    pub max_hierarchy_level: usize,
}
