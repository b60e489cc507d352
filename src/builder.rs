//! Manager builder for flexible configuration
//!
//! This module provides a builder for creating role managers from a
//! configuration object, a TOML file, or individual settings.

use crate::error::Result;
use crate::manager::SessionRoleManager;
use crate::types::{Config, TimeWindow};

/// Builder for [`SessionRoleManager`] with optional pre-seeded links.
#[derive(Debug, Default)]
pub struct ManagerBuilder {
    config: Config,
    links: Vec<(String, String, TimeWindow)>,
}

impl ManagerBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set how many inheritance hops containment queries follow.
    pub fn max_hierarchy_level(mut self, level: usize) -> Self {
        self.config = self.config.with_max_hierarchy_level(level);
        self
    }

    /// Load the configuration from a TOML file.
    #[cfg(feature = "toml")]
    pub fn config_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Result<Self> {
        self.config = Config::from_toml_file(path)?;
        Ok(self)
    }

    /// Queue a link to add once the manager is built.
    pub fn link(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        window: TimeWindow,
    ) -> Self {
        self.links.push((source.into(), target.into(), window));
        self
    }

    /// Build the manager. Fails if the configuration is invalid.
    pub fn build(self) -> Result<SessionRoleManager> {
        let mut manager = SessionRoleManager::with_config(self.config)?;
        for (source, target, window) in self.links {
            manager.add_link(&source, &target, window);
        }
        Ok(manager)
    }
}
