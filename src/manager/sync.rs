//! Thread-safe wrapper for concurrent hierarchy access.
//!
//! This module provides `SyncRoleManager`, a clone-able handle around
//! `Arc<RwLock<SessionRoleManager>>`. Queries share the read lock, mutations
//! take the write lock.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! session-rbac = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use session_rbac::{SyncRoleManager, TimeWindow, Timestamp};
//! use std::thread;
//!
//! let rm = SyncRoleManager::new(10);
//! let writer = rm.clone();
//!
//! thread::spawn(move || {
//!     writer.add_link("alice", "admin", TimeWindow::new("2020-01-01", "2020-12-31"));
//! })
//! .join()
//! .unwrap();
//!
//! assert!(rm.has_link("alice", "admin", &Timestamp::new("2020-06-01")));
//! ```

use super::SessionRoleManager;
use crate::{Config, ManagerStats, Result, TimeWindow, Timestamp};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe handle to a [`SessionRoleManager`].
#[derive(Debug, Clone)]
pub struct SyncRoleManager {
    inner: Arc<RwLock<SessionRoleManager>>,
}

impl SyncRoleManager {
    pub fn new(max_hierarchy_level: usize) -> Self {
        Self::from_manager(SessionRoleManager::new(max_hierarchy_level))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_manager(SessionRoleManager::with_config(config)?))
    }

    pub fn from_manager(manager: SessionRoleManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    // ===== Mutations =====

    pub fn add_link(&self, source: &str, target: &str, window: TimeWindow) {
        self.inner.write().add_link(source, target, window)
    }

    pub fn try_add_link<S: AsRef<str>>(&self, source: &str, target: &str, args: &[S]) -> Result<()> {
        self.inner.write().try_add_link(source, target, args)
    }

    pub fn delete_link(&self, source: &str, target: &str) -> usize {
        self.inner.write().delete_link(source, target)
    }

    // ===== Queries =====

    pub fn has_link(&self, source: &str, target: &str, at: &Timestamp) -> bool {
        self.inner.read().has_link(source, target, at)
    }

    pub fn try_has_link<S: AsRef<str>>(
        &self,
        source: &str,
        target: &str,
        args: &[S],
    ) -> Result<bool> {
        self.inner.read().try_has_link(source, target, args)
    }

    pub fn get_roles(&self, name: &str) -> Vec<String> {
        self.inner.read().get_roles(name)
    }

    pub fn get_users(&self, name: &str) -> Vec<String> {
        self.inner.read().get_users(name)
    }

    pub fn role_lines(&self) -> Vec<String> {
        self.inner.read().role_lines()
    }

    pub fn print_roles(&self) {
        self.inner.read().print_roles()
    }

    pub fn stats(&self) -> ManagerStats {
        self.inner.read().stats()
    }

    /// Runs `f` with shared access to the wrapped manager.
    pub fn read<R>(&self, f: impl FnOnce(&SessionRoleManager) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access, so several mutations apply as one step.
    pub fn write<R>(&self, f: impl FnOnce(&mut SessionRoleManager) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl Default for SyncRoleManager {
    fn default() -> Self {
        Self::from_manager(SessionRoleManager::default())
    }
}
