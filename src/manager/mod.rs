//! Session role manager: the temporal role hierarchy and its operations.
//!
//! This module defines [`SessionRoleManager`], which owns a [`RoleStore`] and
//! a depth bound fixed at construction.

use crate::compute::has_valid_session;
use crate::compute::validation::{parse_request_time, parse_time_window};
use crate::error::Result;
use crate::store::{RoleStore, Session};
use crate::types::{Config, TimeWindow, Timestamp};

mod introspection;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "sync")]
pub use sync::SyncRoleManager;

/// Role hierarchy whose inheritance edges are valid only inside a time window.
///
/// A role `a` contains role `b` at time `t` when a chain of sessions leads
/// from `a` to `b`, every session in the chain is active at `t`, and the chain
/// is no longer than the configured hierarchy level.
///
/// # Thread Safety
///
/// The manager holds no locks. Mutations take `&mut self` and queries take
/// `&self`, so sharing it across threads requires the caller to wrap it,
/// e.g. in `parking_lot::RwLock`, or to enable the `sync` feature and use
/// `SyncRoleManager`.
///
/// # Examples
///
/// ```rust
/// use session_rbac::{SessionRoleManager, TimeWindow, Timestamp};
///
/// let mut rm = SessionRoleManager::new(10);
/// rm.add_link("alice", "admin", TimeWindow::new("2020-01-01", "2020-12-31"));
///
/// assert!(rm.has_link("alice", "admin", &Timestamp::new("2020-06-01")));
/// assert!(!rm.has_link("alice", "admin", &Timestamp::new("2021-01-01")));
/// ```
#[derive(Debug, Clone)]
pub struct SessionRoleManager {
    store: RoleStore,
    config: Config,
}

impl SessionRoleManager {
    /// Creates an empty manager that follows at most `max_hierarchy_level` hops.
    pub fn new(max_hierarchy_level: usize) -> Self {
        Self {
            store: RoleStore::new(),
            config: Config::default().with_max_hierarchy_level(max_hierarchy_level),
        }
    }

    /// Creates an empty manager from a validated configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: RoleStore::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn max_hierarchy_level(&self) -> usize {
        self.config.max_hierarchy_level
    }

    /// Read access to the underlying role store.
    pub fn store(&self) -> &RoleStore {
        &self.store
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.store.exists(name)
    }

    /// Adds a session making `source` inherit `target` during `window`.
    ///
    /// Both roles are created if needed. Sessions are never deduplicated.
    pub fn add_link(&mut self, source: &str, target: &str, window: TimeWindow) {
        let source_id = self.store.get_or_create(source);
        let target_id = self.store.get_or_create(target);
        log::debug!("add_link {} -> {} {}", source, target, window);
        self.store
            .role_mut(source_id)
            .add_session(Session::new(target_id, window));
    }

    /// Variadic form of [`add_link`](Self::add_link): `args` must be `[start, end]`.
    pub fn try_add_link<S: AsRef<str>>(
        &mut self,
        source: &str,
        target: &str,
        args: &[S],
    ) -> Result<()> {
        let window = parse_time_window("add_link", args)?;
        self.add_link(source, target, window);
        Ok(())
    }

    /// Removes every session from `source` to `target`, whatever its window.
    ///
    /// Does nothing unless both roles already exist. Returns the number of
    /// sessions removed.
    pub fn delete_link(&mut self, source: &str, target: &str) -> usize {
        let (Some(source_id), Some(target_id)) = (self.store.id(source), self.store.id(target))
        else {
            log::debug!("delete_link {} -> {}: unknown role, ignored", source, target);
            return 0;
        };
        let removed = self.store.role_mut(source_id).delete_sessions(target_id);
        log::debug!("delete_link {} -> {}: removed {} session(s)", source, target, removed);
        removed
    }

    /// Returns true if `source` contains `target` at time `at`.
    ///
    /// A role always contains itself, even when it was never referenced.
    /// Unknown roles contain nothing else and are contained by nothing.
    pub fn has_link(&self, source: &str, target: &str, at: &Timestamp) -> bool {
        if source == target {
            return true;
        }
        let (Some(source_id), Some(target_id)) = (self.store.id(source), self.store.id(target))
        else {
            return false;
        };
        has_valid_session(
            &self.store,
            source_id,
            target_id,
            self.config.max_hierarchy_level,
            at,
        )
    }

    /// Variadic form of [`has_link`](Self::has_link): `args` must be `[at]`.
    ///
    /// Arity is checked before the reflexive shortcut, so a malformed call
    /// fails even when `source == target`.
    pub fn try_has_link<S: AsRef<str>>(
        &self,
        source: &str,
        target: &str,
        args: &[S],
    ) -> Result<bool> {
        let at = parse_request_time("has_link", args)?;
        Ok(self.has_link(source, target, &at))
    }
}

impl Default for SessionRoleManager {
    fn default() -> Self {
        Self::new(Config::DEFAULT_MAX_HIERARCHY_LEVEL)
    }
}
