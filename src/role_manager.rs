//! Capability contract consumed by a generic policy-enforcement engine.
//!
//! Engines address role managers through variadic "domain" arguments. For the
//! session manager that slot carries time instead: `[start, end]` when adding
//! a link and `[request_time]` when querying one. Calls with any other arity
//! are dropped silently (logged at debug level), so callers cannot tell a
//! malformed call from a negative answer. Use the typed or `try_*` methods on
//! [`SessionRoleManager`] to get an explicit error.

use crate::manager::SessionRoleManager;

/// Role manager interface as seen by an enforcement engine.
pub trait RoleManager: Send + Sync {
    /// Links `name1` to `name2`. The session manager expects `[start, end]`.
    fn add_link(&mut self, name1: &str, name2: &str, domain: &[&str]);

    /// Unlinks `name1` from `name2`.
    fn delete_link(&mut self, name1: &str, name2: &str, domain: &[&str]);

    /// Whether `name1` inherits `name2`. The session manager expects `[request_time]`.
    fn has_link(&self, name1: &str, name2: &str, request: &[&str]) -> bool;

    /// Direct roles held by `name`.
    fn get_roles(&self, name: &str, domain: &[&str]) -> Vec<String>;

    /// Roles directly holding `name`.
    fn get_users(&self, name: &str) -> Vec<String>;

    fn print_roles(&self);
}

impl RoleManager for SessionRoleManager {
    fn add_link(&mut self, name1: &str, name2: &str, domain: &[&str]) {
        if let Err(e) = SessionRoleManager::try_add_link(self, name1, name2, domain) {
            log::debug!("add_link {} -> {} ignored: {}", name1, name2, e);
        }
    }

    // The window is accepted for symmetry; every session to `name2` goes.
    fn delete_link(&mut self, name1: &str, name2: &str, _domain: &[&str]) {
        SessionRoleManager::delete_link(self, name1, name2);
    }

    fn has_link(&self, name1: &str, name2: &str, request: &[&str]) -> bool {
        SessionRoleManager::try_has_link(self, name1, name2, request).unwrap_or_else(|e| {
            log::debug!("has_link {} -> {} answered false: {}", name1, name2, e);
            false
        })
    }

    fn get_roles(&self, name: &str, _domain: &[&str]) -> Vec<String> {
        SessionRoleManager::get_roles(self, name)
    }

    fn get_users(&self, name: &str) -> Vec<String> {
        SessionRoleManager::get_users(self, name)
    }

    fn print_roles(&self) {
        SessionRoleManager::print_roles(self)
    }
}
