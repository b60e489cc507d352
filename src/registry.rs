//! Named constructors for role managers.
//!
//! Enforcement engines pick their role manager by name at runtime. The
//! session manager is pre-registered as [`SESSION_ROLE_MANAGER`]; embedders
//! may add their own constructors.
//!
//! ```rust
//! use session_rbac::registry;
//!
//! let mut rm = registry::create("session").unwrap();
//! rm.add_link("alice", "admin", &["2020-01-01", "2020-12-31"]);
//! assert!(rm.has_link("alice", "admin", &["2020-06-01"]));
//! ```

use crate::error::{Result, RoleError};
use crate::manager::SessionRoleManager;
use crate::role_manager::RoleManager;
use crate::types::Config;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Zero-argument factory producing a fresh role manager.
pub type RoleManagerConstructor = fn() -> Box<dyn RoleManager>;

/// Registry name of the time-windowed session manager.
pub const SESSION_ROLE_MANAGER: &str = "session";

static REGISTRY: Lazy<RwLock<FxHashMap<String, RoleManagerConstructor>>> = Lazy::new(|| {
    let mut constructors: FxHashMap<String, RoleManagerConstructor> = FxHashMap::default();
    constructors.insert(SESSION_ROLE_MANAGER.to_string(), new_session_role_manager);
    RwLock::new(constructors)
});

/// Builds a session manager with the conventional hierarchy level.
pub fn new_session_role_manager() -> Box<dyn RoleManager> {
    Box::new(SessionRoleManager::new(Config::DEFAULT_MAX_HIERARCHY_LEVEL))
}

/// Registers `constructor` under `name`, returning any constructor it replaces.
pub fn register(
    name: impl Into<String>,
    constructor: RoleManagerConstructor,
) -> Option<RoleManagerConstructor> {
    let name = name.into();
    log::debug!("registering role manager '{}'", name);
    REGISTRY.write().insert(name, constructor)
}

pub fn constructor(name: &str) -> Option<RoleManagerConstructor> {
    REGISTRY.read().get(name).copied()
}

/// Instantiates the role manager registered under `name`.
pub fn create(name: &str) -> Result<Box<dyn RoleManager>> {
    let constructor =
        constructor(name).ok_or_else(|| RoleError::UnknownManager(name.to_string()))?;
    Ok(constructor())
}

/// Registered names, sorted.
pub fn registered_names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.read().keys().cloned().collect();
    names.sort();
    names
}
