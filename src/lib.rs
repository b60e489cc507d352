//! Time-windowed role hierarchy for role-based access control.
//!
//! A role inherits another through *sessions*: edges that are valid only
//! between a start and an end timestamp. Containment queries ask whether one
//! role reaches another at a given time, following at most a configured
//! number of hops.
//!
//! ```rust
//! use session_rbac::{SessionRoleManager, TimeWindow, Timestamp};
//!
//! let mut rm = SessionRoleManager::new(10);
//! rm.add_link("alice", "editor", TimeWindow::new("2024-01-01", "2024-06-30"));
//! rm.add_link("editor", "viewer", TimeWindow::new("2024-01-01", "2024-12-31"));
//!
//! assert!(rm.has_link("alice", "viewer", &Timestamp::new("2024-03-15")));
//! assert!(!rm.has_link("alice", "viewer", &Timestamp::new("2024-09-01")));
//! ```

pub mod builder;
pub mod compute;
pub mod error;
pub mod manager;
pub mod registry;
pub mod role_manager;
pub mod store;
pub mod types;

pub use builder::ManagerBuilder;
pub use error::{Result, RoleError};
pub use manager::SessionRoleManager;
#[cfg(feature = "sync")]
pub use manager::SyncRoleManager;
pub use registry::{RoleManagerConstructor, SESSION_ROLE_MANAGER};
pub use role_manager::RoleManager;
pub use store::{Role, RoleId, RoleStore, Session};
pub use types::{Config, ManagerStats, TimeWindow, Timestamp};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, ManagerBuilder, Result, RoleError, RoleManager, SessionRoleManager, TimeWindow,
        Timestamp,
    };

    #[cfg(feature = "sync")]
    pub use crate::SyncRoleManager;
}
