//! Compute layer for containment queries.
//!
//! This module separates traversal and argument handling from storage:
//! - `reachability`: depth-bounded search over time-valid sessions
//! - `validation`: parsing of the variadic temporal arguments

pub mod reachability;
pub mod validation;

pub use reachability::has_valid_session;
