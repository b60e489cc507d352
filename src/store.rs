//! Role storage: an arena of role records addressed by stable ids.
//!
//! Sessions reference their target role by [`RoleId`] rather than by pointer,
//! so cyclic hierarchies need no shared ownership. Roles are never removed,
//! which keeps every id handed out valid for the lifetime of the store.

use crate::types::{TimeWindow, Timestamp};
use rustc_hash::FxHashMap;
use std::fmt::Write;

/// Stable index of a role inside a [`RoleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleId(usize);

impl RoleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A time-bounded inheritance edge towards another role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub target: RoleId,
    pub window: TimeWindow,
}

impl Session {
    pub fn new(target: RoleId, window: TimeWindow) -> Self {
        Self { target, window }
    }

    #[inline]
    pub fn is_active(&self, at: &Timestamp) -> bool {
        self.window.contains(at)
    }
}

/// A named node holding its outbound sessions in insertion order.
#[derive(Debug, Clone)]
pub struct Role {
    name: String,
    sessions: Vec<Session>,
}

impl Role {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sessions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub(crate) fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Removes every session towards `target`, whatever its window.
    /// Remaining sessions keep their relative order.
    pub(crate) fn delete_sessions(&mut self, target: RoleId) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.target != target);
        before - self.sessions.len()
    }

    /// True if any session, active or not, points at `target`.
    pub fn has_direct_role(&self, target: RoleId) -> bool {
        self.sessions.iter().any(|s| s.target == target)
    }
}

/// Name-keyed collection of roles, populated lazily.
#[derive(Debug, Default, Clone)]
pub struct RoleStore {
    roles: Vec<Role>,
    index: FxHashMap<String, RoleId>,
}

impl RoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn id(&self, name: &str) -> Option<RoleId> {
        self.index.get(name).copied()
    }

    /// Returns the id for `name`, creating an empty role on first use.
    pub fn get_or_create(&mut self, name: &str) -> RoleId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = RoleId(self.roles.len());
        self.roles.push(Role::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Panics if `id` was not issued by this store.
    pub fn role(&self, id: RoleId) -> &Role {
        &self.roles[id.0]
    }

    pub(crate) fn role_mut(&mut self, id: RoleId) -> &mut Role {
        &mut self.roles[id.0]
    }

    pub fn name(&self, id: RoleId) -> &str {
        self.roles[id.0].name()
    }

    /// Iterates roles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, &Role)> {
        self.roles.iter().enumerate().map(|(i, r)| (RoleId(i), r))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn session_count(&self) -> usize {
        self.roles.iter().map(|r| r.sessions.len()).sum()
    }

    /// Renders `"<name> < t1 (until: e1), t2 (until: e2)"` for one role.
    pub fn describe(&self, id: RoleId) -> String {
        let role = self.role(id);
        let mut line = format!("{} < ", role.name);
        for (i, session) in role.sessions.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            // Writing into a String cannot fail.
            let _ = write!(
                line,
                "{} (until: {})",
                self.name(session.target),
                session.window.end
            );
        }
        line
    }
}
