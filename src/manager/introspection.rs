//! Structural introspection: direct roles, users and diagnostic dumps.
//!
//! None of these look at session windows. They describe the shape of the
//! hierarchy, not what holds at a given time; use
//! [`has_link`](SessionRoleManager::has_link) for temporal answers.

use super::SessionRoleManager;
use crate::types::ManagerStats;

impl SessionRoleManager {
    /// Names of the direct session targets of `name`, in session order.
    ///
    /// A target appears once per session, so duplicate sessions produce
    /// duplicate names. Unknown roles yield an empty list.
    pub fn get_roles(&self, name: &str) -> Vec<String> {
        let Some(id) = self.store.id(name) else {
            return Vec::new();
        };
        self.store
            .role(id)
            .sessions()
            .iter()
            .map(|s| self.store.name(s.target).to_string())
            .collect()
    }

    /// Names of roles holding at least one direct session towards `name`,
    /// in role creation order.
    pub fn get_users(&self, name: &str) -> Vec<String> {
        let Some(target) = self.store.id(name) else {
            return Vec::new();
        };
        self.store
            .iter()
            .filter(|(_, role)| role.has_direct_role(target))
            .map(|(_, role)| role.name().to_string())
            .collect()
    }

    /// One `"<name> < t1 (until: e1), ..."` line per role, in creation order.
    pub fn role_lines(&self) -> Vec<String> {
        self.store
            .iter()
            .map(|(id, _)| self.store.describe(id))
            .collect()
    }

    /// Logs every role with its direct sessions at info level.
    pub fn print_roles(&self) {
        for line in self.role_lines() {
            log::info!("{}", line);
        }
    }

    pub fn stats(&self) -> ManagerStats {
        ManagerStats {
            role_count: self.store.len(),
            session_count: self.store.session_count(),
            max_hierarchy_level: self.config.max_hierarchy_level,
        }
    }
}
