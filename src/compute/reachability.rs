//! Depth-bounded reachability over time-valid sessions.

use crate::store::{RoleId, RoleStore};
use crate::types::Timestamp;
use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

/// Returns true if `target` is reachable from `from` through sessions active
/// at `at`, following at most `max_depth` hops.
///
/// The search is an explicit depth-first walk over `(role, remaining_depth)`
/// frames. A role that was already expanded with at least the same remaining
/// budget is not expanded again: everything it could reach has been seen.
/// With a depth of zero nothing is reachable.
pub fn has_valid_session(
    store: &RoleStore,
    from: RoleId,
    target: RoleId,
    max_depth: usize,
    at: &Timestamp,
) -> bool {
    let mut expanded: FxHashMap<RoleId, usize> = FxHashMap::default();
    let mut stack: SmallVec<[(RoleId, usize); 16]> = smallvec![(from, max_depth)];

    while let Some((role, remaining)) = stack.pop() {
        if remaining == 0 {
            log::trace!(
                "hierarchy depth exhausted at '{}' looking for '{}'",
                store.name(role),
                store.name(target)
            );
            continue;
        }
        if expanded.get(&role).is_some_and(|&seen| seen >= remaining) {
            continue;
        }
        expanded.insert(role, remaining);

        let mut next: SmallVec<[RoleId; 8]> = SmallVec::new();
        for session in store.role(role).sessions() {
            if !session.is_active(at) {
                continue;
            }
            if session.target == target {
                return true;
            }
            next.push(session.target);
        }

        // Reversed so the first session is explored first.
        stack.extend(next.into_iter().rev().map(|id| (id, remaining - 1)));
    }

    false
}
