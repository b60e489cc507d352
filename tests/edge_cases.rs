use session_rbac::{SessionRoleManager, TimeWindow, Timestamp};

fn year() -> TimeWindow {
    TimeWindow::new("2020-01-01", "2020-12-31")
}

/// Test 1: Long chains stop exactly at the configured depth
#[test]
fn test_long_chain_at_depth_limit() {
    let mut rm = SessionRoleManager::new(50);
    for i in 0..60 {
        rm.add_link(&format!("r{}", i), &format!("r{}", i + 1), year());
    }

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("r0", "r50", &t));
    assert!(!rm.has_link("r0", "r51", &t));
    assert!(rm.has_link("r10", "r60", &t));
}

/// Test 2: Cycles terminate, even with a huge depth budget
#[test]
fn test_cycle_with_large_depth() {
    let mut rm = SessionRoleManager::new(100_000);
    rm.add_link("a", "b", year());
    rm.add_link("b", "c", year());
    rm.add_link("c", "a", year());
    rm.add_link("z", "a", year());

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("a", "c", &t));
    assert!(!rm.has_link("a", "z", &t));
}

/// Test 3: Dense graph, exponential path count, stays fast
#[test]
fn test_dense_layers() {
    let mut rm = SessionRoleManager::new(12);
    for layer in 0..10 {
        for i in 0..8 {
            for j in 0..8 {
                rm.add_link(
                    &format!("l{}n{}", layer, i),
                    &format!("l{}n{}", layer + 1, j),
                    year(),
                );
            }
        }
    }

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("l0n0", "l10n7", &t));
    assert!(!rm.has_link("l0n0", "missing", &t));
    assert!(!rm.has_link("l0n0", "l10n7", &Timestamp::new("2021-05-01")));
}

/// Test 4: Self links are harmless
#[test]
fn test_self_session() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("a", "a", year());
    rm.add_link("a", "b", year());

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("a", "b", &t));
    assert!(!rm.has_link("b", "a", &t));
    assert_eq!(rm.get_roles("a"), vec!["a", "b"]);
    assert_eq!(rm.get_users("a"), vec!["a"]);
}

/// Test 5: Only the matching window of overlapping sessions matters
#[test]
fn test_overlapping_windows() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("u", "g", TimeWindow::new("2020-01-01", "2020-03-31"));
    rm.add_link("u", "g", TimeWindow::new("2020-03-01", "2020-06-30"));
    rm.add_link("u", "g", TimeWindow::new("2020-09-01", "2020-09-30"));

    assert!(rm.has_link("u", "g", &Timestamp::new("2020-03-15")));
    assert!(rm.has_link("u", "g", &Timestamp::new("2020-06-30")));
    assert!(!rm.has_link("u", "g", &Timestamp::new("2020-07-15")));
    assert!(rm.has_link("u", "g", &Timestamp::new("2020-09-30")));
    assert_eq!(rm.get_roles("u"), vec!["g", "g", "g"]);
}

/// Test 6: Empty and unusual names
#[test]
fn test_unusual_names() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("", "root", year());
    rm.add_link("naïve user", "管理者", year());

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("", "root", &t));
    assert!(rm.has_link("naïve user", "管理者", &t));
    assert_eq!(rm.get_users("root"), vec![""]);
}

/// Test 7: Deleting an absent link between known roles changes nothing
#[test]
fn test_delete_absent_link() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("a", "b", year());
    rm.add_link("c", "d", year());

    assert_eq!(rm.delete_link("a", "d"), 0);
    assert_eq!(rm.get_roles("a"), vec!["b"]);
    assert_eq!(rm.stats().session_count, 2);
}

/// Test 8: Zero depth manager only answers reflexive queries
#[test]
fn test_zero_depth_manager() {
    let mut rm = SessionRoleManager::new(0);
    rm.add_link("a", "b", year());

    let t = Timestamp::new("2020-05-01");
    assert!(rm.has_link("a", "a", &t));
    assert!(!rm.has_link("a", "b", &t));
}
