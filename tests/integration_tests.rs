use session_rbac::{
    Config, ManagerBuilder, RoleManager, SessionRoleManager, TimeWindow, Timestamp, registry,
};

fn at(ts: &str) -> Timestamp {
    Timestamp::new(ts)
}

#[test]
fn test_reflexivity() {
    let rm = SessionRoleManager::default();
    assert!(rm.has_link("never-seen", "never-seen", &at("2020-01-01")));
    assert!(rm.has_link("never-seen", "never-seen", &at("")));
}

#[test]
fn test_temporal_bound() {
    let mut rm = registry::create("session").unwrap();
    rm.add_link("u", "admin", &["2020-01-01", "2020-12-31"]);

    assert!(rm.has_link("u", "admin", &["2020-06-01"]));
    assert!(!rm.has_link("u", "admin", &["2021-01-01"]));
    assert!(!rm.has_link("u", "admin", &["2019-12-31"]));
}

#[test]
fn test_transitive_chain_depends_on_depth() {
    let window = TimeWindow::new("2020-01-01", "2020-12-31");
    let t = at("2020-07-04");

    let mut deep = SessionRoleManager::new(2);
    deep.add_link("a", "b", window.clone());
    deep.add_link("b", "c", window.clone());
    assert!(deep.has_link("a", "c", &t));

    let mut shallow = SessionRoleManager::new(1);
    shallow.add_link("a", "b", window.clone());
    shallow.add_link("b", "c", window);
    assert!(shallow.has_link("a", "b", &t));
    assert!(!shallow.has_link("a", "c", &t));
}

#[test]
fn test_deletion_invalidates_all_windows() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("a", "b", TimeWindow::new("2020-01-01", "2020-06-30"));
    rm.add_link("a", "b", TimeWindow::new("2020-07-01", "2020-12-31"));
    rm.add_link("b", "c", TimeWindow::new("2020-01-01", "2020-12-31"));

    rm.delete_link("a", "b");

    for ts in ["2020-01-01", "2020-03-15", "2020-07-01", "2020-12-31"] {
        assert!(!rm.has_link("a", "b", &at(ts)), "still linked at {}", ts);
        assert!(!rm.has_link("a", "c", &at(ts)), "still linked at {}", ts);
    }
    // Roles survive deletion of their links.
    assert!(rm.has_role("a"));
    assert!(rm.has_role("b"));
    assert!(rm.has_link("b", "c", &at("2020-03-15")));
}

#[test]
fn test_get_users_includes_out_of_window_sessions() {
    let mut rm = SessionRoleManager::default();
    rm.add_link("alice", "admin", TimeWindow::new("2020-01-01", "2020-12-31"));
    rm.add_link("bob", "admin", TimeWindow::new("1999-01-01", "1999-12-31"));

    assert_eq!(rm.get_users("admin"), vec!["alice", "bob"]);
    assert!(!rm.has_link("bob", "admin", &at("2020-06-01")));
}

#[test]
fn test_malformed_arity_leaves_state_unchanged() {
    let mut rm: Box<dyn RoleManager> = Box::new(SessionRoleManager::default());
    rm.add_link("a", "b", &["2020-01-01", "2020-12-31"]);

    rm.add_link("x", "y", &[]);
    rm.add_link("x", "y", &["2020-01-01"]);

    assert!(rm.get_roles("x", &[]).is_empty());
    assert!(rm.get_users("y").is_empty());
    assert!(!rm.has_link("a", "b", &[]));
    assert!(!rm.has_link("a", "b", &["2020-01-01", "2020-12-31"]));
    assert!(rm.has_link("a", "b", &["2020-01-01"]));
}

#[test]
fn test_role_hierarchy_with_iso_timestamps() {
    let mut rm = SessionRoleManager::default();
    rm.add_link(
        "alice",
        "oncall",
        TimeWindow::new("2024-03-01T08:00:00Z", "2024-03-01T20:00:00Z"),
    );
    rm.add_link(
        "oncall",
        "prod-admin",
        TimeWindow::new("2024-01-01T00:00:00Z", "2024-12-31T23:59:59Z"),
    );

    assert!(rm.has_link("alice", "prod-admin", &at("2024-03-01T12:30:00Z")));
    assert!(!rm.has_link("alice", "prod-admin", &at("2024-03-01T20:00:01Z")));
    assert!(rm.has_link("oncall", "prod-admin", &at("2024-03-01T20:00:01Z")));
}

#[test]
fn test_builder_and_config() {
    let config = Config::from_json(r#"{ "max_hierarchy_level": 2 }"#).unwrap();
    let rm = ManagerBuilder::new()
        .config(config)
        .link("a", "b", TimeWindow::new("2020-01-01", "2020-12-31"))
        .link("b", "c", TimeWindow::new("2020-01-01", "2020-12-31"))
        .link("c", "d", TimeWindow::new("2020-01-01", "2020-12-31"))
        .build()
        .unwrap();

    let t = at("2020-02-02");
    assert!(rm.has_link("a", "c", &t));
    assert!(!rm.has_link("a", "d", &t));

    let stats = rm.stats();
    assert_eq!(stats.role_count, 4);
    assert_eq!(stats.session_count, 3);
    assert_eq!(stats.max_hierarchy_level, 2);
}

#[test]
fn test_print_roles_is_deterministic() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rm = SessionRoleManager::default();
    rm.add_link("u2", "g", TimeWindow::new("2020-01-01", "2020-12-31"));
    rm.add_link("u1", "g", TimeWindow::new("2020-01-01", "2021-12-31"));

    let first = rm.role_lines();
    assert_eq!(first, rm.role_lines());
    assert_eq!(
        first,
        vec![
            "u2 < g (until: 2020-12-31)",
            "g < ",
            "u1 < g (until: 2021-12-31)",
        ]
    );
    rm.print_roles();
}
