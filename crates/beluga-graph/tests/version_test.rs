#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(beluga_graph::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!beluga_graph::VERSION.is_empty());
}
