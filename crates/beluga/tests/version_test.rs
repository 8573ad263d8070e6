#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(beluga::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!beluga::VERSION.is_empty());
}
