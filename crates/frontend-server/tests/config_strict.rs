#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use frontend_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
simulation:
  failure_rat: 0.2 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_uses_reference_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);

    let sim = cfg.simulation.settings();
    assert_eq!(sim.min_delay, Duration::from_millis(50));
    assert_eq!(sim.max_delay, Duration::from_millis(800));
    assert_eq!(sim.failure_rate, 0.1);
    assert!(sim.seed.is_none());
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
simulation:
  min_delay_ms: 0
  max_delay_ms: 10
  failure_rate: 0.5
  seed: 42
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.simulation.max_delay_ms, 10);
    assert_eq!(cfg.simulation.seed, Some(42));
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn invalid_ranges_rejected() {
    let cases = [
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nsimulation:\n  min_delay_ms: 900\n  max_delay_ms: 100\n",
        "version: 1\nsimulation:\n  max_delay_ms: 120000\n",
        "version: 1\nsimulation:\n  failure_rate: -0.1\n",
        "version: 1\nsimulation:\n  failure_rate: 1.01\n",
    ];
    for c in cases {
        let err = config::load_from_str(c).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_REQUEST", "case: {c}");
    }
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = config::resolve(Some("does/not/exist.yaml")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
