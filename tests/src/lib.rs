//! Shared helpers for the workspace integration tests.

use std::sync::Once;

use log::LevelFilter;

/// Tolerance used when comparing results that involve decimal fractions
pub const TOLERANCE: f64 = 1e-4;

static INIT: Once = Once::new();

/// Install `env_logger` once per test binary. `RUST_LOG` overrides the level.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .parse_default_env()
            .try_init();
    });
}

/// Assert that `expression` evaluates to `expected` within [`TOLERANCE`].
#[track_caller]
pub fn assert_evaluates_to(expression: &str, expected: f64) {
    match formula::evaluate(expression) {
        Ok(actual) => assert!(
            (actual - expected).abs() < TOLERANCE,
            "{expression:?} evaluated to {actual}, expected {expected}"
        ),
        Err(err) => panic!("{expression:?} failed to evaluate: {err}"),
    }
}

/// Assert that `expression` fails with the given kind of error.
#[track_caller]
pub fn assert_fails_with(expression: &str, kind: formula::ErrorKind) {
    match formula::evaluate(expression) {
        Ok(value) => panic!("{expression:?} evaluated to {value}, expected {kind:?}"),
        Err(err) => assert_eq!(err.kind(), kind, "{expression:?} failed with: {err}"),
    }
}
