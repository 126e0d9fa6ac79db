//! Logging emitted by the engine when the `tracing` feature is on

#![cfg(feature = "tracing")]

use tracing_test::traced_test;
use tributary::Validator;

#[traced_test]
#[test]
fn test_short_circuit_is_logged() {
    let v = Validator::new("abc").has_spaces().unwrap();
    let _ = v.is_alphanumeric().unwrap();
    assert!(logs_contain("predicate evaluated"));
    assert!(logs_contain("short-circuit: predicate skipped"));
}

#[traced_test]
#[test]
fn test_diagnostics_are_logged() {
    let _ = Validator::new(3).has_spaces().unwrap_err();
    assert!(logs_contain("validation diagnostic raised"));
}
