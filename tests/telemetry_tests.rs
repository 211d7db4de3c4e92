use graphs::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[test]
fn tracing_init_reports_outcome() {
    let first = init_default_tracing();
    let second = init_tracing_with_fallback("graphs=debug");

    assert_eq!(first, cfg!(feature = "telemetry"));
    // A global subscriber can only be installed once per process.
    assert!(!second);
}
