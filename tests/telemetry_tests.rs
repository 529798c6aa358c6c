use kundali_layout::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn tracing_installs_at_most_once() {
    let first = init_default_tracing();
    assert!(!init_tracing_with_filter("kundali_layout=trace"));

    #[cfg(not(feature = "telemetry"))]
    assert!(!first);
    #[cfg(feature = "telemetry")]
    let _ = first;
}

#[test]
fn default_filter_names_the_engine_target() {
    assert!(DEFAULT_FILTER.contains("kundali_layout=info"));
}
