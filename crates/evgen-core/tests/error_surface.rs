use evgen_core::{ErrorInfo, EvgError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("name", "spp-cc")
        .with_context("reason", "example")
}

#[test]
fn config_error_surface() {
    let err = EvgError::Config(sample_info("CF001", "conflicting flags"));
    assert_eq!(err.info().code, "CF001");
    assert!(err.info().context.contains_key("name"));
}

#[test]
fn registry_error_surface() {
    let err = EvgError::Registry(sample_info("RG001", "unknown name"));
    assert_eq!(err.info().code, "RG001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn pdg_error_surface() {
    let err = EvgError::Pdg(sample_info("PD001", "duplicate code"));
    assert_eq!(err.info().code, "PD001");
}

#[test]
fn error_display_includes_context_and_hint() {
    let err = EvgError::Config(
        ErrorInfo::new("CF002", "bad option")
            .with_context("key", "is-CC")
            .with_hint("pick exactly one current type"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("CF002"));
    assert!(rendered.contains("key=is-CC"));
    assert!(rendered.contains("pick exactly one current type"));
}

#[test]
fn error_serde_roundtrip() {
    let err = EvgError::Registry(sample_info("RG002", "missing selector"));
    let json = serde_json::to_string(&err).unwrap();
    let back: EvgError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
