use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FxError::config("x").to_string().contains("config error:"));
    assert_eq!(FxError::AlreadyStarted.to_string(), "timeline already started");
    assert!(FxError::TimelineSealed.to_string().contains("sealed"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
