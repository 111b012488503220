use super::*;

// =============================================================
// ValidationError
// =============================================================

#[test]
fn validation_codes_are_distinct() {
    let errors = [
        ValidationError::LastPanel,
        ValidationError::UnknownTemplate("x".into()),
        ValidationError::PanelOutOfRange { index: 3, len: 2 },
        ValidationError::EmptyTarget,
        ValidationError::InvalidScale(f64::NAN),
        ValidationError::ResizeInProgress,
        ValidationError::EmptyGrid { cols: 0, rows: 1 },
        ValidationError::NoPanels,
        ValidationError::DegenerateArea { index: 0 },
        ValidationError::AreaOutOfBounds { index: 0 },
    ];
    let mut codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn validation_display_is_user_facing() {
    assert_eq!(ValidationError::LastPanel.to_string(), "must have at least one panel");
    assert_eq!(ValidationError::UnknownTemplate("4x4".into()).to_string(), "unknown template: 4x4");
    assert_eq!(
        ValidationError::PanelOutOfRange { index: 5, len: 2 }.to_string(),
        "panel index 5 out of range (have 2)"
    );
}

#[test]
fn only_resize_in_progress_is_retryable() {
    assert!(ValidationError::ResizeInProgress.retryable());
    assert!(!ValidationError::LastPanel.retryable());
    assert!(!ValidationError::EmptyTarget.retryable());
}

// =============================================================
// DecodeError
// =============================================================

#[test]
fn decode_error_wraps_json_errors() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("should fail");
    let err = DecodeError::from(json_err);
    assert!(matches!(err, DecodeError::Syntax(_)));
    assert_eq!(err.error_code(), "E_DECODE_SYNTAX");
}

#[test]
fn decode_error_wraps_validation_errors() {
    let err = DecodeError::from(ValidationError::NoPanels);
    assert!(matches!(err, DecodeError::Invalid(ValidationError::NoPanels)));
    assert_eq!(err.to_string(), "invalid layout: layout has no panels");
}

// =============================================================
// PersistenceError
// =============================================================

#[test]
fn persistence_errors_are_retryable() {
    let err = PersistenceError::Rejected("quota".into());
    assert!(err.retryable());
    assert_eq!(err.error_code(), "E_PERSIST_REJECTED");

    let io = PersistenceError::from(std::io::Error::other("disk"));
    assert_eq!(io.error_code(), "E_PERSIST_IO");
    assert!(io.to_string().contains("disk"));
}
