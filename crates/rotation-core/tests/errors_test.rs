use rotation_core::errors::*;

#[test]
fn config_error_parse_carries_path_and_message() {
    let err = ConfigError::ParseError {
        path: "/etc/rotation.toml".into(),
        message: "expected `]`".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/etc/rotation.toml"));
    assert!(msg.contains("expected `]`"));
}

#[test]
fn config_error_code_is_stable() {
    let err = ConfigError::ValidationFailed {
        field: "simulation.step_hours".into(),
        message: "must be greater than 0".into(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert_eq!(
        err.coded_string(),
        "[CONFIG_ERROR] Config validation failed for simulation.step_hours: must be greater than 0"
    );
}

#[test]
fn invalid_schedule_has_its_own_code() {
    let err = RotationError::InvalidSchedule {
        reason: "offsets must be strictly decreasing".into(),
    };
    assert_eq!(err.error_code(), "INVALID_SCHEDULE");
    assert!(err.to_string().contains("strictly decreasing"));
}

#[test]
fn config_error_converts_to_rotation_error_and_keeps_code() {
    let config_err = ConfigError::FileNotFound {
        path: "rotation.toml".into(),
    };
    let err: RotationError = config_err.into();
    assert!(matches!(err, RotationError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("rotation.toml"));
}
