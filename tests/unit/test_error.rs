use reqwest::StatusCode;
use servicetrade_client::error::AppError;
use std::error::Error;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("password is missing".to_string());
    assert_eq!(error.to_string(), "configuration error: password is missing");
}

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("login rejected".to_string());
    assert_eq!(error.to_string(), "authentication error: login rejected");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        body: "missing".to_string(),
    };
    assert_eq!(error.to_string(), "api error 404 Not Found: missing");
}

#[test]
fn test_app_error_display_protocol() {
    let error = AppError::Protocol("no data".to_string());
    assert_eq!(error.to_string(), "protocol error: no data");
}

#[test]
fn test_app_error_display_invalid_argument() {
    let error = AppError::InvalidArgument("bad type".to_string());
    assert_eq!(error.to_string(), "invalid argument: bad type");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Decode(_) => (),
        _ => panic!("Expected Decode error"),
    }
    assert!(app_error.source().is_some());
    assert!(app_error.to_string().starts_with("decode error: "));
}

#[test]
fn test_app_error_status() {
    let error = AppError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: String::new(),
    };
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(AppError::Protocol("x".to_string()).status(), None);
}

#[test]
fn test_app_error_is_auth_failure() {
    let api = |status| AppError::Api {
        status,
        body: String::new(),
    };
    assert!(api(StatusCode::UNAUTHORIZED).is_auth_failure());
    assert!(api(StatusCode::FORBIDDEN).is_auth_failure());
    assert!(!api(StatusCode::NOT_FOUND).is_auth_failure());
    assert!(!AppError::Authentication("rejected".to_string()).is_auth_failure());
}

#[test]
fn test_app_error_without_source() {
    assert!(
        AppError::Configuration("x".to_string())
            .source()
            .is_none()
    );
}
