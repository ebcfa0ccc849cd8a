use reqwest::Method;
use serde_json::json;
use servicetrade_client::error::AppError;
use servicetrade_client::model::http::{ApiRequest, RawPayload};

#[test]
fn test_api_request_builders() {
    let request = ApiRequest::get("webhook")
        .query("status", "open")
        .extend_query([("page", 1), ("per_page", 100)]);

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "webhook");
    assert_eq!(
        request.query,
        vec![
            ("status".to_string(), "open".to_string()),
            ("page".to_string(), "1".to_string()),
            ("per_page".to_string(), "100".to_string()),
        ]
    );
    assert!(request.body.is_none());
}

#[test]
fn test_api_request_with_body() {
    let post = ApiRequest::post("webhook", json!({"hookUrl": "x"}));
    assert_eq!(post.method, Method::POST);
    assert_eq!(post.body, Some(json!({"hookUrl": "x"})));

    let put = ApiRequest::put("webhook/1", json!({}));
    assert_eq!(put.method, Method::PUT);

    let delete = ApiRequest::delete("webhook/1");
    assert_eq!(delete.method, Method::DELETE);
    assert!(delete.body.is_none());
}

#[test]
fn test_raw_payload_from_body() {
    let payload = RawPayload::from_body(r#"{"data": {"id": 1}}"#).unwrap();
    assert_eq!(payload.data().unwrap(), &json!({"id": 1}));
    assert_eq!(payload.into_data().unwrap(), json!({"id": 1}));
}

#[test]
fn test_raw_payload_empty_body_is_null() {
    let payload = RawPayload::from_body("  ").unwrap();
    assert!(payload.as_value().is_null());
    assert!(matches!(payload.data(), Err(AppError::Protocol(_))));
}

#[test]
fn test_raw_payload_invalid_json_is_decode_error() {
    let result = RawPayload::from_body("{not json");
    assert!(matches!(result, Err(AppError::Decode(_))));
}

#[test]
fn test_raw_payload_missing_or_null_data() {
    let missing = RawPayload::new(json!({"messages": []}));
    assert!(matches!(missing.into_data(), Err(AppError::Protocol(_))));

    let null = RawPayload::new(json!({"data": null}));
    assert!(matches!(null.into_data(), Err(AppError::Protocol(_))));
}

#[test]
fn test_encode_path_segment_escapes_reserved_characters() {
    use servicetrade_client::model::http::encode_path_segment;

    assert_eq!(encode_path_segment("WO#42").unwrap(), "WO%2342");
    assert_eq!(encode_path_segment("a/b").unwrap(), "a%2Fb");
    assert_eq!(encode_path_segment("A?b=1").unwrap(), "A%3Fb=1");
    assert_eq!(encode_path_segment("my system").unwrap(), "my%20system");
    assert_eq!(encode_path_segment("100%").unwrap(), "100%25");
    assert_eq!(encode_path_segment("LOC-9").unwrap(), "LOC-9");
}

#[test]
fn test_encode_path_segment_rejects_dot_segments() {
    use servicetrade_client::model::http::encode_path_segment;

    for raw in ["", ".", ".."] {
        assert!(matches!(
            encode_path_segment(raw),
            Err(AppError::InvalidArgument(_))
        ));
    }
}
