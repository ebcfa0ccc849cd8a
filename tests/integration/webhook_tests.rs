use crate::common::{TEST_COOKIE, mock_auth, page_query, test_client};
use mockito::{Matcher, Server};
use serde_json::json;
use servicetrade_client::prelude::*;

const WEBHOOK_LIST: &str = r#"{
    "data": {
        "totalPages": 1,
        "page": 1,
        "webhooks": [
            {
                "id": 101,
                "uri": "https://api.servicetrade.com/api/webhook/101",
                "hookUrl": "https://example.com/hooks/jobs",
                "enabled": true,
                "confirmed": true,
                "includeChangesets": false,
                "entityEvents": [{"entityType": 3, "events": ["created"]}],
                "created": 1700000000
            },
            {
                "id": 102,
                "hookUrl": "https://example.com/hooks/quotes",
                "enabled": false,
                "confirmed": false,
                "includeChangesets": true,
                "lastDeliveryStatus": "failed"
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_list_webhooks() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, 1).await;
    let list = server
        .mock("GET", "/api/webhook")
        .match_query(page_query(1, 100))
        .match_header("cookie", TEST_COOKIE)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(WEBHOOK_LIST)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let page = service.list(Filters::new(), 1, 100).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.page(), 1);
    assert_eq!(page.per_page(), 100);
    assert_eq!(page.total(), 2);
    assert!(!page.has_next_page());

    let first = page.first().unwrap();
    assert_eq!(first.id(), Some(101));
    assert_eq!(first.uri(), Some("https://api.servicetrade.com/api/webhook/101"));
    assert_eq!(first.hook_url(), Some("https://example.com/hooks/jobs"));
    assert_eq!(first.enabled(), Some(true));
    assert_eq!(first.include_changesets(), Some(false));
    assert_eq!(first.created(), Some(1_700_000_000));
    assert_eq!(
        first.entity_events().unwrap()[0]["entityType"],
        json!(3),
        "nested values are kept as the server sent them"
    );

    let second = page.last().unwrap();
    assert_eq!(second.id(), Some(102));
    assert_eq!(second.enabled(), Some(false));
    assert_eq!(second.created(), None);
    assert_eq!(second.get_str("last_delivery_status"), Some("failed"));

    auth.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_list_default_uses_first_page_of_one_hundred() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let list = server
        .mock("GET", "/api/webhook")
        .match_query(page_query(1, 100))
        .with_status(200)
        .with_body(r#"{"data": {"webhooks": []}}"#)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let page = service.list_default(Filters::new()).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total(), 0);
    list.assert_async().await;
}

#[tokio::test]
async fn test_list_sends_filters_before_pagination() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let list = server
        .mock("GET", "/api/webhook")
        .match_query(Matcher::Exact("enabled=true&page=3&per_page=10".to_string()))
        .with_status(200)
        .with_body(r#"{"data": {"webhooks": [], "page": 3, "totalPages": 5, "total": 42}}"#)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let page = service
        .list(Filters::new().with("enabled", true), 3, 10)
        .await
        .unwrap();

    assert_eq!(page.page(), 3);
    assert_eq!(page.total(), 42);
    assert_eq!(page.total_pages(), Some(5));
    assert_eq!(page.next_page(), Some(4));
    list.assert_async().await;
}

#[tokio::test]
async fn test_list_with_malformed_array_is_protocol_error() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _list = server
        .mock("GET", "/api/webhook")
        .match_query(page_query(1, 100))
        .with_status(200)
        .with_body(r#"{"data": {"webhooks": "nope"}}"#)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let result = service.list(Filters::new(), 1, 100).await;

    assert!(matches!(result, Err(AppError::Protocol(_))));
}

#[tokio::test]
async fn test_find_webhook() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let find = server
        .mock("GET", "/api/webhook/101")
        .with_status(200)
        .with_body(
            r#"{"data": {"id": 101, "hookUrl": "https://example.com/h", "enabled": true}}"#,
        )
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let webhook = service.find(101).await.unwrap();

    assert_eq!(webhook.id(), Some(101));
    assert_eq!(webhook.hook_url(), Some("https://example.com/h"));
    find.assert_async().await;
}

#[tokio::test]
async fn test_find_without_data_is_protocol_error() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _find = server
        .mock("GET", "/api/webhook/101")
        .with_status(200)
        .with_body(r#"{"messages": {}}"#)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let result = service.find(101).await;

    assert!(matches!(result, Err(AppError::Protocol(_))));
}

#[tokio::test]
async fn test_create_webhook() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let create = server
        .mock("POST", "/api/webhook")
        .match_body(Matcher::Json(json!({
            "hookUrl": "https://example.com/new",
            "includeChangesets": true
        })))
        .with_status(200)
        .with_body(
            r#"{"data": {"id": 200, "hookUrl": "https://example.com/new", "includeChangesets": true, "confirmed": false}}"#,
        )
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let webhook = service
        .create(json!({"hookUrl": "https://example.com/new", "includeChangesets": true}))
        .await
        .unwrap();

    assert_eq!(webhook.id(), Some(200));
    assert_eq!(webhook.include_changesets(), Some(true));
    assert_eq!(webhook.confirmed(), Some(false));
    create.assert_async().await;
}

#[tokio::test]
async fn test_update_webhook_returns_new_state() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let update = server
        .mock("PUT", "/api/webhook/101")
        .match_body(Matcher::Json(json!({"enabled": false})))
        .with_status(200)
        .with_body(r#"{"data": {"id": 101, "enabled": false, "updated": 1700000500}}"#)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let updated = service.update(101, json!({"enabled": false})).await.unwrap();

    assert_eq!(updated.id(), Some(101));
    assert_eq!(updated.enabled(), Some(false));
    assert_eq!(updated.updated(), Some(1_700_000_500));
    update.assert_async().await;
}

#[tokio::test]
async fn test_delete_webhook_ignores_body() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let delete = server
        .mock("DELETE", "/api/webhook/101")
        .match_header("cookie", TEST_COOKIE)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    assert!(service.delete(101).await.unwrap());
    delete.assert_async().await;
}

#[tokio::test]
async fn test_delete_missing_webhook_is_api_error() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _delete = server
        .mock("DELETE", "/api/webhook/404")
        .with_status(404)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let error = service.delete(404).await.unwrap_err();

    assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_update_and_delete_from_hydrated_instance() {
    let mut server = Server::new_async().await;
    let _auth = mock_auth(&mut server, 1).await;
    let _find = server
        .mock("GET", "/api/webhook/101")
        .with_status(200)
        .with_body(r#"{"data": {"id": 101, "enabled": true}}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/webhook/101")
        .match_body(Matcher::Json(json!({"enabled": false})))
        .with_status(200)
        .with_body(r#"{"data": {"id": 101, "enabled": false}}"#)
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/webhook/101")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let webhook = service.find(101).await.unwrap();

    let updated = service
        .update_resource(&webhook, json!({"enabled": false}))
        .await
        .unwrap();
    assert_eq!(updated.enabled(), Some(false));
    assert_eq!(webhook.enabled(), Some(true));

    assert!(service.delete_resource(&updated).await.unwrap());
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_instance_without_id_is_rejected_without_request() {
    let mut server = Server::new_async().await;
    let any_put = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_delete = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = ResourceService::<Webhook>::new(test_client(&server));
    let unsaved = hydrate::<Webhook>(json!({"hookUrl": "https://example.com/h"})).unwrap();

    let update = service.update_resource(&unsaved, json!({"enabled": true})).await;
    let delete = service.delete_resource(&unsaved).await;

    assert!(matches!(update, Err(AppError::InvalidArgument(_))));
    assert!(matches!(delete, Err(AppError::InvalidArgument(_))));
    any_put.assert_async().await;
    any_delete.assert_async().await;
}
