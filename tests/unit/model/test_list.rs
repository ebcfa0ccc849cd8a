use serde_json::json;
use servicetrade_client::error::AppError;
use servicetrade_client::model::http::RawPayload;
use servicetrade_client::model::list::parse_list;
use servicetrade_client::prelude::{ServiceLine, Webhook};

fn payload(value: serde_json::Value) -> RawPayload {
    RawPayload::new(value)
}

#[test]
fn test_parse_list_keeps_server_order() {
    let list = parse_list::<Webhook>(
        payload(json!({"data": {"webhooks": [{"id": 3}, {"id": 1}, {"id": 2}]}})),
        "webhooks",
        1,
        100,
    )
    .unwrap();

    let ids: Vec<i64> = list.iter().filter_map(|w| w.id()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(list.total(), 3);
    assert_eq!(list.page(), 1);
    assert_eq!(list.per_page(), 100);
    assert_eq!(list.total_pages(), None);
    assert!(!list.has_next_page());
}

#[test]
fn test_parse_list_missing_array_is_empty() {
    let list = parse_list::<Webhook>(payload(json!({"data": {}})), "webhooks", 1, 100).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.total(), 0);

    let list = parse_list::<Webhook>(
        payload(json!({"data": {"webhooks": null}})),
        "webhooks",
        1,
        100,
    )
    .unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_parse_list_envelope_pagination_wins() {
    let list = parse_list::<ServiceLine>(
        payload(json!({"data": {
            "servicelines": [{"id": 1}],
            "page": "2",
            "perPage": 25,
            "total": 51,
            "totalPages": 3
        }})),
        "servicelines",
        1,
        100,
    )
    .unwrap();

    assert_eq!(list.page(), 2);
    assert_eq!(list.per_page(), 25);
    assert_eq!(list.total(), 51);
    assert_eq!(list.total_pages(), Some(3));
    assert_eq!(list.next_page(), Some(3));
}

#[test]
fn test_parse_list_next_page_from_total() {
    let list = parse_list::<ServiceLine>(
        payload(json!({"data": {"servicelines": [{"id": 1}, {"id": 2}], "total": 5}})),
        "servicelines",
        1,
        2,
    )
    .unwrap();

    assert!(list.has_next_page());
    assert_eq!(list.next_page(), Some(2));
}

#[test]
fn test_parse_list_page_is_at_least_one() {
    let list = parse_list::<Webhook>(
        payload(json!({"data": {"webhooks": [], "page": 0}})),
        "webhooks",
        0,
        10,
    )
    .unwrap();
    assert_eq!(list.page(), 1);
}

#[test]
fn test_parse_list_oversized_page_raises_per_page() {
    let list = parse_list::<Webhook>(
        payload(json!({"data": {"webhooks": [{"id": 1}, {"id": 2}, {"id": 3}]}})),
        "webhooks",
        1,
        2,
    )
    .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list.len() <= list.per_page() as usize);
}

#[test]
fn test_parse_list_errors() {
    let cases = [
        json!({"webhooks": []}),
        json!({"data": null}),
        json!({"data": [1, 2]}),
        json!({"data": {"webhooks": {"id": 1}}}),
        json!({"data": {"webhooks": [1, 2]}}),
    ];
    for case in cases {
        let result = parse_list::<Webhook>(payload(case.clone()), "webhooks", 1, 100);
        assert!(
            matches!(result, Err(AppError::Protocol(_))),
            "expected protocol error for {case}"
        );
    }
}

#[test]
fn test_list_response_iterators() {
    let list = parse_list::<Webhook>(
        payload(json!({"data": {"webhooks": [{"id": 1}, {"id": 2}]}})),
        "webhooks",
        1,
        100,
    )
    .unwrap();

    let borrowed: Vec<Option<i64>> = (&list).into_iter().map(|w| w.id()).collect();
    assert_eq!(borrowed, vec![Some(1), Some(2)]);
    assert_eq!(list.first().and_then(|w| w.id()), Some(1));
    assert_eq!(list.last().and_then(|w| w.id()), Some(2));

    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

mod properties {
    use proptest::prelude::*;
    use serde_json::{Value, json};
    use servicetrade_client::model::http::RawPayload;
    use servicetrade_client::model::list::parse_list;
    use servicetrade_client::prelude::Webhook;

    proptest! {
        #[test]
        fn parse_list_keeps_every_item_in_order(
            ids in prop::collection::vec(any::<i64>(), 0..60),
            page in 0u32..5,
            per_page in 1u32..100,
        ) {
            let items: Vec<Value> = ids
                .iter()
                .map(|id| json!({"id": id, "hookUrl": format!("https://example.com/{id}")}))
                .collect();
            let payload = RawPayload::new(json!({"data": {"webhooks": items}}));

            let list = parse_list::<Webhook>(payload, "webhooks", page, per_page).unwrap();

            prop_assert_eq!(list.len(), ids.len());
            prop_assert!(list.len() <= list.per_page() as usize);
            prop_assert!(list.page() >= 1);
            prop_assert_eq!(list.total(), ids.len() as u64);

            let read: Vec<i64> = list.iter().filter_map(|w| w.id()).collect();
            prop_assert_eq!(read, ids);
        }
    }
}
