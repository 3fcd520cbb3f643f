//! Integration tests for the resource accessors.

use serde_json::json;
use shopipy::rest::{Fetched, ListParams, ResourceError, ShapeError};
use shopipy::{AccessToken, ApiVersion, HostUrl, StoreConfig, StoreSession, ValidationError};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer) -> StoreSession {
    let config = StoreConfig::builder()
        .shop("jsmith")
        .access_token(AccessToken::new("shpat_test").unwrap())
        .api_version(ApiVersion::V2025_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    StoreSession::new(config)
}

fn order_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "created_at": "2024-03-11T10:15:00-04:00",
        "currency": "USD",
        "total_price": "10.00",
        "some_future_field": {"ignored": true}
    })
}

async fn mount_get(server: &MockServer, url_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_orders_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders.json"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "3/40")
                .set_body_json(json!({"orders": [order_json(1, "#1001"), order_json(2, "#1002")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let orders = session.orders().list(Some(2)).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].name, "#1001");
    assert_eq!(orders[1].id, 2);
    assert_eq!(orders.rate_limit().unwrap().request_count, 3);
}

#[tokio::test]
async fn test_find_order_raw_removes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/450789469.json"))
        .and(query_param_is_missing("limit"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"order": order_json(450_789_469, "#1001")})),
        )
        .mount(&server)
        .await;

    let session = session_for(&server);
    let order = session.orders().raw().find(450_789_469).await.unwrap();

    assert_eq!(order["name"], "#1001");
    assert_eq!(order["some_future_field"]["ignored"], true);
}

#[tokio::test]
async fn test_get_chooses_path_from_id() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/admin/api/2025-10/customers.json",
        json!({"customers": [{"id": 1}, {"id": 2}]}),
    )
    .await;
    mount_get(
        &server,
        "/admin/api/2025-10/customers/2.json",
        json!({"customer": {"id": 2, "email": "bob@example.com"}}),
    )
    .await;

    let session = session_for(&server);

    let page = session.customers().get(None, Some(10)).await.unwrap();
    assert!(matches!(&page, Fetched::Many(customers) if customers.len() == 2));

    let one = session.customers().get(Some(2), Some(10)).await.unwrap();
    let customer = one.into_one().unwrap();
    assert_eq!(customer.email.as_deref(), Some("bob@example.com"));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("limit=10"));
    assert_eq!(received[1].url.query(), None);
}

#[tokio::test]
async fn test_list_with_forwards_filters_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/webhooks.json"))
        .and(query_param("topic", "orders/create"))
        .and(query_param("page_info", "cursor-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    r#"<https://jsmith.myshopify.com/admin/api/2025-10/webhooks.json?page_info=cursor-0>; rel="previous", <https://jsmith.myshopify.com/admin/api/2025-10/webhooks.json?page_info=cursor-2>; rel="next""#,
                )
                .set_body_json(json!({"webhooks": [
                    {"id": 1, "topic": "orders/create", "address": "https://example.com/hook"}
                ]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let params = ListParams::new()
        .limit(1)
        .query_param("topic", "orders/create")
        .page_info("cursor-1");
    let webhooks = session.webhooks().list_with(&params).await.unwrap();

    assert_eq!(webhooks[0].topic, "orders/create");
    assert_eq!(webhooks.next_page_info(), Some("cursor-2"));
    assert_eq!(webhooks.prev_page_info(), Some("cursor-0"));
}

#[tokio::test]
async fn test_fulfillments_without_order_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server);

    let list = session.fulfillments().list(None).await.unwrap_err();
    assert!(matches!(
        list,
        ResourceError::Validation(ValidationError::MissingParentId { .. })
    ));

    let find = session.fulfillments().find(255_858_046).await.unwrap_err();
    assert_eq!(find.to_string(), "Fulfillment find requires order_id.");
}

#[tokio::test]
async fn test_fulfillments_for_order() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/admin/api/2025-10/orders/450789469/fulfillments.json",
        json!({"fulfillments": [{
            "id": 255858046,
            "order_id": 450789469,
            "status": "success",
            "created_at": "2024-03-12T08:00:00-04:00",
            "tracking_numbers": ["1Z2345"]
        }]}),
    )
    .await;

    let session = session_for(&server);
    let fulfillments = session
        .fulfillments()
        .for_order(450_789_469)
        .list(None)
        .await
        .unwrap();

    assert_eq!(fulfillments[0].order_id, 450_789_469);
    assert_eq!(fulfillments[0].status, "success");
}

#[tokio::test]
async fn test_wrong_envelope_key_is_a_shape_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/admin/api/2025-10/orders/1.json",
        json!({"Order": order_json(1, "#1001")}),
    )
    .await;

    let session = session_for(&server);
    let error = session.orders().find(1).await.unwrap_err();

    let ResourceError::Shape(ShapeError::MissingEnvelope { key, found }) = error else {
        panic!("expected a missing envelope error");
    };
    assert_eq!(key, "order");
    assert_eq!(found, vec!["Order".to_string()]);
}

#[tokio::test]
async fn test_missing_required_field_names_record_and_index() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/admin/api/2025-10/orders.json",
        json!({"orders": [order_json(1, "#1001"), {"id": 2, "name": "#1002"}]}),
    )
    .await;

    let session = session_for(&server);
    let error = session.orders().list(None).await.unwrap_err();

    let message = error.to_string();
    assert!(message.contains("Order"), "{message}");
    assert!(message.contains("index 1"), "{message}");
    assert!(message.contains("created_at"), "{message}");

    // Raw mode does not map records, so the same body is accepted.
    let raw = session.orders().raw().list(None).await.unwrap();
    assert_eq!(raw.len(), 2);
}

#[tokio::test]
async fn test_non_json_success_body_is_a_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let error = session.products().list(None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Shape(ShapeError::NotAnObject {
            key: "products",
            found: "a string"
        })
    ));
}

#[tokio::test]
async fn test_not_found_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let session = session_for(&server);
    let error = session.webhooks().find(1).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_invalid_limit_is_a_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let error = session.orders().list(Some(0)).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Validation(ValidationError::LimitOutOfRange { limit: 0 })
    ));
}

#[tokio::test]
async fn test_product_create_update_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/products.json"))
        .and(body_json(json!({"product": {"title": "Burton Custom Freestyle 151"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {"id": 1072481042, "title": "Burton Custom Freestyle 151", "status": "active"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/products/1072481042.json"))
        .and(body_json(json!({"product": {"title": "New Title"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 1072481042, "title": "New Title"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/products/1072481042.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let products = session.products();

    let created = products
        .create(json!({"title": "Burton Custom Freestyle 151"}))
        .await
        .unwrap();
    assert_eq!(created.id, 1_072_481_042);
    assert_eq!(created.status.as_deref(), Some("active"));

    let updated = products
        .update(created.id, json!({"title": "New Title"}))
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("New Title"));

    let deleted = products.delete(created.id).await.unwrap();
    assert_eq!(*deleted, json!({}));
}

#[tokio::test]
async fn test_product_create_rejected_by_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .mount(&server)
        .await;

    let session = session_for(&server);
    let error = session.products().create(json!({})).await.unwrap_err();

    assert_eq!(error.status(), Some(422));
    assert!(error.to_string().contains("can't be blank"));
}
