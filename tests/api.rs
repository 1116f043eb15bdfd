//! End-to-end tests against a local wiremock server.

use idtexpress::{
    CountryIso, CreateOrder, Credentials, DidGroupsQuery, DidNumber, IdtExpressClient,
    IdtExpressError, KnownErrorCode, ListNumbers, ListOrders, Method, OrderId, OrderItem,
    OrderItemStatus,
};
use idtexpress::client::UNEXPECTED_MESSAGE;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn client_for(server: &MockServer) -> IdtExpressClient {
    IdtExpressClient::builder(Credentials::new("test_key", "test_secret").unwrap())
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_country_coverage_sends_credentials_and_decodes_countries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/coverage/countries"))
        .and(header("x-api-key", "test_key"))
        .and(header("x-api-secret", "test_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "countries": [
                { "name": "United States", "iso": "US", "has_regions": true, "supports_toll_free": true }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let countries = client_for(&server).await.get_country_coverage().await.unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name, "United States");
    assert_eq!(countries[0].iso, "US");
}

#[tokio::test]
async fn get_did_groups_sends_only_supplied_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/coverage/did_groups"))
        .and(query_param("country_iso", "US"))
        .and(query_param("region_code", "US-CA"))
        .and(query_param("toll_free", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "did_groups": [
                { "id": 3, "name": "Los Angeles", "area_code": "310", "toll_free": false,
                  "region": { "name": "California", "code": "US-CA" } }
            ],
            "meta": { "total": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = DidGroupsQuery::new(CountryIso::new("US").unwrap())
        .region_code("US-CA")
        .toll_free(true);
    let response = client_for(&server)
        .await
        .get_did_groups(&query)
        .await
        .unwrap();

    assert_eq!(response.did_groups[0].id, 3);
    assert_eq!(
        response.did_groups[0].region.as_ref().map(|r| r.code.as_str()),
        Some("US-CA")
    );
    assert_eq!(response.meta.map(|m| m.total), Some(1));

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("country_iso=US&region_code=US-CA&toll_free=true")
    );
}

#[tokio::test]
async fn create_order_posts_json_and_decodes_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/dids/orders"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "preview": false,
            "order_items": [{ "did_group_id": 3, "quantity": 2 }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "order": {
                "id": "ord-1",
                "created_at": "2024-01-01T00:00:00Z",
                "status": "Processing",
                "ordered": { "quantity": 2 },
                "fulfilled": { "quantity": 0 },
                "order_items": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = CreateOrder::new(vec![OrderItem::by_quantity(3, 2)]).unwrap();
    let response = client_for(&server)
        .await
        .create_order(&order)
        .await
        .unwrap();

    assert_eq!(response.order.id, "ord-1");
    assert_eq!(response.order.status, Some(OrderItemStatus::Processing));
    assert_eq!(response.order.ordered.quantity, 2);
}

#[tokio::test]
async fn get_orders_sends_pagination_and_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/orders"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "5"))
        .and(query_param("filter_by_status", "Complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [],
            "meta": { "page": 2, "page_size": 5, "total": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListOrders {
        page: 2,
        page_size: 5,
        filter_by_status: Some(OrderItemStatus::Complete),
    };
    let response = client_for(&server)
        .await
        .get_orders(&request)
        .await
        .unwrap();
    assert!(response.orders.is_empty());
    assert_eq!(response.meta.and_then(|m| m.page_size), Some(5));
}

#[tokio::test]
async fn vendor_error_envelope_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/orders/missing"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": 422,
            "api_request_id": "req-1",
            "errors": [
                { "code": 1001, "title": "Missing", "detail": "quantity is required", "field": "quantity" }
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_order(&OrderId::new("missing").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, IdtExpressError::Api { status: 422, .. }));
    assert_eq!(err.message(), "quantity is required");
    assert_eq!(
        err.envelope().and_then(|e| e.errors[0].field.as_deref()),
        Some("quantity")
    );
}

#[tokio::test]
async fn plain_text_error_body_becomes_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/coverage/countries"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_country_coverage()
        .await
        .unwrap_err();

    assert!(matches!(err, IdtExpressError::HttpStatus { status: 500, .. }));
    assert_eq!(err.detail(), Some("internal failure"));
}

#[tokio::test]
async fn null_success_body_becomes_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/coverage/did_groups/9/browse_numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .browse_available_numbers(9)
        .await
        .unwrap_err();
    assert!(matches!(err, IdtExpressError::Deserialize { .. }));
}

#[tokio::test]
async fn deleting_a_number_twice_reports_vendor_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/dids/numbers/13105550100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": "13105550100",
            "status": "deleted"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/dids/numbers/13105550100"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "api_request_id": "req-2",
            "errors": [{ "code": 4001, "title": "Not found", "detail": "Number not found" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let number = DidNumber::new("13105550100").unwrap();

    let first = client.delete_number(&number).await.unwrap();
    assert_eq!(first.status, "deleted");

    let err = client.delete_number(&number).await.unwrap_err();
    assert!(err.has_error_code(KnownErrorCode::NumberNotFound));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unsupported_method_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(|_: &Request| true)
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .send::<(), serde_json::Value>(Method::PATCH, "dids/numbers/1", None)
        .await
        .unwrap_err();
    assert!(matches!(err, IdtExpressError::UnsupportedMethod { .. }));
}

#[tokio::test]
async fn put_is_dispatched_with_body_and_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/custom/resource"))
        .and(header("x-api-key", "test_key"))
        .and(header("x-api-secret", "test_secret"))
        .and(body_json(json!({ "enabled": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let value: serde_json::Value = client_for(&server)
        .await
        .send(Method::PUT, "custom/resource", Some(&json!({ "enabled": true })))
        .await
        .unwrap();
    assert_eq!(value, json!({ "ok": true }));
}

#[tokio::test]
async fn get_regions_uses_country_path_and_decodes_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/coverage/countries/US/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "regions": [
                { "name": "California", "code": "US-CA" },
                { "name": "Texas", "code": "US-TX" }
            ],
            "meta": { "total": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .await
        .get_regions(&CountryIso::new("US").unwrap())
        .await
        .unwrap();

    assert_eq!(response.regions.len(), 2);
    assert_eq!(response.regions[1].code, "US-TX");
    assert_eq!(response.meta.map(|m| m.total), Some(2));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn get_numbers_sends_pagination_and_decodes_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/dids/numbers"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numbers": [
                { "number": "13105550100", "status": "Active", "added_at": "2024-01-01T00:00:00Z" }
            ],
            "meta": { "page": 2, "page_size": 25, "total": 26 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListNumbers {
        page: 2,
        page_size: 25,
    };
    let response = client_for(&server)
        .await
        .get_numbers(&request)
        .await
        .unwrap();

    assert_eq!(response.numbers[0].number, "13105550100");
    assert_eq!(response.numbers[0].removed_at, None);
    let meta = response.meta.unwrap();
    assert_eq!(meta.page, Some(2));
    assert_eq!(meta.page_size, Some(25));
    assert_eq!(meta.total, 26);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("page=2&page_size=25"));
}

#[tokio::test]
async fn identifiers_with_separators_stay_in_their_path_segment() {
    let server = MockServer::start().await;
    Mock::given(|_: &Request| true)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": "../orders/ord-9",
            "status": "deleted"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .delete_number(&DidNumber::new("../orders/ord-9").unwrap())
        .await
        .unwrap();
    let _ = client
        .get_order(&OrderId::new("ord-1?page=9").unwrap())
        .await;

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].method.as_str(), "DELETE");
    assert_eq!(received[0].url.path(), "/v1/dids/numbers/..%2Forders%2Ford-9");
    assert_eq!(received[0].url.query(), None);
    assert_eq!(received[1].url.path(), "/v1/dids/orders/ord-1%3Fpage%3D9");
    assert_eq!(received[1].url.query(), None);
}

#[tokio::test]
async fn unreachable_server_becomes_unexpected_error() {
    // Bind an ephemeral port, then release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = IdtExpressClient::builder(Credentials::new("test_key", "test_secret").unwrap())
        .base_url(format!("http://127.0.0.1:{port}/v1"))
        .build()
        .unwrap();

    let err = client.get_country_coverage().await.unwrap_err();
    assert!(matches!(err, IdtExpressError::Unexpected { .. }));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), UNEXPECTED_MESSAGE);
}
