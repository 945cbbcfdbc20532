//! Integration tests for the typed endpoint wrappers
//!
//! Each test drives a typed call end to end against a local mock server and
//! checks the wire shape (path, query, body, auth header) plus the decoded
//! response.

use mercanta_api::{
    CheckoutRequest, DefaultDiscount, Mercanta, NewPlan, ProductQuery, SupplierRegistration,
};
use mercanta_client::{ApiConfig, SessionStore};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn api(server: &MockServer) -> Mercanta {
    Mercanta::with_config(ApiConfig::new(server.uri()))
}

fn api_with_session(server: &MockServer, token: &str) -> (Mercanta, Arc<SessionStore>) {
    let session = Arc::new(SessionStore::with_token(token));
    let api = api(server).with_session(Arc::clone(&session));
    (api, session)
}

async fn first_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

fn body_contains(body: &[u8], needle: &[u8]) -> bool {
    body.windows(needle.len()).any(|window| window == needle)
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_categories_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"id": 1, "name": "Electronics"},
                {"id": 2, "name": "Office", "description": "Desks and chairs"},
            ],
        })))
        .mount(&server)
        .await;

    let categories = api(&server)
        .catalog()
        .categories()
        .await
        .expect("request should succeed")
        .data
        .expect("payload present");

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Electronics");
    assert_eq!(categories[1].description.as_deref(), Some("Desks and chairs"));
}

#[tokio::test]
async fn test_products_sends_query_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .and(query_param("category_id", "7"))
        .and(query_param("search", "usb cable"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 9, "name": "USB Cable", "price": 3.5}],
        })))
        .mount(&server)
        .await;

    let query = ProductQuery::new().category(7).search("usb cable").page(2);
    let products = api(&server)
        .catalog()
        .products(&query)
        .await
        .expect("request should succeed")
        .data
        .expect("payload present");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, 3.5);
}

#[tokio::test]
async fn test_products_with_no_filters_sends_bare_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    api(&server)
        .catalog()
        .products(&ProductQuery::new())
        .await
        .expect("request should succeed");

    let request = first_request(&server).await;
    assert!(request.url.query().is_none());
}

// ============================================================================
// Plan Tests
// ============================================================================

#[tokio::test]
async fn test_create_plan_sends_json_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/plans"))
        .and(body_json(json!({
            "name": "Starter",
            "price": 49.0,
            "features": ["10 users"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"id": 3, "name": "Starter", "price": 49.0, "features": ["10 users"]},
        })))
        .mount(&server)
        .await;

    let plan = NewPlan {
        name: "Starter".to_string(),
        price: 49.0,
        features: vec!["10 users".to_string()],
    };
    let created = api(&server)
        .plans()
        .create(&plan)
        .await
        .expect("request should succeed")
        .data
        .expect("payload present");

    assert_eq!(created.id, 3);
    assert_eq!(created.features, vec!["10 users".to_string()]);
}

#[tokio::test]
async fn test_create_plan_surfaces_validation_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/plans"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Plan name is required"})),
        )
        .mount(&server)
        .await;

    let plan = NewPlan {
        name: String::new(),
        price: 0.0,
        features: Vec::new(),
    };
    let err = api(&server)
        .plans()
        .create(&plan)
        .await
        .expect_err("validation error must fail");

    assert_eq!(err.to_string(), "Plan name is required");
    assert_eq!(err.status(), Some(422));
}

// ============================================================================
// Cart Tests
// ============================================================================

#[tokio::test]
async fn test_cart_fetch_returns_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 11,
                "product_id": 9,
                "product_name": "USB Cable",
                "supplier_id": 2,
                "supplier_name": "Acme Supplies",
                "quantity": 3,
                "unit_price": 3.5,
            }],
        })))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "client-token");
    let lines = api.cart().fetch().await.expect("request should succeed");

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].supplier_name.as_deref(), Some("Acme Supplies"));
}

#[tokio::test]
async fn test_cart_fetch_defaults_to_empty_when_data_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "client-token");
    let lines = api.cart().fetch().await.expect("request should succeed");
    assert!(lines.is_empty());
}

#[tokio::test]
async fn test_update_quantity_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/client/cart/11"))
        .and(body_json(json!({"quantity": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "client-token");
    api.cart()
        .update_quantity(11, 5)
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn test_remove_line_tolerates_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/client/cart/11"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "client-token");
    api.cart().remove(11).await.expect("empty body still succeeds");
}

#[tokio::test]
async fn test_checkout_decodes_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/client/checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"order_id": 88, "total": 123.45, "status": "pending"},
        })))
        .mount(&server)
        .await;

    let order = CheckoutRequest {
        shipping_address: "12 Harbor Way".to_string(),
        payment_method: "invoice".to_string(),
        notes: None,
    };
    let (api, _session) = api_with_session(&server, "client-token");
    let receipt = api
        .cart()
        .checkout(&order)
        .await
        .expect("request should succeed")
        .data
        .expect("payload present");

    assert_eq!(receipt.order_id, 88);
    assert_eq!(receipt.total, 123.45);
    assert_eq!(receipt.status, "pending");
}

// ============================================================================
// Supplier Tests
// ============================================================================

#[tokio::test]
async fn test_supplier_registration_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/supplier/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let registration = SupplierRegistration::new("Acme Supplies", "sales@acme.test", "555-0100")
        .with_license("license.pdf", b"fake pdf bytes".to_vec());

    api(&server)
        .supplier()
        .register(registration)
        .await
        .expect("request should succeed");

    let request = first_request(&server).await;
    let content_type = request
        .headers
        .get("content-type")
        .expect("transport sets the multipart content type")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert!(body_contains(&request.body, b"Acme Supplies"));
    assert!(body_contains(&request.body, b"sales@acme.test"));
    assert!(body_contains(&request.body, b"license.pdf"));
}

#[tokio::test]
async fn test_set_default_discount_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/supplier-management/clients/5/default-discount"))
        .and(body_json(json!({"percentage": 12.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"percentage": 12.5},
        })))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "supplier-token");
    let discount = api
        .supplier()
        .set_default_discount(5, DefaultDiscount { percentage: 12.5 })
        .await
        .expect("request should succeed")
        .data
        .expect("payload present");

    assert_eq!(discount.percentage, 12.5);
}

#[tokio::test]
async fn test_clear_discount_with_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/supplier-management/clients/5/default-discount"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "supplier-token");
    api.supplier()
        .clear_default_discount(5)
        .await
        .expect("empty body still succeeds");
}

// ============================================================================
// Session Wiring Tests
// ============================================================================

#[tokio::test]
async fn test_session_token_attached_automatically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let (api, _session) = api_with_session(&server, "sess-token");
    api.catalog()
        .categories()
        .await
        .expect("request should succeed");

    let request = first_request(&server).await;
    assert_eq!(
        request
            .headers
            .get("authorization")
            .expect("Authorization header present")
            .to_str()
            .unwrap(),
        "Bearer sess-token"
    );
}

#[tokio::test]
async fn test_unauthenticated_handle_sends_no_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    api(&server)
        .catalog()
        .categories()
        .await
        .expect("request should succeed");

    let request = first_request(&server).await;
    assert!(!request.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_session_cleared_after_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/client/cart"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated"})))
        .mount(&server)
        .await;

    let (api, session) = api_with_session(&server, "expired");
    let err = api.cart().fetch().await.expect_err("expired session must fail");

    assert!(err.is_session_expired());
    assert_eq!(err.to_string(), "Session expired. Please log in again.");
    assert!(session.token().is_none(), "session store was cleared");
}
