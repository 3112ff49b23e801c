use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::test as actix_test;
use actix_web::{web, App};
use address_book::api::dtos::{HealthResponse, HealthStatus};
use address_book::api::openapi::configure_swagger_ui;
use address_book::api::routes;
use serde_json::Value;

use super::test_app;
use crate::common::fixtures::address_at;
use crate::common::{app_state, mocks::MockAddressRepo};

#[actix_rt::test]
async fn health_reports_connected_store() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get().uri("/health").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.status, HealthStatus::Healthy);
    assert_eq!(body.database, "connected");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn health_and_ready_return_503_when_store_is_unreachable() {
    let repo = Arc::new(MockAddressRepo::default());
    repo.set_unreachable(true);
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get().uri("/health").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: HealthResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.status, HealthStatus::Unhealthy);
    assert_eq!(body.database, "disconnected");

    let request = actix_test::TestRequest::get().uri("/ready").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn store_outage_surfaces_as_service_unavailable_on_crud_routes() {
    let repo = Arc::new(MockAddressRepo::default());
    repo.push(address_at(1, 1.0, 1.0));
    repo.set_unreachable(true);
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/addresses/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}

#[actix_rt::test]
async fn metrics_requires_private_network_or_admin_token() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get().uri("/metrics").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = actix_test::TestRequest::get()
        .uri("/metrics")
        .peer_addr("8.8.8.8:4000".parse().unwrap())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn metrics_reports_searches_to_private_peers() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/addresses/nearby?latitude=0&longitude=0")
        .to_request();
    actix_test::call_service(&app, request).await;

    let request = actix_test::TestRequest::get()
        .uri("/metrics")
        .peer_addr("127.0.0.1:4000".parse().unwrap())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("address_searches_total{strategy=\"bounding_box\"} 1"));
    assert!(text.contains("db_pool_size 0"));
}

#[actix_rt::test]
async fn metrics_allows_admin_token_from_public_peer() {
    let repo = Arc::new(MockAddressRepo::default());
    let mut state = app_state(repo);
    state.security.metrics_admin_token = Some("ops-secret".to_string());
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/metrics")
        .peer_addr("8.8.8.8:4000".parse().unwrap())
        .insert_header(("x-admin-token", "ops-secret"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn security_headers_are_present() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let request = actix_test::TestRequest::get().uri("/health").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-content-type-options"));
    assert!(response.headers().contains_key("x-frame-options"));
    assert!(response.headers().contains_key("referrer-policy"));
}

#[actix_rt::test]
async fn cors_preflight_respects_allowlist() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(test_app(app_state(repo))).await;

    let allowed_preflight = actix_test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/v1/addresses")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let allowed_response = actix_test::call_service(&app, allowed_preflight).await;
    assert_eq!(allowed_response.status(), StatusCode::OK);
    assert_eq!(
        allowed_response
            .headers()
            .get("access-control-allow-origin")
            .expect("allow origin header missing"),
        "http://localhost:3000"
    );

    let denied_preflight = actix_test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/v1/addresses")
        .insert_header(("Origin", "http://evil.example"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let denied_response = actix_test::call_service(&app, denied_preflight).await;
    assert_eq!(denied_response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn openapi_document_is_served() {
    let repo = Arc::new(MockAddressRepo::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(repo)))
            .configure(routes::configure)
            .configure(configure_swagger_ui),
    )
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let doc: Value = actix_test::call_and_read_body_json(&app, request).await;

    assert!(doc["paths"]["/api/v1/addresses/nearby"]["get"].is_object());
    assert!(doc["components"]["schemas"]["AddressResponse"].is_object());
}
