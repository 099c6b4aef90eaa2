mod common;

use axum::http::StatusCode;
use common::{ProviderReply, args, spawn_provider, test_server};
use serde_json::{Value, json};

#[tokio::test]
async fn test_options_lists_catalogs() {
    let server = test_server(args(None, "http://127.0.0.1:9/v1", 5_000));

    let response = server.get("/api/options").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["mood"].as_array().unwrap().len(), 7);
    assert_eq!(body["cuisine"].as_array().unwrap().len(), 9);
    assert_eq!(body["dietary"].as_array().unwrap().len(), 7);
    assert_eq!(
        body["time"],
        json!(["Now", "Lunch", "Dinner", "Late Night", "Brunch", "Snack Time"])
    );
    assert_eq!(body["budget"][1], "$$ ($10–20)");
    assert_eq!(body["orderType"], json!(["Delivery", "Pickup", "Dine In", "Any"]));
}

#[tokio::test]
async fn test_health_reports_llm_configuration() {
    let (_, base_url) = spawn_provider(ProviderReply::NoContent).await;

    let server = test_server(args(Some("sk-test"), &base_url, 5_000));
    server
        .get("/api/health")
        .await
        .assert_json(&json!({ "status": "ok", "llm_configured": true }));

    let server = test_server(args(None, &base_url, 5_000));
    server
        .get("/api/health")
        .await
        .assert_json(&json!({ "status": "ok", "llm_configured": false }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = test_server(args(None, "http://127.0.0.1:9/v1", 5_000));

    let response = server.get("/api/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert!(body["paths"]["/api/restaurantRecommendation"]["post"].is_object());
    assert!(body["paths"]["/api/options"]["get"].is_object());
}
