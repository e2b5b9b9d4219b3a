//! Health endpoint tests

use cine_server::CineServerBuilder;
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use std::sync::Arc;

use crate::test_utils::mock_services::{MockSearchService, health_checker, transport};

async fn client(healthy: bool) -> Client {
    let server = CineServerBuilder::new()
        .with_search_service(Arc::new(MockSearchService::new()))
        .with_health_checker(health_checker(healthy))
        .build()
        .unwrap();
    Client::tracked(transport(server).rocket())
        .await
        .expect("valid rocket instance")
}

#[rocket::async_test]
async fn test_health_endpoint_healthy() {
    let client = client(true).await;

    let response = client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["embedding_provider"], "stub");
    assert_eq!(json["model_id"], "stub-model");
    assert_eq!(json["vector_search_provider"], "stub-store");
    assert!(json["response_time_ms"].is_number());
    assert!(json.get("error").is_none());
}

#[rocket::async_test]
async fn test_health_endpoint_unhealthy() {
    let client = client(false).await;

    let response = client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::ServiceUnavailable);
    let body = response.into_string().await.expect("response body");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
}
