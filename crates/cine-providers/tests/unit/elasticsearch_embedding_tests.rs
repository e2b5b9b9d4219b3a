//! Tests for the Elasticsearch inference adapter against a mock cluster

use crate::test_utils::{TEST_MODEL, UNREACHABLE_URL, connection};
use cine_domain::ports::providers::EmbeddingProvider;
use cine_domain::{Error, InferenceOutcome};
use cine_providers::embedding::ElasticsearchEmbeddingProvider;
use mockito::{Matcher, Server};
use serde_json::json;

const INFER_PATH: &str = "/_ml/trained_models/sentence-transformers__msmarco-minilm-l-12-v3/_infer";

#[test]
fn test_provider_metadata() {
    let provider = ElasticsearchEmbeddingProvider::new(connection(UNREACHABLE_URL), TEST_MODEL);
    assert_eq!(provider.provider_name(), "elasticsearch");
    assert_eq!(provider.model_id(), TEST_MODEL);
}

#[tokio::test]
async fn test_infer_returns_first_predicted_value() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", INFER_PATH)
        .match_body(Matcher::Json(json!({ "docs": [{ "text_field": "a hacker" }] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "inference_results": [
                    { "predicted_value": [0.25, -0.5, 1.0] },
                    { "predicted_value": [9.0, 9.0, 9.0] }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    let outcome = provider.infer("a hacker").await.unwrap();

    let embedding = outcome.embedding().unwrap();
    assert_eq!(embedding.vector, vec![0.25, -0.5, 1.0]);
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, TEST_MODEL);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_zero_inference_results_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", INFER_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "inference_results": [] }).to_string())
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    let outcome = provider.infer("").await.unwrap();

    assert_eq!(outcome, InferenceOutcome::Empty);
}

#[tokio::test]
async fn test_missing_inference_results_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", INFER_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    assert!(provider.infer("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_predicted_value_is_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", INFER_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "inference_results": [{ "warning": "truncated" }] }).to_string())
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    let err = provider.infer("robots").await.unwrap_err();

    assert!(err.is_embedding_failure());
    assert!(err.to_string().contains("predicted_value"));
}

#[tokio::test]
async fn test_non_numeric_vector_is_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", INFER_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "inference_results": [{ "predicted_value": [0.1, "x"] }] }).to_string())
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    assert!(matches!(
        provider.infer("robots").await,
        Err(Error::Embedding { .. })
    ));
}

#[tokio::test]
async fn test_model_not_deployed_is_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", INFER_PATH)
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "type": "status_exception",
                    "reason": "Trained model deployment is not started"
                },
                "status": 409
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = ElasticsearchEmbeddingProvider::new(connection(&server.url()), TEST_MODEL);
    let err = provider.infer("robots").await.unwrap_err();

    assert!(err.is_embedding_failure());
    assert!(err.to_string().contains("deployment is not started"));
}

#[tokio::test]
async fn test_unreachable_backend_is_embedding_error() {
    let provider = ElasticsearchEmbeddingProvider::new(connection(UNREACHABLE_URL), TEST_MODEL);
    let err = provider.infer("robots").await.unwrap_err();

    assert!(err.is_embedding_failure());
    assert!(err.to_string().contains("unreachable"));
}
