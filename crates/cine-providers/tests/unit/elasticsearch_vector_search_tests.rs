//! Tests for the Elasticsearch kNN adapter against a mock cluster

use crate::test_utils::{TEST_FIELD, TEST_INDEX, UNREACHABLE_URL, connection};
use cine_domain::ports::providers::VectorSearchProvider;
use cine_domain::{Error, KnnQuery};
use cine_providers::vector_search::ElasticsearchVectorSearchProvider;
use mockito::{Matcher, Server};
use serde_json::{Value, json};

const SEARCH_PATH: &str = "/tmdb-with-embeddings/_search";

fn query(k: usize) -> KnnQuery {
    KnnQuery::new(TEST_INDEX, TEST_FIELD, vec![0.5, 0.25], k, 100)
}

fn hit(id: usize, score: f64) -> Value {
    json!({
        "_index": TEST_INDEX,
        "_id": id.to_string(),
        "_score": score,
        "_source": { "Title": format!("Movie {id}"), "TMDb_Id": id.to_string() }
    })
}

fn search_response(hits: Vec<Value>) -> String {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": { "total": { "value": hits.len(), "relation": "eq" }, "hits": hits }
    })
    .to_string()
}

#[test]
fn test_search_body_shape() {
    let body = ElasticsearchVectorSearchProvider::build_search_body(&query(10));

    assert_eq!(body["knn"]["field"], TEST_FIELD);
    assert_eq!(body["knn"]["k"], 10);
    assert_eq!(body["knn"]["num_candidates"], 100);
    assert_eq!(body["knn"]["query_vector"], json!([0.5, 0.25]));
    assert_eq!(body["size"], 10);
    assert_eq!(body["_source"].as_array().unwrap().len(), 7);
    assert!(body["_source"].as_array().unwrap().contains(&json!("TMDb_Id")));
}

#[tokio::test]
async fn test_knn_search_returns_ranked_hits() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .match_body(Matcher::PartialJson(json!({
            "knn": { "field": TEST_FIELD, "k": 10, "num_candidates": 100 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_response(vec![hit(603, 0.98), hit(604, 0.91), hit(605, 0.90)]))
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let hits = provider.knn_search(&query(10)).await.unwrap();

    let ids: Vec<_> = hits.iter().map(|h| h.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["603", "604", "605"]);
    assert_eq!(hits[0].score, Some(0.98));
    assert_eq!(hits[0].field("Title"), Some(&json!("Movie 603")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_knn_search_truncates_to_k() {
    let mut server = Server::new_async().await;
    let hits = (0..5).map(|i| hit(i, 1.0 - i as f64 * 0.1)).collect();
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_response(hits))
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let hits = provider.knn_search(&query(2)).await.unwrap();

    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_invalid_query_never_reaches_backend() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SEARCH_PATH)
        .expect(0)
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let invalid = KnnQuery::new(TEST_INDEX, TEST_FIELD, vec![0.5], 10, 5);
    let err = provider.knn_search(&invalid).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_index_is_index_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "type": "index_not_found_exception",
                    "reason": "no such index [tmdb-with-embeddings]"
                },
                "status": 404
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let err = provider.knn_search(&query(10)).await.unwrap_err();

    assert!(matches!(err, Error::IndexNotFound { ref index } if index == TEST_INDEX));
}

#[tokio::test]
async fn test_dimension_mismatch_from_backend_is_search_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "type": "search_phase_execution_exception",
                    "reason": "the query vector has a different dimension [2] than the index vectors [384]"
                },
                "status": 400
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let err = provider.knn_search(&query(10)).await.unwrap_err();

    assert!(err.is_search_failure());
    assert!(err.to_string().contains("dimension mismatch"));
}

#[tokio::test]
async fn test_rejected_credentials_is_authentication_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(401)
        .with_body("missing authentication credentials")
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let err = provider.knn_search(&query(10)).await.unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert!(err.is_backend_failure());
}

#[tokio::test]
async fn test_malformed_response_is_search_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "took": 1 }).to_string())
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    let err = provider.knn_search(&query(10)).await.unwrap_err();

    assert!(err.is_search_failure());
}

#[tokio::test]
async fn test_unreachable_backend_is_search_failure() {
    let provider = ElasticsearchVectorSearchProvider::new(connection(UNREACHABLE_URL));
    let err = provider.knn_search(&query(10)).await.unwrap_err();

    assert!(err.is_search_failure());
}

#[tokio::test]
async fn test_health_check_green_and_red() {
    let mut server = Server::new_async().await;
    let green = server
        .mock("GET", "/_cluster/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "cluster_name": "movies", "status": "green" }).to_string())
        .create_async()
        .await;

    let provider = ElasticsearchVectorSearchProvider::new(connection(&server.url()));
    assert!(provider.health_check().await.is_ok());
    green.remove_async().await;

    let _red = server
        .mock("GET", "/_cluster/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "cluster_name": "movies", "status": "red" }).to_string())
        .create_async()
        .await;

    let err = provider.health_check().await.unwrap_err();
    assert!(err.to_string().contains("status red"));
}
