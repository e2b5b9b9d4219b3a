//! Tests for the backend health report

use cine_infrastructure::health::{BackendHealthChecker, HealthStatus};
use cine_providers::{NullEmbeddingProvider, NullVectorSearchProvider};
use std::sync::Arc;

#[tokio::test]
async fn test_null_backend_is_healthy() {
    let checker = BackendHealthChecker::new(
        Arc::new(NullEmbeddingProvider::new()),
        Arc::new(NullVectorSearchProvider::new()),
    );

    let report = checker.check().await;

    assert_eq!(report.status, HealthStatus::Healthy);
    assert!(report.status.is_healthy());
    assert_eq!(report.embedding_provider, "null");
    assert_eq!(report.vector_search_provider, "null");
    assert!(report.error.is_none());
}

#[test]
fn test_report_serializes_lowercase_status() {
    let value = serde_json::to_value(HealthStatus::Unhealthy).unwrap();
    assert_eq!(value, "unhealthy");
}
