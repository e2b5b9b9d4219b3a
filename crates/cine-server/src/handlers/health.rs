//! Health endpoint

use cine_infrastructure::health::HealthReport;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};

use super::ServerState;

/// Check the search backend
///
/// Returns `200` with the report when the backend is reachable, `503`
/// otherwise.
#[get("/health")]
pub async fn health_check(state: &State<ServerState>) -> (Status, Json<HealthReport>) {
    let report = state.health.check().await;
    let status = if report.status.is_healthy() {
        Status::Ok
    } else {
        Status::ServiceUnavailable
    };
    (status, Json(report))
}
