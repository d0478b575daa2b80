use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;

/// Liveness endpoint
///
/// Returns a plaintext banner including the current time as reported by the
/// store, proving the database connection is alive end to end.
pub async fn liveness(State(state): State<AppState>) -> Response {
    match state.store.current_time().await {
        Ok(now) => (
            StatusCode::OK,
            format!("DeskPilot API is running! The time from the DB is {now}"),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Liveness database check failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection error",
            )
                .into_response()
        }
    }
}
