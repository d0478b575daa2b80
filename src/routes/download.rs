use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_INVALID_EMAIL, ERR_MISSING_EMAIL, ERR_MISSING_FILENAME};
use crate::error::{AppError, Result};
use crate::routes::validation::{extract_version, is_valid_email, normalize_email};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterEmailResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct TrackDownloadRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackDownloadResponse {
    pub success: bool,
}

/// Register an email and record a completed download
///
/// Upserts the record atomically: an existing row has its download counter
/// incremented and its artifact metadata (version, filename, timestamp)
/// overwritten; a first-time email gets a row with download_count = 1.
pub async fn register_email(
    State(state): State<AppState>,
    Json(payload): Json<RegisterEmailRequest>,
) -> Result<Json<RegisterEmailResponse>> {
    let email = payload.email.as_deref().map(normalize_email);
    let email = match email {
        Some(ref e) if is_valid_email(e) => e.clone(),
        _ => return Err(AppError::Validation(ERR_INVALID_EMAIL.to_string())),
    };

    let filename = match payload.filename.as_deref() {
        Some(f) if !f.trim().is_empty() => f.to_string(),
        _ => return Err(AppError::Validation(ERR_MISSING_FILENAME.to_string())),
    };

    let version = extract_version(&filename);

    state
        .store
        .record_download(&email, &filename, version.as_deref(), Utc::now())
        .await?;

    tracing::info!(
        "Download recorded for {}: {} (version {:?})",
        email,
        filename,
        version
    );

    Ok(Json(RegisterEmailResponse {
        success: true,
        message: "Email registered successfully".to_string(),
    }))
}

/// Counter-only download tracking
///
/// Increments the download counter for an existing record. An email with no
/// record is a successful no-op: without a filename there is nothing
/// meaningful to create.
pub async fn track_download(
    State(state): State<AppState>,
    Json(payload): Json<TrackDownloadRequest>,
) -> Result<Json<TrackDownloadResponse>> {
    let email = match payload.email.as_deref() {
        Some(e) if !e.trim().is_empty() => normalize_email(e),
        _ => return Err(AppError::Validation(ERR_MISSING_EMAIL.to_string())),
    };

    state.store.bump_download(&email).await?;

    Ok(Json(TrackDownloadResponse { success: true }))
}
