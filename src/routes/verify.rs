use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_INVALID_EMAIL, ERR_MISSING_EMAIL, TOKEN_BYTES};
use crate::error::{AppError, Result};
use crate::routes::validation::{is_valid_email, normalize_email};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyEmailResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RedeemTokenResponse {
    pub success: bool,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckVerificationRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckVerificationResponse {
    pub verified: bool,
}

/// Generate a fresh verification token (256 bits of entropy, hex-encoded)
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Request email verification
///
/// Issues a new token for the address and emails a verification link. A
/// repeat request starts a new cycle: any previous token is replaced and the
/// verified flag resets to false, so prior trust is invalidated.
///
/// The record is persisted before the gateway is consulted; a misconfigured
/// or failing mail transport returns 500 but does not roll back token
/// issuance.
pub async fn request_verification(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailRequest>,
) -> Result<Json<VerifyEmailResponse>> {
    let email = payload.email.as_deref().map(normalize_email);
    let email = match email {
        Some(ref e) if is_valid_email(e) => e.clone(),
        _ => return Err(AppError::Validation(ERR_INVALID_EMAIL.to_string())),
    };

    let token = generate_token();
    let verification_url = state.config.verification_url(&token);

    state.store.issue_token(&email, &token, Utc::now()).await?;

    if !state.mailer.is_available() {
        tracing::error!("Mail transport credentials not configured");
        return Err(AppError::NotificationUnavailable);
    }

    state
        .mailer
        .send_verification(&email, &verification_url)
        .await?;

    tracing::info!("Verification email sent successfully to {}", email);

    Ok(Json(VerifyEmailResponse {
        success: true,
        message: "Verification email sent".to_string(),
    }))
}

/// Redeem a verification token
///
/// Marks the associated email as verified and stamps the verification time.
/// The token is consumed by redemption; redeeming it again (or presenting a
/// token that was never issued) returns 404.
pub async fn redeem_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<RedeemTokenResponse>> {
    let email = state
        .store
        .redeem_token(&token, Utc::now())
        .await?
        .ok_or(AppError::TokenNotFound)?;

    tracing::info!("Email verified successfully: {}", email);

    Ok(Json(RedeemTokenResponse {
        success: true,
        email,
        message: "Email verified successfully".to_string(),
    }))
}

/// Check whether an email is verified
///
/// Unknown emails read as not verified rather than as an error.
pub async fn check_verification(
    State(state): State<AppState>,
    Json(payload): Json<CheckVerificationRequest>,
) -> Result<Json<CheckVerificationResponse>> {
    let email = match payload.email.as_deref() {
        Some(e) if !e.trim().is_empty() => normalize_email(e),
        _ => return Err(AppError::Validation(ERR_MISSING_EMAIL.to_string())),
    };

    let verified = state.store.is_verified(&email).await?;

    Ok(Json(CheckVerificationResponse { verified }))
}
