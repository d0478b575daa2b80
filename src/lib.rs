//! DeskPilot Download Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod analytics;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod mailer;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use store::RecordStore;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use mailer::NotificationGateway;
use routes::{check_verification, liveness, redeem_token, register_email, request_verification, track_download};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub mailer: Arc<dyn NotificationGateway>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: RecordStore, mailer: Arc<dyn NotificationGateway>, config: Config) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }
}

/// Build the API router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/api/verify-email", post(request_verification))
        .route("/api/verify/:token", get(redeem_token))
        .route("/api/check-verification", post(check_verification))
        .route("/api/track-download", post(track_download))
        .route("/api/register-email", post(register_email))
        .with_state(state)
}
