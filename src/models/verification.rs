use chrono::{DateTime, Utc};
use serde::Serialize;

/// Verification record, one row per normalized email address
///
/// The same row carries both the email-verification state machine (token,
/// verified flag) and the download counters; the two are written through
/// separate upsert statements with different conflict semantics.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct VerificationRecord {
    /// Lowercase-normalized email address (natural key)
    pub email: String,
    /// Outstanding verification token; None once redeemed or never issued
    pub token: Option<String>,
    /// Whether the most recent verification cycle completed
    pub verified: bool,
    /// When the current cycle was verified
    pub verified_at: Option<DateTime<Utc>>,
    /// Number of tracked downloads; never decreases
    pub download_count: i64,
    /// When the most recent download was tracked
    pub last_download_at: Option<DateTime<Utc>>,
    /// Version label of the last downloaded artifact (e.g. "2.0")
    pub version: Option<String>,
    /// Filename of the last downloaded artifact
    pub filename: Option<String>,
    /// When the row was first created
    pub created_at: DateTime<Utc>,
}
