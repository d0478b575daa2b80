use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::VerificationRecord;

/// Handle to the verification-record table
///
/// Every mutation is a single conditional SQL statement so that concurrent
/// requests for the same email cannot interleave a read-then-write and lose
/// an update. The service layer must never reimplement these as separate
/// SELECT + UPDATE calls.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Wrap an existing pool (used by tests with an in-memory database)
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up the record for a normalized email address
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, sqlx::Error> {
        sqlx::query_as::<_, VerificationRecord>(
            "SELECT * FROM email_verifications WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Issue a fresh verification token for an email
    ///
    /// Replace-on-conflict semantics: an existing row gets the new token and
    /// its verified flag reset, starting a new verification cycle. Download
    /// counters on the row are untouched.
    pub async fn issue_token(
        &self,
        email: &str,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO email_verifications (email, token, verified, created_at) \
             VALUES (?1, ?2, FALSE, ?3) \
             ON CONFLICT(email) DO UPDATE SET \
                 token = excluded.token, \
                 verified = FALSE",
        )
        .bind(email)
        .bind(token)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Redeem a verification token, returning the email it was issued for
    ///
    /// The token is cleared in the same statement, so a second redemption of
    /// the same token matches no row and reads as not found. Returns None for
    /// tokens that were never issued or were already redeemed.
    pub async fn redeem_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "UPDATE email_verifications SET \
                 verified = TRUE, \
                 verified_at = ?1, \
                 token = NULL \
             WHERE token = ?2 \
             RETURNING email",
        )
        .bind(now)
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Whether an email has completed its current verification cycle
    ///
    /// Total over all emails: an unknown address is simply not verified.
    pub async fn is_verified(&self, email: &str) -> Result<bool, sqlx::Error> {
        let verified = sqlx::query_scalar::<_, bool>(
            "SELECT verified FROM email_verifications WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(verified.unwrap_or(false))
    }

    /// Record a completed download for an email
    ///
    /// Counter-increment semantics: an existing row has its download_count
    /// bumped and the artifact metadata overwritten; a new row starts at 1.
    /// Distinct from issue_token's replace-on-conflict path.
    pub async fn record_download(
        &self,
        email: &str,
        filename: &str,
        version: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO email_verifications \
                 (email, version, filename, download_count, last_download_at, created_at) \
             VALUES (?1, ?2, ?3, 1, ?4, ?4) \
             ON CONFLICT(email) DO UPDATE SET \
                 download_count = download_count + 1, \
                 version = excluded.version, \
                 filename = excluded.filename, \
                 last_download_at = excluded.last_download_at",
        )
        .bind(email)
        .bind(version)
        .bind(filename)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Counter-only download bump for an existing record
    ///
    /// An unknown email matches no row and the call is a no-op; counting a
    /// download for an address that never touched the system is meaningless
    /// without a filename.
    pub async fn bump_download(&self, email: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE email_verifications SET download_count = download_count + 1 \
             WHERE email = ?1",
        )
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Current time as reported by the database, for the liveness page
    pub async fn current_time(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT datetime('now')")
            .fetch_one(&self.pool)
            .await
    }
}
