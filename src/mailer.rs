use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::constants::VERIFICATION_LINK_EXPIRY_HOURS;

/// Why an outbound send failed
#[derive(Debug, Error)]
pub enum SendError {
    #[error("mail provider rejected the API credentials")]
    Auth,
    #[error("could not reach the mail provider")]
    Connection,
    #[error("{0}")]
    Other(String),
}

/// Outbound-notification capability consumed by the verification flow
///
/// The gateway is a boundary: callers only learn whether a transport is
/// configured and whether a send succeeded, never provider specifics.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// True iff transport credentials are configured
    fn is_available(&self) -> bool;

    /// Send a verification email carrying the given link
    async fn send_verification(&self, to: &str, verification_url: &str)
        -> Result<(), SendError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MailAddress {
    email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMailBody {
    sender: MailAddress,
    to: Vec<MailAddress>,
    subject: String,
    html_content: String,
}

/// Mailer backed by a transactional-mail HTTP API
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from_email: Option<String>,
}

impl HttpMailer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from_email: config.from_email.clone(),
        }
    }
}

#[async_trait]
impl NotificationGateway for HttpMailer {
    fn is_available(&self) -> bool {
        self.api_key.is_some() && self.from_email.is_some()
    }

    async fn send_verification(
        &self,
        to: &str,
        verification_url: &str,
    ) -> Result<(), SendError> {
        let (Some(api_key), Some(from_email)) = (&self.api_key, &self.from_email) else {
            return Err(SendError::Other("mail transport not configured".to_string()));
        };

        let body = SendMailBody {
            sender: MailAddress {
                email: from_email.clone(),
            },
            to: vec![MailAddress {
                email: to.to_string(),
            }],
            subject: "Verify Your Email - DeskPilot Download".to_string(),
            html_content: verification_email_html(verification_url),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", api_key)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    SendError::Connection
                } else {
                    SendError::Other(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Verification email sent to {}", to);
            return Ok(());
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SendError::Auth);
        }

        let detail = response.text().await.unwrap_or_default();
        Err(SendError::Other(format!(
            "mail provider returned {status}: {detail}"
        )))
    }
}

/// Fixed verification message template (external contract)
fn verification_email_html(verification_url: &str) -> String {
    format!(
        "<h2>Verify Your Email</h2>\
         <p>Click the link below to verify your email and download the DeskPilot app:</p>\
         <a href=\"{url}\" style=\"display: inline-block; padding: 10px 20px; \
         background: #667eea; color: white; text-decoration: none; \
         border-radius: 5px;\">Verify Email</a>\
         <p>Or copy and paste this link:</p>\
         <p>{url}</p>\
         <p>This link will expire in {hours} hours.</p>",
        url = verification_url,
        hours = VERIFICATION_LINK_EXPIRY_HOURS,
    )
}
