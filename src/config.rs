use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    /// Base URL of the marketing site; verification links point back here.
    pub frontend_url: String,
    /// Endpoint of the transactional-mail HTTP API.
    pub mail_api_url: String,
    /// API key for the mail provider. Absent means the gateway is unavailable.
    pub mail_api_key: Option<String>,
    /// Sender address for verification emails.
    pub from_email: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3333".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/deskpilot.db".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:4321".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "https://deskpilot.app".to_string());

        let mail_api_url = env::var("MAIL_API_URL")
            .unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string());

        let mail_api_key = env::var("MAIL_API_KEY").ok().filter(|k| !k.trim().is_empty());

        let from_email = env::var("FROM_EMAIL").ok().filter(|k| !k.trim().is_empty());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            allowed_origins,
            frontend_url,
            mail_api_url,
            mail_api_key,
            from_email,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Build the verification URL the email links to
    pub fn verification_url(&self, token: &str) -> String {
        format!("{}/verify?token={}", self.frontend_url, token)
    }
}
