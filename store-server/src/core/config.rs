use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, media, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | EMAIL_FROM | noreply@store.local | From address for outgoing mail |
/// | SITE_NAME | ABZ Store | Name used in email footers |
/// | PUBLIC_URL | http://localhost:3000 | Base URL for links in emails |
/// | JWT_SECRET | (generated in dev) | HS256 signing key, min 32 bytes |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database, media and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    /// From address for outgoing mail
    pub email_from: String,
    /// Store name used in email footers
    pub site_name: String,
    /// Base URL used when rendering links in emails
    pub public_url: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "noreply@store.local".into()),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "ABZ Store".into()),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
        }
    }

    /// Override the bits tests care about.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn media_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("media")
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work_dir subtree if it does not exist yet.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        for dir in [self.database_dir(), self.media_dir(), self.log_dir()] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
