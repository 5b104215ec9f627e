//! Credentials and sheet id, validated per request.
//!
//! The values come from the process environment (or a credentials file) at
//! start-up, but an invalid configuration only fails the requests that need
//! it so the page keeps serving while an operator fixes the deployment.

use serde::Deserialize;

/// Substrings left behind by the setup template. Any of them in the
/// credentials or sheet id means the deployment was never configured.
pub const PLACEHOLDER_TOKENS: [&str; 4] = [
    "YOUR_SERVICE_ACCOUNT_EMAIL",
    "YOUR_PRIVATE_KEY_GOES_HERE",
    "YOUR_GOOGLE_SHEET_ID",
    "your-google-sheet-id-here",
];

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("service account credentials are not set")]
    MissingCredentials,
    #[error("service account credentials are not valid JSON: {0}")]
    MalformedCredentials(String),
    #[error("service account credentials are missing `{0}`")]
    MissingField(&'static str),
    #[error("Google Sheet id is not set")]
    MissingSheetId,
    #[error("credentials still contain placeholder values")]
    Placeholder,
}

/// Subset of a Google service-account key file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceAccountCredentials {
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub credentials: ServiceAccountCredentials,
    pub sheet_id: String,
}

/// Configuration as read from the environment, before validation.
#[derive(Clone, Debug, Default)]
pub struct RawConfig {
    pub credentials_json: Option<String>,
    pub sheet_id: Option<String>,
}

impl RawConfig {
    pub fn new(credentials_json: Option<String>, sheet_id: Option<String>) -> Self {
        Self {
            credentials_json,
            sheet_id,
        }
    }

    pub fn validate(&self) -> Result<WaitlistConfig, ConfigError> {
        let raw = self
            .credentials_json
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredentials)?;
        let mut credentials: ServiceAccountCredentials = serde_json::from_str(raw)
            .map_err(|e| ConfigError::MalformedCredentials(e.to_string()))?;
        if credentials.client_email.trim().is_empty() {
            return Err(ConfigError::MissingField("client_email"));
        }
        if credentials.private_key.trim().is_empty() {
            return Err(ConfigError::MissingField("private_key"));
        }
        // Keys pasted into a single-line env var keep their newlines escaped.
        if credentials.private_key.contains("\\n") {
            credentials.private_key = credentials.private_key.replace("\\n", "\n");
        }

        let sheet_id = self
            .sheet_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSheetId)?;

        if contains_placeholder(raw) || contains_placeholder(sheet_id) {
            return Err(ConfigError::Placeholder);
        }

        Ok(WaitlistConfig {
            credentials,
            sheet_id: sheet_id.to_string(),
        })
    }
}

fn contains_placeholder(value: &str) -> bool {
    PLACEHOLDER_TOKENS.iter().any(|t| value.contains(t))
}
