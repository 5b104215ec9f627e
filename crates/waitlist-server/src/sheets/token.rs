use super::StoreError;
use crate::config::ServiceAccountCredentials;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct AccessToken {
    pub value: String,
    /// Unix seconds.
    pub expires_at: i64,
}

impl AccessToken {
    /// Valid for at least another minute.
    pub fn is_fresh(&self, now: i64) -> bool {
        now + 60 < self.expires_at
    }
}

fn signed_assertion(creds: &ServiceAccountCredentials, now: i64) -> Result<String, StoreError> {
    let key = EncodingKey::from_rsa_pem(creds.private_key.as_bytes())
        .map_err(|e| StoreError::new(None, format!("invalid service account key: {e}")))?;
    let claims = Claims {
        iss: &creds.client_email,
        scope: SHEETS_SCOPE,
        aud: &creds.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };
    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| StoreError::new(None, format!("failed to sign token request: {e}")))
}

/// Exchange a signed service-account assertion for an OAuth access token.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    creds: &ServiceAccountCredentials,
) -> Result<AccessToken, StoreError> {
    let now = chrono::Utc::now().timestamp();
    let assertion = signed_assertion(creds, now)?;
    let resp = http
        .post(&creds.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await
        .map_err(|e| StoreError::new(None, e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(StoreError::new(
            Some(status.as_u16()),
            format!("token exchange failed: {}", text.trim()),
        ));
    }
    let body: TokenResponse = resp
        .json()
        .await
        .map_err(|e| StoreError::new(None, format!("bad token response: {e}")))?;
    Ok(AccessToken {
        value: body.access_token,
        expires_at: now + body.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS),
    })
}
