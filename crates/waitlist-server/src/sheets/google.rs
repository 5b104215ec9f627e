use super::token::{fetch_access_token, AccessToken};
use super::{SheetRow, SheetStore, StoreError};
use crate::config::WaitlistConfig;
use serde::Deserialize;
use serde_json::json;
use std::sync::Mutex;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Deserialize)]
struct Sheet {
    #[serde(default)]
    properties: Option<SheetProperties>,
}

#[derive(Deserialize)]
struct SheetProperties {
    #[serde(default)]
    title: Option<String>,
}

/// Google Sheets v4 REST client authenticated as a service account.
pub struct GoogleSheets {
    http: reqwest::Client,
    api_base: String,
    token: Mutex<Option<(String, AccessToken)>>,
}

impl Default for GoogleSheets {
    fn default() -> Self {
        Self::new(SHEETS_API_BASE)
    }
}

impl GoogleSheets {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        }
    }

    fn cached_token(&self, email: &str, now: i64) -> Option<String> {
        let cached = self.token.lock().ok()?;
        match cached.as_ref() {
            Some((owner, token)) if owner == email && token.is_fresh(now) => {
                Some(token.value.clone())
            }
            _ => None,
        }
    }

    /// Bearer token for the configured service account, reused until it is
    /// about to expire.
    async fn bearer(&self, config: &WaitlistConfig) -> Result<String, StoreError> {
        let email = &config.credentials.client_email;
        let now = chrono::Utc::now().timestamp();
        if let Some(token) = self.cached_token(email, now) {
            return Ok(token);
        }
        let token = fetch_access_token(&self.http, &config.credentials).await?;
        let value = token.value.clone();
        if let Ok(mut cached) = self.token.lock() {
            *cached = Some((email.clone(), token));
        }
        Ok(value)
    }

    fn spreadsheet_url(&self, config: &WaitlistConfig) -> Result<reqwest::Url, StoreError> {
        let mut url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| StoreError::new(None, format!("bad api base: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::new(None, "bad api base"))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", config.sheet_id.as_str()]);
        Ok(url)
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|b| b.error.message)
        .unwrap_or(text);
    Err(StoreError::new(Some(status.as_u16()), message))
}

impl SheetStore for GoogleSheets {
    async fn first_sheet_title(&self, config: &WaitlistConfig) -> Result<Option<String>, StoreError> {
        let token = self.bearer(config).await?;
        let mut url = self.spreadsheet_url(config)?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::new(None, e.to_string()))?;
        let doc: Spreadsheet = check(resp)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::new(None, e.to_string()))?;
        Ok(doc
            .sheets
            .into_iter()
            .next()
            .and_then(|s| s.properties)
            .and_then(|p| p.title)
            .filter(|t| !t.is_empty()))
    }

    async fn append_row(
        &self,
        config: &WaitlistConfig,
        sheet: &str,
        row: &SheetRow,
    ) -> Result<(), StoreError> {
        let token = self.bearer(config).await?;
        let range = format!("{sheet}!A:D:append");
        let mut url = self.spreadsheet_url(config)?;
        url.path_segments_mut()
            .map_err(|_| StoreError::new(None, "bad api base"))?
            .extend(["values", range.as_str()]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");
        let resp = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "values": [row.values()] }))
            .send()
            .await
            .map_err(|e| StoreError::new(None, e.to_string()))?;
        check(resp).await?;
        log::info!("[sheets] appended row to {sheet}");
        Ok(())
    }
}
