use crate::config::RawConfig;
use crate::error::WaitlistError;
use crate::sheets::{SheetRow, SheetStore};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDateTime;
use landing_core::{WaitlistRequest, WaitlistSuccess, WAITLIST_ENDPOINT};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_SHEET_TITLE: &str = "Sheet1";

/// `YYYY-MM-DD HH:MM:SS`, zero padded.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Submission handler state: configuration plus the spreadsheet backend.
pub struct Waitlist<S> {
    config: RawConfig,
    store: S,
}

impl<S: SheetStore> Waitlist<S> {
    pub fn new(config: RawConfig, store: S) -> Self {
        Self { config, store }
    }

    pub async fn submit(&self, request: WaitlistRequest) -> Result<WaitlistSuccess, WaitlistError> {
        let signup = request.validate().ok_or(WaitlistError::MissingFields)?;
        let config = self.config.validate().map_err(|e| {
            log::error!("[waitlist] configuration error: {e}");
            WaitlistError::Config(e)
        })?;
        log::info!(
            "[waitlist] authenticating as {}",
            config.credentials.client_email
        );

        let timestamp = format_timestamp(chrono::Local::now().naive_local());

        let sheet = match self.store.first_sheet_title(&config).await {
            Ok(Some(title)) => title,
            Ok(None) => {
                log::warn!("[waitlist] spreadsheet has no sheets, using {DEFAULT_SHEET_TITLE}");
                DEFAULT_SHEET_TITLE.to_string()
            }
            Err(e) => {
                log::warn!("[waitlist] could not fetch sheet metadata, using {DEFAULT_SHEET_TITLE}: {e}");
                DEFAULT_SHEET_TITLE.to_string()
            }
        };

        let row = SheetRow {
            timestamp,
            name: signup.name,
            email: signup.email,
            agree_to_emails: signup.agree_to_emails,
        };
        self.store
            .append_row(&config, &sheet, &row)
            .await
            .map_err(|e| {
                log::error!("[waitlist] sheets append failed: {e}");
                WaitlistError::from_store(e, &config)
            })?;
        Ok(WaitlistSuccess::added())
    }
}

/// Read a submission body field by field. Name and email count only when
/// they are strings; consent follows JavaScript truthiness, so `"yes"` or `1`
/// opt in. A body that is not a JSON object yields an empty request.
pub fn parse_request(body: &[u8]) -> WaitlistRequest {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
    WaitlistRequest {
        name: text("name"),
        email: text("email"),
        agree_to_emails: Some(value.get("agreeToEmails").is_some_and(truthy)),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

async fn submit_waitlist<S: SheetStore>(
    State(waitlist): State<Arc<Waitlist<S>>>,
    body: Bytes,
) -> Result<Json<WaitlistSuccess>, WaitlistError> {
    waitlist.submit(parse_request(&body)).await.map(Json)
}

pub fn router<S: SheetStore>(waitlist: Arc<Waitlist<S>>) -> Router {
    Router::new()
        .route(WAITLIST_ENDPOINT, post(submit_waitlist::<S>))
        .with_state(waitlist)
}
