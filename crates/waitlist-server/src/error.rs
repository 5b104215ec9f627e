use crate::config::{ConfigError, WaitlistConfig};
use crate::sheets::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use landing_core::{WaitlistFailure, MSG_MISSING_FIELDS};

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,
    #[error("Server configuration error: {0}. Set GOOGLE_SERVICE_ACCOUNT_KEY and GOOGLE_SHEET_ID before deploying.")]
    Config(#[from] ConfigError),
    #[error("Permission denied. Please make sure the Google Sheet is shared with the service account email: {service_account_email} with Editor permissions.")]
    PermissionDenied {
        service_account_email: String,
        spreadsheet_id: String,
        details: String,
    },
    #[error("Google Sheet not found. Please check that GOOGLE_SHEET_ID is correct.")]
    NotFound,
    #[error("Google Sheets error: {0}. Please check the server logs for more details.")]
    Upstream(String),
    #[error("Failed to add to waitlist due to an unexpected error. Please check the server configuration and try again.")]
    Unexpected,
}

impl WaitlistError {
    /// Map a failed append onto the response the client sees.
    pub fn from_store(err: StoreError, config: &WaitlistConfig) -> Self {
        match err.status {
            Some(403) => WaitlistError::PermissionDenied {
                service_account_email: config.credentials.client_email.clone(),
                spreadsheet_id: config.sheet_id.clone(),
                details: if err.message.is_empty() {
                    "Unknown permission error".to_string()
                } else {
                    err.message
                },
            },
            Some(404) => WaitlistError::NotFound,
            _ if !err.message.is_empty() => WaitlistError::Upstream(err.message),
            _ => WaitlistError::Unexpected,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WaitlistError::MissingFields => StatusCode::BAD_REQUEST,
            WaitlistError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            WaitlistError::NotFound => StatusCode::NOT_FOUND,
            WaitlistError::Config(_) | WaitlistError::Upstream(_) | WaitlistError::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> WaitlistFailure {
        let mut body = WaitlistFailure::message(self.to_string());
        if let WaitlistError::PermissionDenied {
            service_account_email,
            spreadsheet_id,
            details,
        } = self
        {
            body.details = Some(details.clone());
            body.service_account_email = Some(service_account_email.clone());
            body.spreadsheet_id = Some(spreadsheet_id.clone());
        }
        body
    }
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
