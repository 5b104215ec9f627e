//! Spreadsheet backend used by the waitlist handler.

mod google;
mod token;

pub use google::GoogleSheets;
pub use token::{fetch_access_token, SHEETS_SCOPE};

use crate::config::WaitlistConfig;
use std::future::Future;

/// One waitlist row, in column order A..D.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetRow {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub agree_to_emails: bool,
}

impl SheetRow {
    pub fn values(&self) -> [String; 4] {
        [
            self.timestamp.clone(),
            self.name.clone(),
            self.email.clone(),
            if self.agree_to_emails { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Failure reported by the backend. `status` is the upstream HTTP status when
/// there was one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("sheets request failed (status {status:?}): {message}")]
pub struct StoreError {
    pub status: Option<u16>,
    pub message: String,
}

impl StoreError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

pub trait SheetStore: Send + Sync + 'static {
    /// Title of the spreadsheet's first sheet, if it has any.
    fn first_sheet_title(
        &self,
        config: &WaitlistConfig,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Append `row` below the last row of `<sheet>!A:D`.
    fn append_row(
        &self,
        config: &WaitlistConfig,
        sheet: &str,
        row: &SheetRow,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
