//! Waitlist wire types shared by the form and the server, plus the form's
//! submission state.

use serde::{Deserialize, Serialize};

pub const WAITLIST_ENDPOINT: &str = "/api/waitlist";

pub const MSG_MISSING_FIELDS: &str = "Name and email are required";
pub const MSG_ADDED: &str = "Successfully added to waitlist";
pub const MSG_FORM_SUCCESS: &str = "Successfully added to waitlist!";
pub const MSG_FORM_FALLBACK: &str = "Failed to submit. Please try again.";
pub const MSG_FORM_NETWORK: &str = "Network error. Please check your connection and try again.";

/// `POST /api/waitlist` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub agree_to_emails: Option<bool>,
}

/// A request that passed input validation, with fields trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistSignup {
    pub name: String,
    pub email: String,
    pub agree_to_emails: bool,
}

impl WaitlistRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, agree_to_emails: bool) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            agree_to_emails: Some(agree_to_emails),
        }
    }

    /// Trimmed signup, or `None` when name or email is missing or blank.
    pub fn validate(&self) -> Option<WaitlistSignup> {
        let name = self.name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let email = self.email.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(WaitlistSignup {
            name: name.to_string(),
            email: email.to_string(),
            agree_to_emails: self.agree_to_emails.unwrap_or(false),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaitlistSuccess {
    pub success: bool,
    pub message: String,
}

impl WaitlistSuccess {
    pub fn added() -> Self {
        Self {
            success: true,
            message: MSG_ADDED.to_string(),
        }
    }
}

/// Error body of every non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
}

impl WaitlistFailure {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

/// How a submission round trip ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Non-2xx; carries the server's `error` string when it sent one.
    Rejected(Option<String>),
    NetworkFailure,
}

/// Client-side form state. Only one submission may be in flight.
#[derive(Clone, Debug)]
pub struct WaitlistForm {
    status: SubmitStatus,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            status: SubmitStatus::Idle,
        }
    }
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// `false` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Returns `true` when the form fields should be reset.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> bool {
        let (status, reset) = match outcome {
            SubmitOutcome::Accepted => (SubmitStatus::Success(MSG_FORM_SUCCESS.to_string()), true),
            SubmitOutcome::Rejected(message) => (
                SubmitStatus::Error(
                    message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| MSG_FORM_FALLBACK.to_string()),
                ),
                false,
            ),
            SubmitOutcome::NetworkFailure => {
                (SubmitStatus::Error(MSG_FORM_NETWORK.to_string()), false)
            }
        };
        self.status = status;
        reset
    }

    /// Editing a field clears a finished submission's message.
    pub fn field_edited(&mut self) {
        if matches!(self.status, SubmitStatus::Success(_) | SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}
