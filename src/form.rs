//! Form controller for the complaint portal.
//!
//! Everything in this module is a plain state machine: no DOM access and no
//! network calls. The view owns a [`ComplaintForm`] inside a signal and
//! recomputes its markup from each snapshot; the async send happens between
//! [`ComplaintForm::try_begin_submit`] and [`ComplaintForm::resolve`].

use crate::types::ComplaintRequest;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const COMPLAINT_REQUIRED: &str = "Please enter your complaint";

/// The three user-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Complaint,
}

/// Raw field values, stored verbatim as typed (no trimming, no limits).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub complaint: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Complaint => self.complaint = value,
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.complaint.clear();
    }

    pub fn to_request(&self) -> ComplaintRequest {
        ComplaintRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.complaint.clone(),
        }
    }
}

/// Per-field validation messages. A field carries a message only while it
/// is failing; the whole set is recomputed on every submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub complaint: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.complaint.is_none()
    }
}

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Check every field independently; no short-circuiting between fields.
pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if state.name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED);
    }

    let email = state.email.trim();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }

    if state.complaint.trim().is_empty() {
        errors.complaint = Some(COMPLAINT_REQUIRED);
    }

    errors
}

/// Permissive shape check: the value must contain `\S+@\S+\.\S+` somewhere.
/// Deliberately far short of RFC 5322.
fn looks_like_email(value: &str) -> bool {
    for (at, _) in value.match_indices('@') {
        let has_local_part = value[..at]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());
        if !has_local_part {
            continue;
        }
        // The run of non-whitespace after the '@' must contain a dot with
        // at least one character on each side of it.
        let after = &value[at + 1..];
        let run_end = after.find(char::is_whitespace).unwrap_or(after.len());
        let run = &after[..run_end];
        if run
            .match_indices('.')
            .any(|(dot, _)| dot > 0 && dot + 1 < run.len())
        {
            return true;
        }
    }
    false
}

/// A status in 200..=299 counts as success; everything else is an error.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error text for a completed response outside the success range. The
/// response body is not consulted.
pub fn http_error_message(status: u16, status_text: &str) -> String {
    format!("{} {}", status, status_text)
}

/// Error text for a transport failure that produced no response.
pub fn network_error_message(description: &str) -> String {
    if description.trim().is_empty() {
        "Network error".to_string()
    } else {
        description.to_string()
    }
}

/// One complaint form instance: field values, validation results and the
/// status of the current submission attempt.
#[derive(Debug, Clone, Default)]
pub struct ComplaintForm {
    pub state: FormState,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    pub error_message: String,
}

impl ComplaintForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single field with whatever the user typed.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.state.set(field, value);
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// Start a submission attempt. Returns the payload to send, or `None`
    /// when validation failed or a request is already in flight; in either
    /// case no network call may be made.
    ///
    /// On a failed validation the status is left untouched so an earlier
    /// outcome stays visible until the user gets a new one.
    pub fn try_begin_submit(&mut self) -> Option<ComplaintRequest> {
        if self.is_loading() {
            return None;
        }

        let errors = validate(&self.state);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors = ValidationErrors::default();
        self.status = SubmissionStatus::Loading;
        self.error_message.clear();
        Some(self.state.to_request())
    }

    /// Record the outcome of the request started by `try_begin_submit`.
    /// Success empties the fields for the next complaint; failure keeps
    /// them so the user can resubmit.
    pub fn resolve(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.state.clear();
            }
            Err(message) => {
                self.status = SubmissionStatus::Error;
                self.error_message = message;
            }
        }
    }
}
