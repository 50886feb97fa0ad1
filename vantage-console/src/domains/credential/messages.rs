//! Credential-change messages and events

use crate::security::SecureCredential;

/// Messages for the credential-change form
#[derive(Debug, Clone)]
pub enum Message {
    /// Update the new-secret field
    UpdateNewValue(String),
    /// Update the confirmation field
    UpdateConfirmValue(String),
    /// New-secret field gained focus
    NewValueFocused,
    /// New-secret field lost focus
    NewValueBlurred,
    /// Submit the form
    Submit,
    /// Skip the change (only honored when the caller opted in)
    Skip,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateNewValue(_) => "Credential::UpdateNewValue",
            Self::UpdateConfirmValue(_) => "Credential::UpdateConfirmValue",
            Self::NewValueFocused => "Credential::NewValueFocused",
            Self::NewValueBlurred => "Credential::NewValueBlurred",
            Self::Submit => "Credential::Submit",
            Self::Skip => "Credential::Skip",
        }
    }
}

/// Outcomes handed to the shell.
#[derive(Debug, Clone)]
pub enum CredentialEvent {
    /// Validation passed; the carried secret is already valid.
    Submitted(SecureCredential),
    /// The user skipped the change. No validation was performed.
    Skipped,
}
