//! Credential-change form state

use crate::security::{SecretPolicy, SecureCredential};

/// Per-instance state of the change-secret form.
///
/// `touched`, `validation_visible`, and `submit_attempted` are monotonic:
/// set to true once, never reset within the instance's lifetime. Everything
/// a renderer needs beyond these raw fields is derived per render by
/// [`super::view_model::CredentialFormView`].
#[derive(Debug, Clone, Default)]
pub struct CredentialChangeState {
    /// Raw new-secret field contents
    pub new_value: SecureCredential,
    /// Raw confirmation field contents
    pub confirm_value: SecureCredential,
    /// New-secret field has lost focus at least once
    pub touched: bool,
    /// New-secret field has gained focus at least once
    pub validation_visible: bool,
    /// Submit has been attempted at least once
    pub submit_attempted: bool,
    /// Caller opted in to the skip affordance
    pub allow_skip: bool,
    /// Warn that the account still uses the default secret
    pub show_default_secret_warning: bool,
}

impl CredentialChangeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the skip affordance.
    pub fn with_skip_allowed(mut self) -> Self {
        self.allow_skip = true;
        self
    }

    /// Show the default-secret warning banner.
    pub fn with_default_secret_warning(mut self) -> Self {
        self.show_default_secret_warning = true;
        self
    }

    /// Whether the current field values clear every submission gate:
    /// non-empty new value, policy satisfied, non-empty matching
    /// confirmation.
    pub fn submission_valid(&self, policy: &SecretPolicy) -> bool {
        !self.new_value.is_empty()
            && policy.is_satisfied(self.new_value.as_str())
            && !self.confirm_value.is_empty()
            && self.confirm_value == self.new_value
    }

    /// Zero both fields. Called after a successful submission so the
    /// plaintext does not outlive the flow.
    pub fn clear_sensitive_data(&mut self) {
        self.new_value = SecureCredential::default();
        self.confirm_value = SecureCredential::default();
    }
}
