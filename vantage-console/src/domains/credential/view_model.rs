//! Derived rendering data for the credential-change form
//!
//! Recomputed on every render from the raw state and the policy; nothing in
//! here is cached, so edits to either field re-derive every error and label
//! immediately (no extra blur needed after changing the new value).

use super::state::CredentialChangeState;
use crate::security::{self, RuleStatus, SecretPolicy, StrengthBand};

pub const ERR_NEW_VALUE_REQUIRED: &str = "New value is required";
pub const ERR_CONFIRM_REQUIRED: &str = "Confirmation is required";
pub const ERR_VALUES_MUST_MATCH: &str = "Values must match";

/// What the form should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialFormView {
    /// Error under the new-secret field, if one should be visible
    pub new_value_error: Option<String>,
    /// Error under the confirmation field, if one should be visible
    pub confirm_error: Option<String>,
    /// Per-rule pass/fail checklist; empty until the field has been focused
    pub policy_labels: Vec<RuleStatus>,
    /// Strength meter (score 0-100 and band); hidden while the field is empty
    pub strength: Option<(u32, StrengthBand)>,
    /// Submit would succeed with the current values
    pub can_submit: bool,
    /// Render the skip affordance
    pub show_skip: bool,
    /// Render the default-secret warning banner
    pub show_default_secret_warning: bool,
}

impl CredentialFormView {
    /// Derive the view from current state. Pure; call once per render.
    pub fn derive(
        state: &CredentialChangeState,
        policy: &SecretPolicy,
    ) -> Self {
        let new_value = state.new_value.as_str();
        let confirm = state.confirm_value.as_str();

        // The required error waits for the field's first blur or a submit
        // attempt; a submit attempt reveals everything outstanding.
        let field_errors_visible = state.touched || state.submit_attempted;

        let new_value_error = (field_errors_visible && new_value.is_empty())
            .then(|| ERR_NEW_VALUE_REQUIRED.to_string());

        // A non-empty, mismatched confirmation is flagged as soon as it
        // diverges from the current new value; the empty-confirmation error
        // waits for a submit attempt.
        let confirm_error = if !confirm.is_empty() && confirm != new_value {
            Some(ERR_VALUES_MUST_MATCH.to_string())
        } else if state.submit_attempted && confirm.is_empty() {
            Some(ERR_CONFIRM_REQUIRED.to_string())
        } else {
            None
        };

        // Focus-in reveals the checklist early; a submit attempt reveals it
        // regardless, so rule failures are never silently swallowed.
        let policy_labels = if state.validation_visible || state.submit_attempted {
            policy.evaluate(new_value)
        } else {
            Vec::new()
        };

        let strength = (!new_value.is_empty()).then(|| {
            let score = security::policy::strength_score(new_value);
            (score, StrengthBand::from_score(score))
        });

        Self {
            new_value_error,
            confirm_error,
            policy_labels,
            strength,
            can_submit: state.submission_valid(policy),
            show_skip: state.allow_skip,
            show_default_secret_warning: state.show_default_secret_warning,
        }
    }

    /// Labels of the currently failing policy rules.
    pub fn failing_labels(&self) -> Vec<&str> {
        self.policy_labels
            .iter()
            .filter(|status| !status.passed)
            .map(|status| status.label.as_str())
            .collect()
    }
}
