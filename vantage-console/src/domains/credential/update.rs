//! Credential-change update handlers

use super::messages::{CredentialEvent, Message};
use super::state::CredentialChangeState;
use crate::common::messages::{DomainEvent, DomainUpdate};
use crate::security::{SecretPolicy, SecureCredential};

/// Main message handler for the credential-change form
pub fn handle_message(
    state: &mut CredentialChangeState,
    message: Message,
    policy: &SecretPolicy,
) -> DomainUpdate {
    log::debug!("handling {}", message.name());
    match message {
        Message::UpdateNewValue(value) => handle_update_new_value(state, value),
        Message::UpdateConfirmValue(value) => {
            handle_update_confirm_value(state, value)
        }
        Message::NewValueFocused => handle_new_value_focused(state),
        Message::NewValueBlurred => handle_new_value_blurred(state),
        Message::Submit => handle_submit(state, policy),
        Message::Skip => handle_skip(state),
    }
}

fn handle_update_new_value(
    state: &mut CredentialChangeState,
    value: String,
) -> DomainUpdate {
    state.new_value = SecureCredential::from(value);
    DomainUpdate::none()
}

fn handle_update_confirm_value(
    state: &mut CredentialChangeState,
    value: String,
) -> DomainUpdate {
    state.confirm_value = SecureCredential::from(value);
    DomainUpdate::none()
}

/// First focus-in reveals the policy checklist; the flag never reverts.
fn handle_new_value_focused(state: &mut CredentialChangeState) -> DomainUpdate {
    state.validation_visible = true;
    DomainUpdate::none()
}

/// First focus-out marks the field as touched; the flag never reverts.
fn handle_new_value_blurred(state: &mut CredentialChangeState) -> DomainUpdate {
    state.touched = true;
    DomainUpdate::none()
}

/// Validate and either emit [`CredentialEvent::Submitted`] or leave the
/// outstanding errors for the view model to surface. The event only ever
/// carries an already-valid secret.
fn handle_submit(
    state: &mut CredentialChangeState,
    policy: &SecretPolicy,
) -> DomainUpdate {
    state.submit_attempted = true;

    if !state.submission_valid(policy) {
        log::debug!(
            "credential change rejected: {} policy failure(s)",
            policy.failures(state.new_value.as_str()).len()
        );
        return DomainUpdate::none();
    }

    let secret = state.new_value.clone();
    state.clear_sensitive_data();
    log::info!("credential change submitted");
    DomainUpdate::event(DomainEvent::Credential(CredentialEvent::Submitted(
        secret,
    )))
}

/// Skip bypasses validation entirely; it only checks the caller opt-in.
fn handle_skip(state: &mut CredentialChangeState) -> DomainUpdate {
    if !state.allow_skip {
        log::warn!("skip requested but the caller did not opt in");
        return DomainUpdate::none();
    }
    log::info!("credential change skipped");
    DomainUpdate::event(DomainEvent::Credential(CredentialEvent::Skipped))
}
