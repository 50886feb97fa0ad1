//! Rule-source section update handlers

use super::messages::Message;
use super::state::SourceSectionState;
use crate::common::messages::DomainUpdate;

/// Main message handler for a rule-source section
pub fn handle_message(
    state: &mut SourceSectionState,
    message: Message,
) -> DomainUpdate {
    log::debug!("handling {}", message.name());
    match message {
        Message::ToggleCollapsed => handle_toggle_collapsed(state),
    }
}

/// Symmetric toggle; the only way a section changes collapse state.
fn handle_toggle_collapsed(state: &mut SourceSectionState) -> DomainUpdate {
    state.collapsed = !state.collapsed;
    DomainUpdate::none()
}
