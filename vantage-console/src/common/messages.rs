//! Domain message routing and update results.

use crate::domains::credential;
use crate::domains::sources;

/// Result of a domain update operation.
///
/// Contains follow-up messages for the dispatcher and events to be
/// broadcast to the hosting shell.
#[derive(Debug, Default)]
pub struct DomainUpdate {
    /// Messages to be processed by the domain or other domains
    pub messages: Vec<DomainMessage>,
    /// Events to be broadcast to the hosting shell
    pub events: Vec<DomainEvent>,
}

impl DomainUpdate {
    /// Create an empty update (no messages or events)
    pub fn none() -> Self {
        Self::default()
    }

    /// Create an update with a single message
    pub fn message(msg: impl Into<DomainMessage>) -> Self {
        Self {
            messages: vec![msg.into()],
            events: Vec::new(),
        }
    }

    /// Create an update with a single event
    pub fn event(event: DomainEvent) -> Self {
        Self {
            messages: Vec::new(),
            events: vec![event],
        }
    }

    /// Add a message to this update
    pub fn add_message(mut self, msg: impl Into<DomainMessage>) -> Self {
        self.messages.push(msg.into());
        self
    }

    /// Add an event to this update
    pub fn add_event(mut self, event: DomainEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Check if this update contains any messages or events
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.events.is_empty()
    }
}

/// The main domain message router
#[derive(Debug, Clone)]
pub enum DomainMessage {
    /// Credential-change domain
    Credential(credential::messages::Message),

    /// Rule-source section domain
    Sources(sources::messages::Message),
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Credential(msg) => msg.name(),
            Self::Sources(msg) => msg.name(),
        }
    }
}

impl From<credential::messages::Message> for DomainMessage {
    fn from(msg: credential::messages::Message) -> Self {
        DomainMessage::Credential(msg)
    }
}

impl From<sources::messages::Message> for DomainMessage {
    fn from(msg: sources::messages::Message) -> Self {
        DomainMessage::Sources(msg)
    }
}

/// Events broadcast to the hosting shell.
///
/// These are fire-and-forget: the core never awaits or inspects what the
/// shell does with them.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// Credential-change outcome
    Credential(credential::messages::CredentialEvent),
}
