//! Credential-change domain
//!
//! Collects a new secret twice, enforces the deployment's secret policy,
//! and hands the validated secret (or an explicit skip) to the shell as an
//! event. Nothing here touches the network or storage.

pub mod messages;
pub mod state;
pub mod update;
pub mod view_model;

pub use messages::{CredentialEvent, Message};
pub use state::CredentialChangeState;
pub use view_model::CredentialFormView;
