//! Rule-source section domain
//!
//! A named, collapsible group of alert rules backed by either the platform's
//! own rule source or an external data source. Which action links render is
//! derived fresh on every render from the capability registry and the
//! current user's role, never cached.

pub mod messages;
pub mod permissions;
pub mod registry;
pub mod state;
pub mod update;
pub mod view_model;

pub use messages::Message;
pub use permissions::RoleLookup;
pub use registry::{RulerSource, SourceCapabilityRegistry};
pub use state::SourceSectionState;
pub use view_model::{SectionViewModel, TitleRow};
