//! Core data model definitions shared across Vantage crates.

pub mod application;
pub mod error;
pub mod ids;

// Intentionally curated re-exports for downstream consumers.
pub use application::SourceApplication;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{RuleSourceIdentifier, SourceUid};
