//! Source capability registry seam
//!
//! The shell keeps this registry fresh (it is backed by a periodic fetch the
//! core does not control); the core only queries it at render time.

use vantage_model::SourceUid;

/// Declared source types eligible for rule import.
pub const SUPPORTED_IMPORT_TYPES: &[&str] = &["prometheus", "loki"];

/// A source confirmed to support rule editing, with its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulerSource {
    pub uid: SourceUid,
    pub source_type: String,
}

impl RulerSource {
    /// Whether this source's declared type is in the import allow-list.
    pub fn supports_import(&self) -> bool {
        SUPPORTED_IMPORT_TYPES.contains(&self.source_type.as_str())
    }
}

/// Capability lookup for rule sources.
///
/// A missing entry means the source has no advanced rule support; callers
/// must degrade to hidden affordances, never fail.
#[cfg_attr(test, mockall::automock)]
pub trait SourceCapabilityRegistry {
    /// Ruler-capable entry for the given source, if registered.
    fn ruler_source(&self, uid: &SourceUid) -> Option<RulerSource>;
}
