use crate::error::ModelError;

/// Strongly typed UID for an externally registered rule source.
///
/// UIDs are opaque, server-assigned strings. The newtype keeps them from
/// mixing with other string-shaped values at API boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SourceUid(pub String);

impl SourceUid {
    pub fn new(uid: impl Into<String>) -> Result<Self, ModelError> {
        let uid = uid.into();
        if uid.is_empty() {
            return Err(ModelError::InvalidIdentifier(
                "source uid cannot be empty".to_string(),
            ));
        }
        Ok(SourceUid(uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a section's backing rule source.
///
/// The platform's own managed source is a dedicated variant rather than a
/// magic UID so it can never collide with an externally registered source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleSourceIdentifier {
    /// The platform-managed rule source.
    Builtin,
    /// An externally registered data source.
    Datasource(SourceUid),
}

impl RuleSourceIdentifier {
    pub fn datasource(uid: impl Into<String>) -> Result<Self, ModelError> {
        Ok(RuleSourceIdentifier::Datasource(SourceUid::new(uid)?))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, RuleSourceIdentifier::Builtin)
    }

    /// The UID when this identifies an external source.
    pub fn uid(&self) -> Option<&SourceUid> {
        match self {
            RuleSourceIdentifier::Builtin => None,
            RuleSourceIdentifier::Datasource(uid) => Some(uid),
        }
    }
}

impl std::fmt::Display for RuleSourceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSourceIdentifier::Builtin => write!(f, "builtin"),
            RuleSourceIdentifier::Datasource(uid) => write!(f, "{uid}"),
        }
    }
}
