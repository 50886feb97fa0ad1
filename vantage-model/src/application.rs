/// Application flavor a rule source speaks.
///
/// Sections use this for icon selection; affordance derivation only reads
/// the declared type string from the capability registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceApplication {
    Prometheus,
    Loki,
    Mimir,
    Builtin,
}

impl SourceApplication {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceApplication::Prometheus => "prometheus",
            SourceApplication::Loki => "loki",
            SourceApplication::Mimir => "mimir",
            SourceApplication::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for SourceApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
