//! Rule-source section messages

/// Messages for a rule-source section
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle the section between expanded and collapsed
    ToggleCollapsed,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleCollapsed => "Sources::ToggleCollapsed",
        }
    }
}
