//! Rule-source section state

use vantage_model::{RuleSourceIdentifier, SourceApplication};

/// Per-instance state of one rule-source section.
///
/// `identifier` is immutable for the instance's lifetime. `collapsed` is the
/// only interactive field; everything the renderer shows beyond it comes
/// from [`super::view_model::SectionViewModel`].
#[derive(Debug, Clone)]
pub struct SourceSectionState {
    /// Backing rule source; fixed at construction
    pub identifier: RuleSourceIdentifier,
    /// Display name of the section
    pub name: String,
    /// Application flavor, for icon selection
    pub application: Option<SourceApplication>,
    /// Optional descriptive text next to the title
    pub description: Option<String>,
    /// Rules for this source are still being fetched
    pub is_loading: bool,
    /// Caller supplied a custom loader slot replacing the title row
    pub has_custom_loader: bool,
    /// Section is collapsed (children fully hidden)
    pub collapsed: bool,
}

impl SourceSectionState {
    /// New section, expanded, with no extras.
    pub fn new(
        identifier: RuleSourceIdentifier,
        name: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            application: None,
            description: None,
            is_loading: false,
            has_custom_loader: false,
            collapsed: false,
        }
    }

    pub fn with_application(mut self, application: SourceApplication) -> Self {
        self.application = Some(application);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.is_loading = loading;
        self
    }

    pub fn with_custom_loader(mut self) -> Self {
        self.has_custom_loader = true;
        self
    }
}
