//! Derived rendering data for a rule-source section
//!
//! Affordances are a pure function of (identifier, collaborator state).
//! They are recomputed on every render so a registry or role refresh is
//! reflected immediately; caching here would go stale.

use super::permissions::RoleLookup;
use super::registry::SourceCapabilityRegistry;
use super::state::SourceSectionState;
use crate::constants::routes;
use vantage_model::{RuleSourceIdentifier, SourceApplication};

/// The standard icon/title/actions row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRow {
    pub name: String,
    pub application: Option<SourceApplication>,
    pub description: Option<String>,
    /// Import-rules link target; absent when ineligible (never disabled)
    pub import_href: Option<String>,
    /// Configure link target; absent when not permitted (never disabled)
    pub configure_href: Option<String>,
    /// Collapse toggle points right when collapsed, down when expanded
    pub collapsed: bool,
}

/// What the section should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionViewModel {
    /// Loading indicator; independent of the loader slot
    pub loading: bool,
    /// Standard title row, or `None` when a custom loader replaces it
    pub title_row: Option<TitleRow>,
    /// Children render at all; collapsed sections unmount them entirely
    pub show_children: bool,
}

impl SectionViewModel {
    /// Derive the view from current state and collaborators. Pure; call
    /// once per render.
    pub fn derive(
        state: &SourceSectionState,
        registry: &dyn SourceCapabilityRegistry,
        roles: &dyn RoleLookup,
    ) -> Self {
        let title_row = (!state.has_custom_loader).then(|| TitleRow {
            name: state.name.clone(),
            application: state.application,
            description: state.description.clone(),
            import_href: import_href(&state.identifier, registry),
            configure_href: configure_href(&state.identifier, roles),
            collapsed: state.collapsed,
        });

        Self {
            loading: state.is_loading,
            title_row,
            show_children: !state.collapsed,
        }
    }
}

/// Import is offered only for external sources the registry confirms as
/// ruler-capable with an importable declared type.
fn import_href(
    identifier: &RuleSourceIdentifier,
    registry: &dyn SourceCapabilityRegistry,
) -> Option<String> {
    let uid = identifier.uid()?;
    let source = registry.ruler_source(uid)?;
    source
        .supports_import()
        .then(|| routes::alerting::import_rules_url(uid))
}

/// Builtin goes to the admin page, admins only; external sources always get
/// their edit page (the destination enforces its own permissions).
fn configure_href(
    identifier: &RuleSourceIdentifier,
    roles: &dyn RoleLookup,
) -> Option<String> {
    match identifier {
        RuleSourceIdentifier::Builtin => roles
            .is_admin()
            .then(|| routes::alerting::ADMIN.to_string()),
        RuleSourceIdentifier::Datasource(uid) => {
            Some(routes::connections::edit_datasource_url(uid))
        }
    }
}
