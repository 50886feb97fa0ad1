//! Affordance-derivation and collapse tests for rule-source sections.

use vantage_console::domains::sources::{
    Message, RoleLookup, RulerSource, SectionViewModel,
    SourceCapabilityRegistry, SourceSectionState, update,
};
use vantage_model::{RuleSourceIdentifier, SourceApplication, SourceUid};

/// Registry stub backed by a fixed list, like the fetched "sources with
/// ruler support" set the shell keeps refreshed.
struct StaticRegistry {
    sources: Vec<RulerSource>,
}

impl StaticRegistry {
    fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    fn with(uid: &str, source_type: &str) -> Self {
        Self {
            sources: vec![RulerSource {
                uid: SourceUid::new(uid).unwrap(),
                source_type: source_type.to_string(),
            }],
        }
    }
}

impl SourceCapabilityRegistry for StaticRegistry {
    fn ruler_source(&self, uid: &SourceUid) -> Option<RulerSource> {
        self.sources.iter().find(|s| &s.uid == uid).cloned()
    }
}

struct Admin;
impl RoleLookup for Admin {
    fn is_admin(&self) -> bool {
        true
    }
}

struct Viewer;
impl RoleLookup for Viewer {
    fn is_admin(&self) -> bool {
        false
    }
}

#[test]
fn builtin_without_admin_renders_no_configure_affordance() {
    let state = SourceSectionState::new(RuleSourceIdentifier::Builtin, "Vantage")
        .with_application(SourceApplication::Builtin);

    let view = SectionViewModel::derive(&state, &StaticRegistry::empty(), &Viewer);
    let row = view.title_row.expect("standard title row");
    // Absent, not disabled
    assert_eq!(row.configure_href, None);
    assert_eq!(row.import_href, None);
}

#[test]
fn builtin_with_admin_gets_the_admin_path() {
    let state =
        SourceSectionState::new(RuleSourceIdentifier::Builtin, "Vantage");

    let view = SectionViewModel::derive(&state, &StaticRegistry::empty(), &Admin);
    assert_eq!(
        view.title_row.unwrap().configure_href.as_deref(),
        Some("/alerting/admin")
    );
}

#[test]
fn importable_source_links_with_its_uid() {
    let state = SourceSectionState::new(
        RuleSourceIdentifier::datasource("ds-123").unwrap(),
        "Prometheus",
    )
    .with_application(SourceApplication::Prometheus);

    let registry = StaticRegistry::with("ds-123", "prometheus");
    let view = SectionViewModel::derive(&state, &registry, &Viewer);
    let row = view.title_row.unwrap();

    let import = row.import_href.expect("import link");
    assert!(import.contains("datasourceUid=ds-123"));
    assert_eq!(
        row.configure_href.as_deref(),
        Some("/connections/datasources/edit/ds-123")
    );
}

#[test]
fn ruler_support_for_a_different_source_does_not_leak() {
    let state = SourceSectionState::new(
        RuleSourceIdentifier::datasource("ds-123").unwrap(),
        "Prometheus",
    );

    let registry = StaticRegistry::with("ds-456", "prometheus");
    let view = SectionViewModel::derive(&state, &registry, &Viewer);
    assert_eq!(view.title_row.unwrap().import_href, None);
}

#[test]
fn affordances_track_registry_updates_between_renders() {
    let state = SourceSectionState::new(
        RuleSourceIdentifier::datasource("ds-123").unwrap(),
        "Prometheus",
    );

    let view =
        SectionViewModel::derive(&state, &StaticRegistry::empty(), &Viewer);
    assert_eq!(view.title_row.unwrap().import_href, None);

    // Same state, refreshed collaborator data: new derivation reflects it
    let registry = StaticRegistry::with("ds-123", "prometheus");
    let view = SectionViewModel::derive(&state, &registry, &Viewer);
    assert!(view.title_row.unwrap().import_href.is_some());
}

#[test]
fn collapse_round_trip_restores_children() {
    let registry = StaticRegistry::empty();
    let mut state = SourceSectionState::new(
        RuleSourceIdentifier::datasource("ds-1").unwrap(),
        "Loki",
    );

    let before = SectionViewModel::derive(&state, &registry, &Viewer);
    assert!(before.show_children);

    update::handle_message(&mut state, Message::ToggleCollapsed);
    let collapsed = SectionViewModel::derive(&state, &registry, &Viewer);
    assert!(!collapsed.show_children);
    assert!(collapsed.title_row.as_ref().unwrap().collapsed);

    update::handle_message(&mut state, Message::ToggleCollapsed);
    let after = SectionViewModel::derive(&state, &registry, &Viewer);
    // Idempotent round trip: the derived view matches the original exactly
    assert_eq!(before, after);
}

#[test]
fn loader_slot_and_loading_indicator_are_independent() {
    let base = SourceSectionState::new(
        RuleSourceIdentifier::datasource("ds-1").unwrap(),
        "Loki",
    );
    let registry = StaticRegistry::empty();

    // Loading with the standard row
    let loading = base.clone().with_loading(true);
    let view = SectionViewModel::derive(&loading, &registry, &Viewer);
    assert!(view.loading);
    assert!(view.title_row.is_some());

    // Custom loader replaces the row entirely, loading still reported
    let custom = base.with_custom_loader().with_loading(true);
    let view = SectionViewModel::derive(&custom, &registry, &Viewer);
    assert!(view.loading);
    assert!(view.title_row.is_none());
}
