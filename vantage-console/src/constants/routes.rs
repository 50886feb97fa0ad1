//! Navigation route constants for the Vantage console
//!
//! The core never navigates itself; it hands these targets to the shell
//! as part of derived view models.

use vantage_model::SourceUid;

/// Alerting routes
pub mod alerting {
    use super::SourceUid;

    /// Configuration page for the platform-managed rule source (admin only)
    pub const ADMIN: &str = "/alerting/admin";

    /// Import page for datasource-managed rules
    pub const IMPORT_RULES: &str = "/alerting/import-datasource-managed-rules";

    /// Import page target for a specific source
    pub fn import_rules_url(uid: &SourceUid) -> String {
        format!("{IMPORT_RULES}?datasourceUid={uid}")
    }
}

/// Connection management routes
pub mod connections {
    use super::SourceUid;

    /// Base path for data source edit pages
    pub const DATASOURCE_EDIT: &str = "/connections/datasources/edit";

    /// Edit page target for a specific source
    pub fn edit_datasource_url(uid: &SourceUid) -> String {
        format!("{DATASOURCE_EDIT}/{uid}")
    }
}
