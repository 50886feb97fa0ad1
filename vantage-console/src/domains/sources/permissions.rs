//! Role lookup seam for section affordances
//!
//! Queried synchronously at render time. Only the builtin source's
//! configure link is gated here; external sources defer their permission
//! checks to the destination page.

/// Role lookup for the current user.
#[cfg_attr(test, mockall::automock)]
pub trait RoleLookup {
    /// Whether the current user holds the administrator role.
    fn is_admin(&self) -> bool;
}

/// Fallback when no session is established; grants nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl RoleLookup for NoSession {
    fn is_admin(&self) -> bool {
        false
    }
}
