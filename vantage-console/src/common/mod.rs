//! Shared plumbing used by every domain.

pub mod messages;
