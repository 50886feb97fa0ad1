//! Interaction domains, one module per console flow.

pub mod credential;
pub mod sources;
