//! Client-side interaction core for the Vantage monitoring console.
//!
//! This crate owns the state and decision logic for two console flows: the
//! credential-change form and the collapsible rule-source section. Rendering,
//! routing, and network fetches live elsewhere; the core exchanges plain
//! messages and view models with whatever shell hosts it.

pub mod common;
pub mod constants;
pub mod domains;
pub mod security;
