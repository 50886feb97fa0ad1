//! Console-wide constants.

pub mod routes;
