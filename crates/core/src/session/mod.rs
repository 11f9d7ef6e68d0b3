//! Per-session snapshot ownership.

mod dashboard_session;
mod snapshot_model;

pub use dashboard_session::*;
pub use snapshot_model::*;

#[cfg(test)]
mod dashboard_session_tests;
