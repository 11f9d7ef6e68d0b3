//! Wealthfolio Demo Core - synthetic portfolio data and derived metrics.
//!
//! This crate generates fake asset tables and value histories from an
//! injected random source, computes display metrics over them, and exposes
//! the named dashboard commands that turn a session snapshot into
//! render-ready views. It has no I/O; front ends own the session.

pub mod assets;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod history;
pub mod metrics;
pub mod session;
pub mod settings;
pub mod views;

pub use commands::{execute, DashboardCommand};
pub use session::{DashboardSession, PortfolioSnapshot};
pub use settings::DemoSettings;
pub use views::DashboardView;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
