use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthfolio_demo_core::DashboardSession;

use crate::config::Config;

/// Installs the global subscriber. Logs go to stderr; stdout carries views.
pub fn init_tracing() {
    let log_format = std::env::var("WF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_session(config: &Config) -> anyhow::Result<DashboardSession> {
    let session = DashboardSession::start(config.settings.clone())?;
    tracing::info!(
        assets = config.settings.asset_count,
        days = config.settings.history_days,
        seed = session.seed(),
        "Dashboard session ready"
    );
    Ok(session)
}
