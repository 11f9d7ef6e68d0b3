//! Named dashboard actions and their handlers.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::session::DashboardSession;
use crate::views::{
    AllocationView, DashboardView, DetailedAnalysisView, HistoryView, OverviewView,
    RiskReturnView,
};

/// The fixed set of actions a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardCommand {
    Refresh,
    Overview,
    Allocation,
    History,
    RiskReturn,
    Analysis,
}

impl DashboardCommand {
    pub const ALL: [DashboardCommand; 6] = [
        DashboardCommand::Refresh,
        DashboardCommand::Overview,
        DashboardCommand::Allocation,
        DashboardCommand::History,
        DashboardCommand::RiskReturn,
        DashboardCommand::Analysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardCommand::Refresh => "refresh",
            DashboardCommand::Overview => "overview",
            DashboardCommand::Allocation => "allocation",
            DashboardCommand::History => "history",
            DashboardCommand::RiskReturn => "risk-return",
            DashboardCommand::Analysis => "analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DashboardCommand::Refresh => "Refresh Data",
            DashboardCommand::Overview => "Show Portfolio Overview",
            DashboardCommand::Allocation => "Show Asset Allocation",
            DashboardCommand::History => "Show Historical Performance",
            DashboardCommand::RiskReturn => "Show Risk vs Return Analysis",
            DashboardCommand::Analysis => "Show Detailed Asset Analysis",
        }
    }

    /// Whether running the command replaces the session snapshot.
    pub fn regenerates(&self) -> bool {
        matches!(self, DashboardCommand::Refresh)
    }
}

impl fmt::Display for DashboardCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '_' || c == ' ', "-");
        match normalized.as_str() {
            "refresh" | "refresh-data" | "r" => Ok(DashboardCommand::Refresh),
            "overview" | "portfolio-overview" => Ok(DashboardCommand::Overview),
            "allocation" | "asset-allocation" => Ok(DashboardCommand::Allocation),
            "history" | "historical-performance" => Ok(DashboardCommand::History),
            "risk-return" | "risk" | "risk-vs-return" => Ok(DashboardCommand::RiskReturn),
            "analysis" | "detailed-analysis" | "details" => Ok(DashboardCommand::Analysis),
            _ => Err(Error::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Runs `command` against the session and returns the section to render.
///
/// `Refresh` replaces the snapshot and shows the overview of the new data;
/// every other command renders from the current snapshot unchanged.
pub fn execute(session: &mut DashboardSession, command: DashboardCommand) -> Result<DashboardView> {
    debug!("Executing dashboard command '{}'", command);

    let snapshot = if command.regenerates() {
        session.refresh()?
    } else {
        session.snapshot()
    };

    let view = match command {
        DashboardCommand::Refresh | DashboardCommand::Overview => {
            DashboardView::Overview(OverviewView::from_snapshot(snapshot))
        }
        DashboardCommand::Allocation => {
            DashboardView::Allocation(AllocationView::from_snapshot(snapshot))
        }
        DashboardCommand::History => DashboardView::History(HistoryView::from_snapshot(snapshot)),
        DashboardCommand::RiskReturn => {
            DashboardView::RiskReturn(RiskReturnView::from_snapshot(snapshot))
        }
        DashboardCommand::Analysis => {
            DashboardView::DetailedAnalysis(DetailedAnalysisView::from_snapshot(snapshot))
        }
    };
    Ok(view)
}
