//! Builds views from the current session snapshot.

use crate::assets::AssetDetails;
use crate::constants::HISTORY_LINE_COLOR;
use crate::metrics;
use crate::session::PortfolioSnapshot;

use super::{
    AllocationView, DetailedAnalysisView, HistoryView, LineChart, OverviewView, PieChart,
    PieSlice, RiskReturnRow, RiskReturnView, ScatterChart, ScatterPoint,
};

fn asset_details(snapshot: &PortfolioSnapshot) -> Vec<AssetDetails> {
    snapshot.assets.iter().map(AssetDetails::from).collect()
}

impl OverviewView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            title: "Portfolio Overview".to_string(),
            assets: asset_details(snapshot),
            metrics: metrics::portfolio_overview(&snapshot.assets),
            generated_at: snapshot.generated_at,
        }
    }
}

impl AllocationView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        let slices = snapshot
            .assets
            .iter()
            .map(|row| PieSlice {
                label: row.name,
                value: row.value,
                color: row.color.clone(),
            })
            .collect();

        Self {
            title: "Asset Allocation Analysis".to_string(),
            entries: metrics::allocation(&snapshot.assets),
            chart: PieChart {
                title: "Asset Allocation Distribution".to_string(),
                slices,
            },
        }
    }
}

impl HistoryView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            title: "Historical Performance Analysis".to_string(),
            points: snapshot.history.clone(),
            chart: LineChart {
                title: "Historical Portfolio Value".to_string(),
                color: HISTORY_LINE_COLOR.to_string(),
                points: snapshot.history.clone(),
            },
        }
    }
}

impl RiskReturnView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        let rows = snapshot
            .assets
            .iter()
            .map(|row| RiskReturnRow {
                asset: row.name,
                risk_pct: row.risk_pct,
                return_pct: row.return_pct,
                value: row.value,
            })
            .collect();
        let points = snapshot
            .assets
            .iter()
            .map(|row| ScatterPoint {
                label: row.name,
                x: row.risk_pct,
                y: row.return_pct,
                size: row.value,
                color: row.color.clone(),
            })
            .collect();

        Self {
            title: "Risk vs Return Analysis".to_string(),
            rows,
            chart: ScatterChart {
                title: "Risk vs Return by Asset".to_string(),
                x_label: "Risk (%)".to_string(),
                y_label: "Return (%)".to_string(),
                points,
            },
        }
    }
}

impl DetailedAnalysisView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            title: "Detailed Asset Analysis".to_string(),
            assets: asset_details(snapshot),
            statistics: metrics::summary_statistics(&snapshot.assets),
        }
    }
}
