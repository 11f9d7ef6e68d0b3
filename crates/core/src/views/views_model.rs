//! Render-ready structures handed to the presentation layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::assets::{AssetDetails, AssetKind};
use crate::history::HistoryPoint;
use crate::metrics::{AllocationEntry, PortfolioOverview, SummaryStatistics};

/// Raw asset table with the headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub title: String,
    pub assets: Vec<AssetDetails>,
    pub metrics: PortfolioOverview,
    /// When the snapshot behind this view was generated.
    pub generated_at: DateTime<Utc>,
}

/// One slice of the allocation pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: AssetKind,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationView {
    pub title: String,
    pub entries: Vec<AllocationEntry>,
    pub chart: PieChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub title: String,
    pub color: String,
    pub points: Vec<HistoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub title: String,
    /// Newest first, as generated
    pub points: Vec<HistoryPoint>,
    pub chart: LineChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReturnRow {
    pub asset: AssetKind,
    pub risk_pct: Decimal,
    pub return_pct: Decimal,
    pub value: Decimal,
}

/// A bubble on the risk/return chart; `size` scales with market value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub label: AssetKind,
    pub x: Decimal,
    pub y: Decimal,
    pub size: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReturnView {
    pub title: String,
    pub rows: Vec<RiskReturnRow>,
    pub chart: ScatterChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysisView {
    pub title: String,
    pub assets: Vec<AssetDetails>,
    pub statistics: SummaryStatistics,
}

/// Result of running a dashboard command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum DashboardView {
    Overview(OverviewView),
    Allocation(AllocationView),
    History(HistoryView),
    RiskReturn(RiskReturnView),
    DetailedAnalysis(DetailedAnalysisView),
}

impl DashboardView {
    pub fn title(&self) -> &str {
        match self {
            DashboardView::Overview(v) => &v.title,
            DashboardView::Allocation(v) => &v.title,
            DashboardView::History(v) => &v.title,
            DashboardView::RiskReturn(v) => &v.title,
            DashboardView::DetailedAnalysis(v) => &v.title,
        }
    }
}
