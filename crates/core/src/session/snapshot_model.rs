use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::AssetRow;
use crate::history::HistoryPoint;

/// The current asset table and value series of one session.
///
/// Snapshots are never edited; a refresh builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub assets: Vec<AssetRow>,
    /// Newest first
    pub history: Vec<HistoryPoint>,
    pub generated_at: DateTime<Utc>,
}
