//! Session settings for the demo dashboard.

use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;
use crate::constants::{DEFAULT_ASSET_COUNT, DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSettings {
    /// Number of asset rows, at most the size of the asset enumeration
    pub asset_count: usize,
    /// Length of the history window in days
    pub history_days: usize,
    /// Fixed seed for reproducible sessions; a fresh seed is drawn when unset
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            asset_count: DEFAULT_ASSET_COUNT,
            history_days: DEFAULT_HISTORY_DAYS,
            seed: None,
        }
    }
}

impl DemoSettings {
    pub fn validate(&self) -> Result<()> {
        AssetKind::prefix(self.asset_count)?;
        if self.history_days == 0 {
            return Err(ValidationError::EmptyHistoryWindow.into());
        }
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(ValidationError::HistoryWindowTooLong {
                requested: self.history_days,
                max: MAX_HISTORY_DAYS,
            }
            .into());
        }
        Ok(())
    }
}
