//! Synthetic asset rows shown on the dashboard.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The fixed set of asset classes a generated portfolio can hold, in the
/// order they are assigned to rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Stock,
    Bond,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Cryptocurrency,
    Commodities,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Stock,
        AssetKind::Bond,
        AssetKind::RealEstate,
        AssetKind::Cryptocurrency,
        AssetKind::Commodities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Stock => "Stock",
            AssetKind::Bond => "Bond",
            AssetKind::RealEstate => "Real Estate",
            AssetKind::Cryptocurrency => "Cryptocurrency",
            AssetKind::Commodities => "Commodities",
        }
    }

    /// Returns the first `count` kinds, or an error when the enumeration is
    /// too short to supply that many distinct names.
    pub fn prefix(count: usize) -> Result<&'static [AssetKind], ValidationError> {
        if count == 0 || count > Self::ALL.len() {
            return Err(ValidationError::AssetCountOutOfRange {
                requested: count,
                max: Self::ALL.len(),
            });
        }
        Ok(&Self::ALL[..count])
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic portfolio line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub name: AssetKind,
    /// Market value in dollars
    pub value: Decimal,
    /// Return in percent
    pub return_pct: Decimal,
    /// Risk in percent
    pub risk_pct: Decimal,
    /// Chart color (hex code)
    pub color: String,
}

/// An asset row as shown in raw data tables, without chart metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetails {
    pub name: AssetKind,
    pub value: Decimal,
    pub return_pct: Decimal,
    pub risk_pct: Decimal,
}

impl From<&AssetRow> for AssetDetails {
    fn from(row: &AssetRow) -> Self {
        Self {
            name: row.name,
            value: row.value,
            return_pct: row.return_pct,
            risk_pct: row.risk_pct,
        }
    }
}
