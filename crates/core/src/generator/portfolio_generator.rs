//! Synthesizes asset tables and daily value series.

use chrono::{Days, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::assets::{AssetKind, AssetRow};
use crate::constants::{
    ASSET_PALETTE, DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION, INITIAL_PORTFOLIO_VALUE,
};
use crate::errors::{Result, ValidationError};
use crate::history::HistoryPoint;

use super::{
    RandomSource, ASSET_RETURN_RANGE, ASSET_RISK_RANGE, ASSET_VALUE_RANGE, DAILY_CHANGE_RANGE,
};

/// Generates fake portfolio data from an injected random source.
pub struct PortfolioGenerator {
    random: Box<dyn RandomSource>,
}

impl PortfolioGenerator {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Generates one row for each of the first `count` asset kinds.
    ///
    /// Values are drawn column by column (all values, then all returns, then
    /// all risks) and rounded to two decimal places. Counts outside
    /// `1..=AssetKind::ALL.len()` are rejected.
    pub fn generate_assets(&mut self, count: usize) -> Result<Vec<AssetRow>> {
        let kinds = AssetKind::prefix(count)?;

        let values = self.draw_column(count, |random| ASSET_VALUE_RANGE.sample(random));
        let returns = self.draw_column(count, |random| ASSET_RETURN_RANGE.sample(random));
        let risks = self.draw_column(count, |random| ASSET_RISK_RANGE.sample(random));

        let rows: Vec<AssetRow> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| AssetRow {
                name: *kind,
                value: values[i],
                return_pct: returns[i],
                risk_pct: risks[i],
                color: ASSET_PALETTE[i].to_string(),
            })
            .collect();

        debug!("Generated {} asset rows", rows.len());
        Ok(rows)
    }

    /// Lazily generates `days` history points walking backward from `today`.
    ///
    /// The series is consumed once; calling again starts a new, independent
    /// series from the initial portfolio value. Windows whose first day falls
    /// before the earliest representable date are rejected.
    pub fn history(&mut self, days: usize, today: NaiveDate) -> Result<HistorySeries<'_>> {
        let span = days.saturating_sub(1) as u64;
        if today.checked_sub_days(Days::new(span)).is_none() {
            return Err(ValidationError::HistoryWindowUnrepresentable { days, end: today }
                .into());
        }

        Ok(HistorySeries {
            random: &mut *self.random,
            today,
            remaining: days,
            offset: 0,
            value: INITIAL_PORTFOLIO_VALUE,
        })
    }

    /// Generates `days` history points walking backward from `today`.
    pub fn generate_history(
        &mut self,
        days: usize,
        today: NaiveDate,
    ) -> Result<Vec<HistoryPoint>> {
        let points: Vec<HistoryPoint> = self.history(days, today)?.collect();
        debug!("Generated {} history points ending {}", points.len(), today);
        Ok(points)
    }

    fn draw_column<F>(&mut self, count: usize, mut draw: F) -> Vec<Decimal>
    where
        F: FnMut(&mut dyn RandomSource) -> Decimal,
    {
        (0..count)
            .map(|_| draw(&mut *self.random).round_dp(DISPLAY_DECIMAL_PRECISION))
            .collect()
    }
}

/// Iterator over a freshly generated history window.
///
/// Each step compounds the running value by a random daily change. The
/// running value is carried at `DECIMAL_PRECISION`; emitted points are
/// rounded for display. Every date in the window is representable, checked
/// when the series is created.
pub struct HistorySeries<'a> {
    random: &'a mut dyn RandomSource,
    today: NaiveDate,
    remaining: usize,
    offset: u64,
    value: Decimal,
}

impl Iterator for HistorySeries<'_> {
    type Item = HistoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.today.checked_sub_days(Days::new(self.offset))?;

        let daily_change = DAILY_CHANGE_RANGE.sample(&mut *self.random);
        self.value = (self.value * (Decimal::ONE + daily_change)).round_dp(DECIMAL_PRECISION);

        self.remaining -= 1;
        self.offset += 1;
        Some(HistoryPoint::new(
            date,
            self.value.round_dp(DISPLAY_DECIMAL_PRECISION),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for HistorySeries<'_> {}
