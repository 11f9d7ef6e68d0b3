//! Unit tests for dashboard session lifecycle.

use super::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Error, ValidationError};
use crate::generator::{RandomSource, SeededRandomSource};
use crate::settings::DemoSettings;

struct ConstantRandomSource(Decimal);

impl RandomSource for ConstantRandomSource {
    fn unit_interval(&mut self) -> Decimal {
        self.0
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn seeded_session(seed: u64, settings: DemoSettings) -> DashboardSession {
    DashboardSession::new_as_of(settings, Box::new(SeededRandomSource::new(seed)), today())
        .unwrap()
}

#[test]
fn test_session_generates_snapshot_on_start() {
    let session = seeded_session(1, DemoSettings::default());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.assets.len(), 5);
    assert_eq!(snapshot.history.len(), 30);
    assert_eq!(snapshot.history[0].date, today());
    assert_eq!(session.refresh_count(), 0);
}

#[test]
fn test_session_respects_configured_sizes() {
    let settings = DemoSettings {
        asset_count: 2,
        history_days: 7,
        seed: None,
    };
    let session = seeded_session(1, settings);
    assert_eq!(session.snapshot().assets.len(), 2);
    assert_eq!(session.snapshot().history.len(), 7);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let settings = DemoSettings {
        asset_count: 9,
        ..Default::default()
    };
    let result = DashboardSession::new_as_of(
        settings,
        Box::new(ConstantRandomSource(dec!(0.5))),
        today(),
    );
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_history_window_before_earliest_date_is_rejected() {
    let end = NaiveDate::MIN.succ_opt().unwrap();
    let result = DashboardSession::new_as_of(
        DemoSettings::default(),
        Box::new(SeededRandomSource::new(1)),
        end,
    );
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::HistoryWindowUnrepresentable { days: 30, .. }))
    ));
}

#[test]
fn test_failed_refresh_keeps_previous_snapshot() {
    let mut session = seeded_session(5, DemoSettings::default());
    let before = session.snapshot().clone();

    let result = session.refresh_as_of(NaiveDate::MIN);
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::HistoryWindowUnrepresentable { .. }))
    ));
    assert_eq!(session.snapshot(), &before);
    assert_eq!(session.refresh_count(), 0);
}

#[test]
fn test_refresh_replaces_snapshot() {
    let mut session = seeded_session(8, DemoSettings::default());
    let initial = session.snapshot().clone();

    let first = session.refresh_as_of(today()).unwrap().clone();
    let second = session.refresh_as_of(today()).unwrap().clone();

    assert_eq!(session.refresh_count(), 2);
    assert_ne!(initial.assets, first.assets);
    assert_ne!(first.assets, second.assets);
    assert_ne!(first.history, second.history);
    assert_eq!(session.snapshot(), &second);
}

#[test]
fn test_refresh_regenerates_assets_and_history_together() {
    let settings = DemoSettings {
        asset_count: 3,
        history_days: 4,
        seed: None,
    };
    let mut session = seeded_session(21, settings);
    let later = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

    let snapshot = session.refresh_as_of(later).unwrap();
    assert_eq!(snapshot.assets.len(), 3);
    assert_eq!(snapshot.history.len(), 4);
    assert_eq!(snapshot.history[0].date, later);
}

#[test]
fn test_same_seed_replays_same_session() {
    let mut a = seeded_session(77, DemoSettings::default());
    let mut b = seeded_session(77, DemoSettings::default());
    assert_eq!(a.snapshot().assets, b.snapshot().assets);
    assert_eq!(a.snapshot().history, b.snapshot().history);

    let a_refreshed = a.refresh_as_of(today()).unwrap().assets.clone();
    let b_refreshed = b.refresh_as_of(today()).unwrap().assets.clone();
    assert_eq!(a_refreshed, b_refreshed);
}

#[test]
fn test_start_records_configured_seed() {
    let settings = DemoSettings {
        seed: Some(1234),
        ..Default::default()
    };
    let session = DashboardSession::start(settings).unwrap();
    assert_eq!(session.seed(), Some(1234));
    assert_eq!(session.settings().asset_count, 5);
}

#[test]
fn test_start_without_seed_reports_drawn_seed() {
    let session = DashboardSession::start(DemoSettings::default()).unwrap();
    assert!(session.seed().is_some());
}
