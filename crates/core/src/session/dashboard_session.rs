//! Session state owned by a single dashboard front end.

use chrono::{Local, NaiveDate, Utc};
use log::{debug, info};

use crate::errors::Result;
use crate::generator::{PortfolioGenerator, RandomSource, SeededRandomSource};
use crate::settings::DemoSettings;

use super::PortfolioSnapshot;

/// Holds the generator and the current snapshot for one interactive session.
///
/// Handlers run one at a time against `&mut self`; a refresh regenerates the
/// asset table and the history together and swaps the whole snapshot.
pub struct DashboardSession {
    settings: DemoSettings,
    generator: PortfolioGenerator,
    snapshot: PortfolioSnapshot,
    seed: Option<u64>,
    refresh_count: u64,
}

impl DashboardSession {
    /// Starts a session with a `StdRng` seeded from the settings, or from a
    /// fresh seed when none is configured.
    pub fn start(settings: DemoSettings) -> Result<Self> {
        let random = match settings.seed {
            Some(seed) => SeededRandomSource::new(seed),
            None => SeededRandomSource::from_entropy(),
        };
        let seed = random.seed();
        info!("Starting dashboard session with seed {}", seed);

        let mut session = Self::new(settings, Box::new(random))?;
        session.seed = Some(seed);
        Ok(session)
    }

    pub fn new(settings: DemoSettings, random: Box<dyn RandomSource>) -> Result<Self> {
        Self::new_as_of(settings, random, local_today())
    }

    /// Starts a session whose history window ends on `today`.
    pub fn new_as_of(
        settings: DemoSettings,
        random: Box<dyn RandomSource>,
        today: NaiveDate,
    ) -> Result<Self> {
        settings.validate()?;
        let mut generator = PortfolioGenerator::new(random);
        let snapshot = generate_snapshot(&mut generator, &settings, today)?;
        Ok(Self {
            settings,
            generator,
            snapshot,
            seed: None,
            refresh_count: 0,
        })
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    /// Seed of the random source, when the session created it.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of refreshes since the session started.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Regenerates assets and history, ending the history window today.
    pub fn refresh(&mut self) -> Result<&PortfolioSnapshot> {
        self.refresh_as_of(local_today())
    }

    pub fn refresh_as_of(&mut self, today: NaiveDate) -> Result<&PortfolioSnapshot> {
        let snapshot = generate_snapshot(&mut self.generator, &self.settings, today)?;
        self.snapshot = snapshot;
        self.refresh_count += 1;
        debug!("Snapshot replaced (refresh #{})", self.refresh_count);
        Ok(&self.snapshot)
    }
}

fn generate_snapshot(
    generator: &mut PortfolioGenerator,
    settings: &DemoSettings,
    today: NaiveDate,
) -> Result<PortfolioSnapshot> {
    let assets = generator.generate_assets(settings.asset_count)?;
    let history = generator.generate_history(settings.history_days, today)?;
    Ok(PortfolioSnapshot {
        assets,
        history,
        generated_at: Utc::now(),
    })
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
