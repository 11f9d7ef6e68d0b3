//! Injectable randomness for data generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Scale of a unit draw; draws land on a grid of 10^-9.
const UNIT_SCALE: u32 = 9;
const UNIT_STEPS: i64 = 1_000_000_000;

/// Source of uniform draws used by the generator.
///
/// Implementations must return values in the closed interval `[0, 1]`.
pub trait RandomSource: Send {
    fn unit_interval(&mut self) -> Decimal;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn unit_interval(&mut self) -> Decimal {
        (**self).unit_interval()
    }
}

/// `StdRng`-backed random source that remembers its seed so a session can be
/// replayed.
pub struct SeededRandomSource {
    seed: u64,
    rng: StdRng,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a freshly drawn seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandomSource {
    fn unit_interval(&mut self) -> Decimal {
        Decimal::new(self.rng.gen_range(0..=UNIT_STEPS), UNIT_SCALE)
    }
}

/// Closed interval a uniform draw is mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRange {
    pub low: Decimal,
    pub high: Decimal,
}

impl UniformRange {
    pub const fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }

    pub fn sample(&self, source: &mut dyn RandomSource) -> Decimal {
        self.low + (self.high - self.low) * source.unit_interval()
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Market value of a generated asset, in dollars.
pub const ASSET_VALUE_RANGE: UniformRange = UniformRange::new(dec!(10000), dec!(100000));

/// Return of a generated asset, in percent.
pub const ASSET_RETURN_RANGE: UniformRange = UniformRange::new(dec!(-15), dec!(25));

/// Risk of a generated asset, in percent.
pub const ASSET_RISK_RANGE: UniformRange = UniformRange::new(dec!(5), dec!(20));

/// Daily fractional change applied to the portfolio value.
pub const DAILY_CHANGE_RANGE: UniformRange = UniformRange::new(dec!(-0.02), dec!(0.02));
