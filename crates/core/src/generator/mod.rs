//! Random data generation for the demo portfolio.

mod portfolio_generator;
mod random_source;

pub use portfolio_generator::*;
pub use random_source::*;
