//! Synthetic daily portfolio value series.

mod history_model;

pub use history_model::*;
