//! Asset rows and the fixed asset enumeration.

mod asset_model;

pub use asset_model::*;
