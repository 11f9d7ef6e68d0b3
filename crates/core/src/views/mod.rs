//! Render-ready dashboard sections.

mod view_builder;
mod views_model;

pub use views_model::*;
