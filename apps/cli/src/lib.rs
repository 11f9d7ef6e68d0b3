pub mod config;
pub mod main_lib;
pub mod render;
pub mod repl;

pub use main_lib::{build_session, init_tracing};
