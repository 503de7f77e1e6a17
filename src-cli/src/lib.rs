//! Resizes the project logo to a fixed width and reports the sizes.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::ResizeJob;
pub use runner::{ResizeReport, run};
