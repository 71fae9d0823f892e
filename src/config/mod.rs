//! Server configuration: compiled defaults, optional YAML file, environment.
#[allow(clippy::module_inception)]
pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
