//! Configuration for home-carbon
//!
//! Settings live in `.home-carbon.toml` in the working directory; a missing
//! file means defaults. The tariff is fixed and not configurable here.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, DetectionSettings, HouseholdSettings, ReportSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
