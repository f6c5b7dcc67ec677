//! Command handlers for home-carbon CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod bill;
pub mod catalog;
pub mod completions;
pub mod detect;
pub mod init;
pub mod report;

// Re-export command functions for convenient access
pub use bill::cmd_bill;
pub use catalog::{cmd_appliances, cmd_rooms};
pub use completions::cmd_completions;
pub use detect::cmd_detect;
pub use init::cmd_init;
pub use report::cmd_report;
