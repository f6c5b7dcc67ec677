//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for float and JSON comparisons
//! - Inventory, detections and config fixtures in temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_report() {
//!     let (dir, path) = fixtures::write_inventory_json(fixtures::SCENARIO_JSON).unwrap();
//!     // run `home-carbon report` against `path` with `dir` as working directory
//! }
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the home-carbon binary command
#[allow(dead_code)]
pub fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_home-carbon"))
}
