#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! home-carbon library
//!
//! This library estimates household electricity use, the monthly bill under
//! a slab tariff and the resulting CO2 emissions from per-room appliance
//! inventories, and suggests how to cut them. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Estimating a two-room household:
//!
//! ```
//! use home_carbon::inventory::{HomeInventory, Room};
//! use home_carbon::pipeline::generate_report;
//!
//! let raw = HomeInventory::new(vec![
//!     Room::new("Kitchen", [("refrigerator", 1)]),
//!     Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
//! ]);
//!
//! let report = generate_report(&raw, 4);
//!
//! // The refrigerator is counted once, in the kitchen
//! assert_eq!(report.total_inventory["refrigerator"], 1);
//! assert_eq!(report.home.totals.total_kwh, 234.0);
//! assert_eq!(report.home.totals.total_bill, 282.0);
//! ```
//!
//! # Advanced Example: Building an Inventory from Detections
//!
//! Accumulating detector output and manual corrections in a session:
//!
//! ```
//! use home_carbon::inventory::InventorySession;
//! use home_carbon::vision::{combine_max, count_detections, Detection};
//!
//! let photos = vec![
//!     vec![Detection::new("tv", 0.91), Detection::new("person", 0.88)],
//!     vec![Detection::new("tv", 0.62), Detection::new("fan", 0.40)],
//! ];
//! let detected = combine_max(photos.iter().map(|p| count_detections(p, 0.35)));
//!
//! let mut session = InventorySession::new();
//! session.record_detection("Living Room", detected, 3)?;
//! session.set_count("Living Room", "air conditioner", 1);
//!
//! let room = session.inventory().room("Living Room").unwrap();
//! assert_eq!(room.appliances["tv"], 1);
//! assert_eq!(room.appliances["plug_point"], 3);
//! # Ok::<(), home_carbon::error::HomeCarbonError>(())
//! ```

/// Static appliance catalog
pub mod catalog;
/// Energy, CO2 and slab-tariff calculations
pub mod calculator;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Per-person impact score and potential savings
pub mod impact;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Room and household inventories
pub mod inventory;
/// JSON and console output
pub mod output;
/// End-to-end estimation pipeline
pub mod pipeline;
/// Energy-saving suggestions
pub mod suggestions;
/// Object-detector contract
pub mod vision;
