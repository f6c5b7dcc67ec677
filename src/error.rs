//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Proper exit codes for scripting
//!
//! # Examples
//!
//! ```no_run
//! use home_carbon::inventory::loader::load_inventory;
//! use std::path::Path;
//!
//! match load_inventory(Path::new("home.json")) {
//!     Ok(inventory) => println!("Loaded {} rooms", inventory.rooms.len()),
//!     Err(e) => {
//!         eprintln!("Could not load inventory: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the file, configuration and CLI surfaces
#[derive(Error, Debug)]
pub enum HomeCarbonError {
    /// Inventory or detections file does not exist
    #[error("Inventory file not found: {path}")]
    InventoryNotFound {
        /// Path that was requested
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Inventory file could not be parsed
    #[error("Invalid inventory file {path}: {reason}")]
    InvalidInventory {
        /// Path to the offending file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// File extension is not a supported input format
    #[error("Unsupported file format: '{extension}'")]
    UnsupportedFormat {
        /// Extension that was seen
        extension: String,
        /// Extensions that are accepted
        supported: Vec<String>,
    },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong
        reason: String,
    },

    /// Manual plug-point count outside the accepted range
    #[error("Plug point count {count} for '{room}' is outside 0..={max}")]
    PlugCountOutOfRange {
        /// Room the count was entered for
        room: String,
        /// Count that was entered
        count: u32,
        /// Largest accepted count
        max: u32,
    },

    /// A file lists the same room name twice
    #[error("Room '{room}' appears more than once")]
    DuplicateRoom {
        /// Repeated room name
        room: String,
    },

    /// No room has been recorded yet
    #[error("No rooms recorded")]
    EmptyInventory,

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl HomeCarbonError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use home_carbon::error::HomeCarbonError;
    ///
    /// let error = HomeCarbonError::PlugCountOutOfRange {
    ///     room: "Kitchen".to_string(),
    ///     count: 42,
    ///     max: 20,
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("20"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InventoryNotFound { path, .. } => Some(format!(
                "Check the path, or run 'home-carbon detect' to produce {} from detector output",
                path.display()
            )),
            Self::InvalidInventory { .. } => Some(
                "Inventory files need a 'rooms' list, each room with a 'name' and an 'appliances' table of non-negative counts"
                    .to_string(),
            ),
            Self::UnsupportedFormat { supported, .. } => {
                Some(format!("Supported formats: {}", supported.join(", ")))
            }
            Self::InvalidConfig { .. } => Some(
                "Fix .home-carbon.toml or delete it and run 'home-carbon init' to recreate the defaults"
                    .to_string(),
            ),
            Self::PlugCountOutOfRange { max, .. } => {
                Some(format!("Enter a plug point count between 0 and {}", max))
            }
            Self::DuplicateRoom { room } => Some(format!(
                "Merge the entries for '{}' into one room or give each room its own name",
                room
            )),
            Self::EmptyInventory => Some(
                "Detect or enter appliances in at least one room before generating a report"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use home_carbon::error::HomeCarbonError;
    ///
    /// assert_eq!(HomeCarbonError::EmptyInventory.exit_code(), 65);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InventoryNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidInventory { .. } => 65,  // EX_DATAERR
            Self::UnsupportedFormat { .. } => 64, // EX_USAGE
            Self::InvalidConfig { .. } => 78,     // EX_CONFIG
            Self::PlugCountOutOfRange { .. } => 65,
            Self::DuplicateRoom { .. } => 65,
            Self::EmptyInventory => 65,
            Self::Io { .. } => 74, // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(hc_error) = error.downcast_ref::<HomeCarbonError>() {
            if let Some(suggestion) = hc_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(hc_error) = error.downcast_ref::<HomeCarbonError>() {
            hc_error.exit_code()
        } else {
            1
        }
    }
}
