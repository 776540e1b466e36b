//! Platform-agnostic types for the Comfort temperature widget.
//!
//! This crate provides the data model shared by the store, the controller
//! (comfort-core) and the user-facing front ends.
//!
//! # Features
//!
//! - Temperature [`Unit`] with Celsius/Fahrenheit conversion
//! - [`ComfortRange`] evaluation into a [`ComfortStatus`]
//! - Bounded [`History`] of saved readings
//! - Error types for parsing text input
//!
//! # Example
//!
//! ```
//! use comfort_types::{ComfortRange, Unit, celsius_to_fahrenheit};
//!
//! assert_eq!(celsius_to_fahrenheit(22), 72);
//! assert_eq!(Unit::Fahrenheit.display_value(22), 72);
//! assert!(ComfortRange::default().is_valid());
//! ```

pub mod comfort;
pub mod error;
pub mod types;

pub use comfort::{ComfortRange, ComfortStatus, StatusLevel};
pub use error::ParseError;
pub use types::{
    DEFAULT_MAX_C, DEFAULT_MIN_C, DEFAULT_TEMPERATURE_C, HISTORY_CAPACITY, History, HistoryEntry,
    Unit, celsius_to_fahrenheit, fahrenheit_to_celsius, parse_temperature,
};
