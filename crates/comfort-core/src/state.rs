//! In-memory widget state.

use comfort_types::{ComfortRange, ComfortStatus, DEFAULT_TEMPERATURE_C, History, Unit};

/// Everything the widget knows.
///
/// Owned by [`crate::Widget`]; read access only from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub(crate) unit: Unit,
    pub(crate) temperature: i32,
    pub(crate) range: ComfortRange,
    pub(crate) history: History,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            unit: Unit::Celsius,
            temperature: DEFAULT_TEMPERATURE_C,
            range: ComfortRange::default(),
            history: History::new(),
        }
    }
}

impl WidgetState {
    /// Display unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Canonical temperature in Celsius.
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Temperature converted to the display unit.
    pub fn display_temperature(&self) -> i32 {
        self.unit.display_value(self.temperature)
    }

    /// Comfort bounds in Celsius.
    pub fn range(&self) -> ComfortRange {
        self.range
    }

    /// Saved readings, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Comfort status derived from the current temperature and range.
    pub fn status(&self) -> ComfortStatus {
        self.range.evaluate(self.temperature)
    }
}
