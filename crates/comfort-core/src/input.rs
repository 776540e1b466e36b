//! Discrete user input events.

use comfort_types::{Unit, parse_temperature};

/// A user action coming from the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The temperature slider moved to a Celsius value.
    SliderMoved(i32),
    /// A unit toggle button was pressed.
    UnitSelected(Unit),
    /// The "apply" button was pressed with the raw text of both bound inputs.
    ApplyRange { min: String, max: String },
    /// The "save" button was pressed.
    Save,
    /// The "reset" button was pressed.
    Reset,
}

impl Input {
    /// Build an [`Input::ApplyRange`] from the bound inputs' text.
    pub fn apply_range(min: impl Into<String>, max: impl Into<String>) -> Self {
        Input::ApplyRange {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Parse the text of a bound input.
///
/// A blank input reads as 0, the way a cleared number field does. Other
/// unparseable text is not a number (`None`).
pub fn parse_bound(text: &str) -> Option<i32> {
    if text.trim().is_empty() {
        return Some(0);
    }
    parse_temperature(text).ok()
}
