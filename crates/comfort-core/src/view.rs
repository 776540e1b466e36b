//! One-way rendering of widget state into a view model.
//!
//! [`render`] is a pure function of [`WidgetState`]. Front ends draw a [`View`]
//! and never read state back out of their own widgets.

use serde::Serialize;

use comfort_types::{ComfortStatus, StatusLevel, Unit};

use crate::state::WidgetState;

/// Placeholder shown when there is nothing to display.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Values the editable inputs should hold after a load or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputValues {
    /// Slider position in Celsius.
    pub slider: i32,
    /// Text of the lower bound input.
    pub min: String,
    /// Text of the upper bound input.
    pub max: String,
}

/// Everything a front end needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Temperature in the display unit.
    pub temperature: i32,
    /// Active display unit.
    pub unit: Unit,
    /// Unit symbol shown next to the temperature.
    pub unit_symbol: &'static str,
    /// Lower comfort bound (Celsius) as displayed.
    pub min_show: String,
    /// Upper comfort bound (Celsius) as displayed.
    pub max_show: String,
    /// Derived comfort status.
    pub status: ComfortStatus,
    /// Badge level for the status.
    pub level: StatusLevel,
    /// Badge text.
    pub status_label: &'static str,
    /// "Last saved" summary.
    pub saved_info: String,
    /// History lines, newest first.
    pub history: Vec<String>,
    /// Values to resynchronize the inputs with.
    pub inputs: InputValues,
}

impl View {
    /// Whether the toggle button for `unit` should be shown as active.
    pub fn is_unit_active(&self, unit: Unit) -> bool {
        self.unit == unit
    }
}

impl Default for View {
    fn default() -> Self {
        render(&WidgetState::default())
    }
}

/// Render widget state into a view.
pub fn render(state: &WidgetState) -> View {
    let status = state.status();
    let range = state.range();

    let saved_info = match state.history().last() {
        Some(last) => format!("{}{} @ {}", last.value, last.unit, last.time),
        None => EMPTY_PLACEHOLDER.to_string(),
    };

    View {
        temperature: state.display_temperature(),
        unit: state.unit(),
        unit_symbol: state.unit().symbol(),
        min_show: show_bound(range.min),
        max_show: show_bound(range.max),
        status,
        level: status.level(),
        status_label: status.label(),
        saved_info,
        history: state.history().recent().map(ToString::to_string).collect(),
        inputs: InputValues {
            slider: state.temperature(),
            min: range.min.map(|v| v.to_string()).unwrap_or_default(),
            max: range.max.map(|v| v.to_string()).unwrap_or_default(),
        },
    }
}

fn show_bound(bound: Option<i32>) -> String {
    bound.map_or_else(|| EMPTY_PLACEHOLDER.to_string(), |v| v.to_string())
}
