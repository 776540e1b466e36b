//! The widget controller.
//!
//! [`Widget`] owns the [`WidgetState`], a durable [`KeyValueStore`] and a
//! [`Clock`]. Every mutation goes through one of its operations, each of which
//! re-renders the cached [`View`]. Operations that commit (unit change, range
//! apply, save, reset) also write to the store; moving the slider does not.
//!
//! Storage failures are logged and never abort an operation: in-memory state
//! stays authoritative.

use tracing::{debug, info, warn};

use comfort_store::{KeyValueStore, PersistedState};
use comfort_types::{ComfortRange, ComfortStatus, HistoryEntry, Unit};

use crate::clock::{Clock, SystemClock};
use crate::input::{Input, parse_bound};
use crate::state::WidgetState;
use crate::view::{View, render};

/// Temperature widget controller.
pub struct Widget<S, C = SystemClock> {
    state: WidgetState,
    store: S,
    clock: C,
    view: View,
}

impl<S: KeyValueStore> Widget<S, SystemClock> {
    /// Create a widget over `store`, restoring any persisted state.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Widget<S, C> {
    /// Create a widget with an explicit clock, restoring any persisted state.
    pub fn with_clock(store: S, clock: C) -> Self {
        let state = WidgetState::default();
        let view = render(&state);
        let mut widget = Self {
            state,
            store,
            clock,
            view,
        };
        widget.load_persisted();
        widget
    }

    /// Current state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// The most recently rendered view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Current comfort status.
    pub fn status(&self) -> ComfortStatus {
        self.state.status()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the widget, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Route a view event to the matching operation.
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::SliderMoved(celsius) => self.set_temperature(celsius),
            Input::UnitSelected(unit) => self.set_unit(unit),
            Input::ApplyRange { min, max } => {
                self.apply_comfort_range(parse_bound(&min), parse_bound(&max));
            }
            Input::Save => {
                self.save_reading();
            }
            Input::Reset => self.reset_all(),
        }
    }

    /// Set the canonical temperature from a slider value in Celsius.
    ///
    /// Not persisted; the next committing operation writes it.
    pub fn set_temperature(&mut self, celsius: i32) {
        debug!(celsius, "Temperature set");
        self.state.temperature = celsius;
        self.rerender();
    }

    /// Set the display unit.
    pub fn set_unit(&mut self, unit: Unit) {
        debug!(unit = unit.code(), "Unit set");
        self.state.unit = unit;
        self.rerender();
        self.persist();
    }

    /// Overwrite the comfort bounds. `None` means the input was not a number.
    ///
    /// Inverted or missing bounds are stored as given and surface as a
    /// warning status.
    pub fn apply_comfort_range(&mut self, min: Option<i32>, max: Option<i32>) {
        let range = ComfortRange { min, max };
        if !range.is_valid() {
            debug!(?min, ?max, "Applied comfort range is not usable");
        }
        self.state.range = range;
        self.rerender();
        self.persist();
    }

    /// Append the current reading to the history and persist everything.
    ///
    /// Returns the new entry.
    pub fn save_reading(&mut self) -> HistoryEntry {
        let entry = HistoryEntry::new(
            self.state.temperature,
            self.state.unit,
            self.clock.timestamp(),
        );
        if let Some(evicted) = self.state.history.push(entry.clone()) {
            debug!(time = %evicted.time, "Evicted oldest history entry");
        }
        info!("Saved reading {}{}", entry.value, entry.unit);

        self.persist();
        self.rerender();
        entry
    }

    /// Restore defaults and remove every persisted key.
    pub fn reset_all(&mut self) {
        info!("Resetting widget to defaults");
        self.state = WidgetState::default();
        if let Err(e) = PersistedState::clear(&mut self.store) {
            warn!("Failed to clear stored state: {}", e);
        }
        self.rerender();
    }

    /// Overlay persisted values onto the current state.
    ///
    /// Each field is applied only if it is present and well-formed; the others
    /// keep their current value.
    pub fn load_persisted(&mut self) {
        let persisted = PersistedState::load(&self.store);

        if let Some(unit) = persisted.unit {
            self.state.unit = unit;
        }
        if let Some(temperature) = persisted.temperature {
            self.state.temperature = temperature;
        }
        if let Some(min) = persisted.min {
            self.state.range.min = Some(min);
        }
        if let Some(max) = persisted.max {
            self.state.range.max = Some(max);
        }
        if let Some(history) = persisted.history {
            self.state.history = history;
        }

        self.rerender();
    }

    fn persist(&mut self) {
        let snapshot = PersistedState {
            unit: Some(self.state.unit),
            temperature: Some(self.state.temperature),
            min: self.state.range.min,
            max: self.state.range.max,
            history: Some(self.state.history.clone()),
        };
        if let Err(e) = snapshot.save(&mut self.store) {
            warn!("Failed to persist widget state: {}", e);
        }
    }

    fn rerender(&mut self) {
        self.view = render(&self.state);
    }
}
