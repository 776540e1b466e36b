//! Application state for the terminal view.

use std::time::Instant;

use comfort_core::{Clock, Input, SystemClock, Widget};
use comfort_store::KeyValueStore;
use comfort_types::Unit;
use tracing::debug;

use crate::config::Config;

/// Which control receives text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Slider,
    Min,
    Max,
}

impl Focus {
    /// The next control in Tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::Slider => Focus::Min,
            Focus::Min => Focus::Max,
            Focus::Max => Focus::Slider,
        }
    }
}

/// Application state for the TUI.
pub struct App<S, C = SystemClock> {
    /// The widget controller. All state changes go through it.
    pub widget: Widget<S, C>,
    /// Focused control.
    pub focus: Focus,
    /// Text of the lower bound input.
    pub min_input: String,
    /// Text of the upper bound input.
    pub max_input: String,
    /// Slider travel as `(low, high)` in Celsius.
    pub slider_bounds: (i32, i32),
    /// Ask before resetting.
    pub confirm_reset: bool,
    /// A reset is waiting for y/n.
    pub pending_reset: bool,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Status messages with their creation time.
    pub status_messages: Vec<(String, Instant)>,
    /// How long to show each status message (in seconds).
    pub status_message_timeout: u64,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    pub fn new(widget: Widget<S, C>, config: &Config) -> Self {
        let mut app = Self {
            widget,
            focus: Focus::Slider,
            min_input: String::new(),
            max_input: String::new(),
            slider_bounds: config.slider_bounds(),
            confirm_reset: config.confirm_reset,
            pending_reset: false,
            should_quit: false,
            status_messages: Vec::new(),
            status_message_timeout: 4,
        };
        app.sync_inputs();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a bound input has focus.
    pub fn editing_text(&self) -> bool {
        self.focus != Focus::Slider
    }

    /// Move the slider by `delta` degrees, staying within the slider bounds.
    pub fn move_slider(&mut self, delta: i32) {
        let (low, high) = self.slider_bounds;
        let current = self.widget.state().temperature();
        let next = current.saturating_add(delta).clamp(low, high);
        if next != current {
            self.widget.handle(Input::SliderMoved(next));
        }
    }

    /// Slider position in `0.0..=1.0` for drawing.
    pub fn slider_ratio(&self) -> f64 {
        let (low, high) = self.slider_bounds;
        if high <= low {
            return 0.0;
        }
        let value = self.widget.state().temperature().clamp(low, high);
        f64::from(value - low) / f64::from(high - low)
    }

    pub fn select_unit(&mut self, unit: Unit) {
        self.widget.handle(Input::UnitSelected(unit));
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Leave the bound inputs, discarding unapplied edits.
    pub fn cancel_edit(&mut self) {
        self.focus = Focus::Slider;
        self.sync_inputs();
    }

    /// Append a character to the focused bound input.
    pub fn input_char(&mut self, c: char) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
    }

    /// Apply both bound inputs as the comfort range.
    pub fn apply_range(&mut self) {
        let input = Input::apply_range(self.min_input.clone(), self.max_input.clone());
        self.widget.handle(input);
        self.sync_inputs();

        let range = self.widget.state().range();
        if range.is_valid() {
            self.push_status_message(format!(
                "Comfort range set to {} to {} °C",
                self.widget.view().min_show,
                self.widget.view().max_show
            ));
        } else {
            self.push_status_message("Comfort range is not usable".to_string());
        }
    }

    pub fn save(&mut self) {
        let entry = self.widget.save_reading();
        self.push_status_message(format!("Saved {}{}", entry.value, entry.unit));
    }

    /// Reset now, or ask first when confirmation is enabled.
    pub fn request_reset(&mut self) {
        if self.confirm_reset {
            self.pending_reset = true;
        } else {
            self.reset();
        }
    }

    pub fn confirm(&mut self) {
        if self.pending_reset {
            self.pending_reset = false;
            self.reset();
        }
    }

    pub fn cancel(&mut self) {
        if self.pending_reset {
            self.pending_reset = false;
            self.push_status_message("Reset cancelled".to_string());
        }
    }

    fn reset(&mut self) {
        self.widget.handle(Input::Reset);
        self.focus = Focus::Slider;
        self.sync_inputs();
        self.push_status_message("Reset to defaults".to_string());
    }

    /// Copy the rendered input values into the editable buffers.
    fn sync_inputs(&mut self) {
        let inputs = &self.widget.view().inputs;
        self.min_input = inputs.min.clone();
        self.max_input = inputs.max.clone();
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Slider => None,
            Focus::Min => Some(&mut self.min_input),
            Focus::Max => Some(&mut self.max_input),
        }
    }

    /// Add a status message to display.
    pub fn push_status_message(&mut self, message: String) {
        debug!("{}", message);
        self.status_messages.push((message, Instant::now()));
        // Keep at most 5 messages
        while self.status_messages.len() > 5 {
            self.status_messages.remove(0);
        }
    }

    /// Remove expired status messages.
    pub fn clean_expired_messages(&mut self) {
        let timeout = std::time::Duration::from_secs(self.status_message_timeout);
        self.status_messages
            .retain(|(_, created)| created.elapsed() < timeout);
    }

    /// Get the current status message to display.
    pub fn current_status_message(&self) -> Option<&str> {
        self.status_messages.last().map(|(msg, _)| msg.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfort_core::FixedClock;
    use comfort_store::{MemoryStore, keys};
    use comfort_types::ComfortStatus;
    use time::macros::datetime;

    fn app() -> App<MemoryStore, FixedClock> {
        let widget = Widget::with_clock(
            MemoryStore::new(),
            FixedClock(datetime!(2026-10-18 09:30:00 UTC)),
        );
        App::new(widget, &Config::default())
    }

    #[test]
    fn test_new_syncs_inputs() {
        let app = app();
        assert_eq!(app.min_input, "18");
        assert_eq!(app.max_input, "26");
        assert_eq!(app.focus, Focus::Slider);
        assert!(!app.editing_text());
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Slider.next(), Focus::Min);
        assert_eq!(Focus::Min.next(), Focus::Max);
        assert_eq!(Focus::Max.next(), Focus::Slider);
    }

    #[test]
    fn test_move_slider_clamps() {
        let mut app = app();
        app.slider_bounds = (20, 23);
        app.move_slider(5);
        assert_eq!(app.widget.state().temperature(), 23);
        app.move_slider(-10);
        assert_eq!(app.widget.state().temperature(), 20);
        assert_eq!(app.slider_ratio(), 0.0);
    }

    #[test]
    fn test_slider_is_not_persisted() {
        let mut app = app();
        app.move_slider(1);
        assert_eq!(app.widget.store().get(keys::TEMP_C).unwrap(), None);
    }

    #[test]
    fn test_edit_and_apply_range() {
        let mut app = app();
        app.next_focus();
        app.backspace();
        app.backspace();
        app.input_char('2');
        app.input_char('0');
        app.apply_range();

        assert_eq!(app.widget.state().range().min, Some(20));
        assert_eq!(app.min_input, "20");
        assert_eq!(app.current_status_message(), Some("Comfort range set to 20 to 26 °C"));
    }

    #[test]
    fn test_apply_empty_bound_reads_as_zero() {
        let mut app = app();
        app.focus = Focus::Min;
        app.min_input.clear();
        app.apply_range();
        assert_eq!(app.widget.state().range().min, Some(0));
        assert_eq!(app.widget.status(), ComfortStatus::Comfort);
        assert_eq!(app.min_input, "0");

        app.focus = Focus::Max;
        app.max_input.clear();
        app.apply_range();
        assert_eq!(app.widget.state().range().max, Some(0));
        assert_eq!(app.widget.status(), ComfortStatus::InvalidRange);
        assert_eq!(app.max_input, "0");
    }

    #[test]
    fn test_cancel_edit_restores_inputs() {
        let mut app = app();
        app.focus = Focus::Min;
        app.input_char('9');
        assert_eq!(app.min_input, "189");
        app.cancel_edit();
        assert_eq!(app.min_input, "18");
        assert_eq!(app.focus, Focus::Slider);
    }

    #[test]
    fn test_input_ignored_on_slider() {
        let mut app = app();
        app.input_char('5');
        assert_eq!(app.min_input, "18");
        assert_eq!(app.max_input, "26");
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut app = app();
        app.move_slider(8);
        app.save();
        app.request_reset();
        assert!(app.pending_reset);
        assert_eq!(app.widget.state().history().len(), 1);

        app.cancel();
        assert!(!app.pending_reset);
        assert_eq!(app.widget.state().history().len(), 1);

        app.request_reset();
        app.confirm();
        assert!(app.widget.state().history().is_empty());
        assert_eq!(app.widget.state().temperature(), 22);
        assert!(app.widget.store().is_empty());
    }

    #[test]
    fn test_reset_without_confirmation() {
        let widget = Widget::with_clock(
            MemoryStore::new(),
            FixedClock(datetime!(2026-10-18 09:30:00 UTC)),
        );
        let config = Config {
            confirm_reset: false,
            ..Default::default()
        };
        let mut app = App::new(widget, &config);
        app.select_unit(Unit::Fahrenheit);
        app.request_reset();
        assert!(!app.pending_reset);
        assert_eq!(app.widget.state().unit(), Unit::Celsius);
    }

    #[test]
    fn test_status_messages_capped() {
        let mut app = app();
        for i in 0..8 {
            app.push_status_message(format!("message {}", i));
        }
        assert_eq!(app.status_messages.len(), 5);
        assert_eq!(app.current_status_message(), Some("message 7"));
    }
}
