//! Keyboard input handling for the TUI.
//!
//! Translates key events into [`Action`]s and applies them to the [`App`].
//!
//! # Key Bindings
//!
//! | Key             | Action                          |
//! |-----------------|---------------------------------|
//! | `←` / `h`       | Slider down 1 °C                |
//! | `→` / `l`       | Slider up 1 °C                  |
//! | `c` / `f`       | Celsius / Fahrenheit            |
//! | `Tab`           | Cycle focus slider, min, max    |
//! | `0-9` / `-`     | Edit the focused bound          |
//! | `Backspace`     | Delete from the focused bound   |
//! | `Enter`         | Apply comfort range             |
//! | `s`             | Save reading                    |
//! | `R`             | Reset (asks y/n)                |
//! | `q` / `Esc`     | Quit (`Esc` leaves a bound first) |

use crossterm::event::KeyCode;

use comfort_core::Clock;
use comfort_store::KeyValueStore;
use comfort_types::Unit;

use super::app::App;

/// User actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Move the slider by the given number of degrees.
    MoveSlider(i32),
    /// Select a display unit.
    SelectUnit(Unit),
    /// Move focus to the next control.
    NextFocus,
    /// Input character for the focused bound.
    TextInput(char),
    /// Backspace in the focused bound.
    TextBackspace,
    /// Leave the bound inputs without applying.
    TextCancel,
    /// Apply the comfort range.
    ApplyRange,
    /// Save the current reading.
    Save,
    /// Reset everything.
    Reset,
    /// Confirm pending action.
    Confirm,
    /// Cancel pending action.
    Cancel,
    /// No action (unrecognized key).
    None,
}

/// Map a key code to an action.
///
/// `editing_text` is true while a bound input has focus; digits and `-` then
/// go to that input. While a confirmation is pending only y/n are handled.
pub fn handle_key(key: KeyCode, editing_text: bool, has_pending_confirmation: bool) -> Action {
    if has_pending_confirmation {
        return match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        };
    }

    if editing_text {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => return Action::TextInput(c),
            KeyCode::Backspace => return Action::TextBackspace,
            KeyCode::Esc => return Action::TextCancel,
            _ => {}
        }
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::MoveSlider(-1),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveSlider(1),
        KeyCode::Char('c') => Action::SelectUnit(Unit::Celsius),
        KeyCode::Char('f') => Action::SelectUnit(Unit::Fahrenheit),
        KeyCode::Tab => Action::NextFocus,
        KeyCode::Enter => Action::ApplyRange,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('R') => Action::Reset,
        _ => Action::None,
    }
}

/// Apply an action to the application state.
pub fn apply_action<S: KeyValueStore, C: Clock>(app: &mut App<S, C>, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveSlider(delta) => app.move_slider(delta),
        Action::SelectUnit(unit) => app.select_unit(unit),
        Action::NextFocus => app.next_focus(),
        Action::TextInput(c) => app.input_char(c),
        Action::TextBackspace => app.backspace(),
        Action::TextCancel => app.cancel_edit(),
        Action::ApplyRange => app.apply_range(),
        Action::Save => app.save(),
        Action::Reset => app.request_reset(),
        Action::Confirm => app.confirm(),
        Action::Cancel => app.cancel(),
        Action::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use comfort_core::{FixedClock, Widget};
    use comfort_store::MemoryStore;
    use time::macros::datetime;

    fn app() -> App<MemoryStore, FixedClock> {
        let widget = Widget::with_clock(
            MemoryStore::new(),
            FixedClock(datetime!(2026-10-18 09:30:00 UTC)),
        );
        App::new(widget, &Config::default())
    }

    #[test]
    fn test_slider_keys() {
        assert_eq!(handle_key(KeyCode::Left, false, false), Action::MoveSlider(-1));
        assert_eq!(handle_key(KeyCode::Char('l'), false, false), Action::MoveSlider(1));
    }

    #[test]
    fn test_unit_keys() {
        assert_eq!(
            handle_key(KeyCode::Char('f'), false, false),
            Action::SelectUnit(Unit::Fahrenheit)
        );
        assert_eq!(
            handle_key(KeyCode::Char('c'), true, false),
            Action::SelectUnit(Unit::Celsius)
        );
    }

    #[test]
    fn test_digits_only_edit_when_focused() {
        assert_eq!(handle_key(KeyCode::Char('7'), true, false), Action::TextInput('7'));
        assert_eq!(handle_key(KeyCode::Char('-'), true, false), Action::TextInput('-'));
        assert_eq!(handle_key(KeyCode::Char('7'), false, false), Action::None);
        assert_eq!(handle_key(KeyCode::Backspace, false, false), Action::None);
    }

    #[test]
    fn test_esc_leaves_edit_before_quitting() {
        assert_eq!(handle_key(KeyCode::Esc, true, false), Action::TextCancel);
        assert_eq!(handle_key(KeyCode::Esc, false, false), Action::Quit);
        assert_eq!(handle_key(KeyCode::Char('q'), true, false), Action::Quit);
    }

    #[test]
    fn test_confirmation_keys() {
        assert_eq!(handle_key(KeyCode::Char('y'), false, true), Action::Confirm);
        assert_eq!(handle_key(KeyCode::Char('N'), true, true), Action::Cancel);
        assert_eq!(handle_key(KeyCode::Esc, false, true), Action::Cancel);
        // Other keys are ignored during confirmation
        assert_eq!(handle_key(KeyCode::Char('q'), false, true), Action::None);
    }

    #[test]
    fn test_key_sequence_drives_widget() {
        let mut app = app();
        let keys = [
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Char('f'),
            KeyCode::Tab,
            KeyCode::Tab,
            KeyCode::Backspace,
            KeyCode::Backspace,
            KeyCode::Char('2'),
            KeyCode::Char('3'),
            KeyCode::Enter,
            KeyCode::Char('s'),
        ];
        for key in keys {
            let action = handle_key(key, app.editing_text(), app.pending_reset);
            apply_action(&mut app, action);
        }

        let view = app.widget.view();
        assert_eq!(app.widget.state().temperature(), 24);
        assert_eq!(view.temperature, 75);
        assert_eq!(view.max_show, "23");
        assert_eq!(view.status_label, "Too hot");
        assert_eq!(view.saved_info, "75°F @ 2026-10-18 09:30:00");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        apply_action(&mut app, handle_key(KeyCode::Char('q'), false, false));
        assert!(app.should_quit());
    }
}
