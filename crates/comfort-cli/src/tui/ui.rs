//! Layout and rendering for the terminal view.
//!
//! - **Header**: title and unit toggles
//! - **Reading**: temperature, comfort badge and slider gauge
//! - **Range**: editable comfort bounds
//! - **History**: saved readings, newest first
//! - **Status bar**: key help, status messages or the reset prompt

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph};

use comfort_core::Clock;
use comfort_store::KeyValueStore;
use comfort_types::{StatusLevel, Unit};

use super::app::{App, Focus};

const BORDER_TYPE: BorderType = BorderType::Rounded;

/// Badge color for a comfort level.
pub(crate) fn level_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Ok => Color::Green,
        StatusLevel::Warn => Color::Yellow,
        StatusLevel::Bad => Color::Red,
    }
}

/// Draw the complete TUI interface.
pub fn draw<S: KeyValueStore, C: Clock>(frame: &mut Frame, app: &App<S, C>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Length(6), // Reading
            Constraint::Length(3), // Comfort range
            Constraint::Min(3),    // History
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_layout[0], app);
    draw_reading(frame, main_layout[1], app);
    draw_range(frame, main_layout[2], app);
    draw_history(frame, main_layout[3], app);
    draw_status_bar(frame, main_layout[4], app);
}

fn draw_header<S: KeyValueStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let view = app.widget.view();
    let toggle = |unit: Unit| {
        let label = format!(" {} ", unit.symbol());
        if view.is_unit_active(unit) {
            Span::styled(label, Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        Span::styled(" Comfort ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        toggle(Unit::Celsius),
        Span::raw(" "),
        toggle(Unit::Fahrenheit),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_reading<S: KeyValueStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let view = app.widget.view();
    let color = level_color(view.level);
    let slider_focused = app.focus == Focus::Slider;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(focus_style(slider_focused))
        .title(" Temperature ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let reading = Line::from(vec![
        Span::styled(
            format!("{}{}", view.temperature, view.unit_symbol),
            Style::default().bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", view.status_label),
            Style::default().fg(Color::Black).bg(color),
        ),
    ]);
    frame.render_widget(Paragraph::new(reading), rows[0]);

    let (low, high) = app.slider_bounds;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(app.slider_ratio())
        .label(format!("{} °C  ({}..{})", view.inputs.slider, low, high));
    frame.render_widget(gauge, rows[1]);

    let saved = Line::from(vec![
        Span::styled("Last saved: ", Style::default().fg(Color::DarkGray)),
        Span::raw(view.saved_info.as_str()),
    ]);
    frame.render_widget(Paragraph::new(saved), rows[2]);
}

fn draw_range<S: KeyValueStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let field = |text: &str, focused: bool| {
        let shown = if focused {
            format!("[{}_]", text)
        } else {
            format!("[{}]", text)
        };
        Span::styled(shown, focus_style(focused))
    };

    let line = Line::from(vec![
        Span::raw("Min "),
        field(&app.min_input, app.focus == Focus::Min),
        Span::raw("  Max "),
        field(&app.max_input, app.focus == Focus::Max),
        Span::raw(" °C   "),
        Span::styled(
            format!(
                "applied: {} to {}",
                app.widget.view().min_show,
                app.widget.view().max_show
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(focus_style(app.editing_text()))
        .title(" Comfort range ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_history<S: KeyValueStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let view = app.widget.view();
    let items: Vec<ListItem> = if view.history.is_empty() {
        vec![ListItem::new(Span::styled(
            "No saved readings",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.history
            .iter()
            .map(|line| ListItem::new(line.as_str()))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .title(format!(" History ({}) ", view.history.len()));
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status_bar<S: KeyValueStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let line = if app.pending_reset {
        Line::from(Span::styled(
            " Reset temperature, unit, range and history? (y/n)",
            Style::default().fg(Color::Yellow).bold(),
        ))
    } else if let Some(message) = app.current_status_message() {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from(Span::styled(
            " ←/→ temp  c/f unit  Tab focus  Enter apply  s save  R reset  q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use comfort_core::{FixedClock, Widget};
    use comfort_store::MemoryStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use time::macros::datetime;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_level_color() {
        assert_eq!(level_color(StatusLevel::Ok), Color::Green);
        assert_eq!(level_color(StatusLevel::Warn), Color::Yellow);
        assert_eq!(level_color(StatusLevel::Bad), Color::Red);
    }

    #[test]
    fn test_draw_renders_widget() {
        let widget = Widget::with_clock(
            MemoryStore::new(),
            FixedClock(datetime!(2026-10-18 09:30:00 UTC)),
        );
        let mut app = App::new(widget, &Config::default());
        app.move_slider(8);
        app.save();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Too hot"));
        assert!(text.contains("History (1)"));
        assert!(text.contains("Saved 30°C"));
    }
}
