use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// Rows one [`TextInput`] occupies: label, value, error.
pub const INPUT_HEIGHT: u16 = 3;

/// Calculates a centered rect of at most `width` x `height`.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// A labelled single-line text field with its validation message.
pub struct TextInput<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub masked: bool,
    pub error: Option<&'a str>,
}

impl TextInput<'_> {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let label_style = if self.focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.dim)
        };
        frame.render_widget(Paragraph::new(Span::styled(self.label, label_style)), rows[0]);

        let cursor = if self.focused { "│" } else { "" };
        let shown = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };
        let value = Line::from(vec![
            Span::styled("> ", label_style),
            Span::styled(format!("{shown}{cursor}"), Style::default().fg(theme.text)),
        ]);
        frame.render_widget(Paragraph::new(value), rows[1]);

        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error, Style::default().fg(theme.error))),
                rows[2],
            );
        }
    }
}

/// Splits `area` into one [`INPUT_HEIGHT`] row per field.
pub fn input_rows(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = std::iter::repeat_n(Constraint::Length(INPUT_HEIGHT), count)
        .chain(std::iter::once(Constraint::Min(0)));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .iter()
        .take(count)
        .copied()
        .collect()
}
