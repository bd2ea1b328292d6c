use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{
    components::{
        hints::{self, hints_to_spans},
        input::centered_box,
    },
    theme::Theme,
};
use crate::app::AppState;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let rect = centered_box(56, 8, area);

    let lines = vec![
        Line::from(Span::styled(
            "Saldo",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Track your expenses and income in one place.",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            format!("Server: {}", state.base_url),
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(hints_to_spans(hints::for_page(state), &theme)),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
