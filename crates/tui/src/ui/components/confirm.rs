use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::{components::input::centered_box, theme::Theme};

/// Modal yes/no prompt drawn over `area`.
pub fn render(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let rect = centered_box(44, 6, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Span::styled(" Confirm ", Style::default().fg(theme.negative)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.negative))
        .style(Style::default().bg(theme.surface));

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(theme.negative)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" delete   "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
