use client::pages::TransactionDetail;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::{
    components::{card::Card, confirm, money},
    theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, detail: &TransactionDetail) {
    let theme = Theme::default();
    let kind = detail.kind();
    let title = format!("{} Details", kind.label());
    let block = Card::new(&title, &theme).focused(true).block();

    let Some(tx) = &detail.transaction else {
        let message = match (&detail.error, detail.is_loading) {
            (Some(error), _) => Span::styled(error.as_str(), Style::default().fg(theme.error)),
            (None, true) => Span::styled("Loading...", Style::default().fg(theme.dim)),
            (None, false) => Span::styled(
                format!("{} not found", kind.label()),
                Style::default().fg(theme.dim),
            ),
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.dim));
    let mut lines = vec![
        Line::from(Span::styled(
            tx.title.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Value        "),
            money::transaction_amount(tx.value, kind, &theme),
        ]),
        Line::from(vec![
            label("Date         "),
            Span::raw(tx.transaction_date.format("%B %d, %Y").to_string()),
        ]),
        Line::from(vec![
            label("Description  "),
            Span::raw(
                tx.description
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .unwrap_or("-")
                    .to_string(),
            ),
        ]),
    ];
    if let Some(error) = &detail.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme.error),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );

    if detail.confirm_delete {
        let message = format!(
            "Are you sure you want to delete this {}?",
            kind.label().to_lowercase()
        );
        confirm::render(frame, area, &message, &theme);
    }
}
