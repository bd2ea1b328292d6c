use client::forms::Field;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::FormPage,
    ui::{
        components::{
            card::Card,
            input::{TextInput, centered_box, input_rows},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, page: &FormPage) {
    let theme = Theme::default();
    let editor = &page.editor;
    let heading = editor.heading();

    let card_area = centered_box(64, 18, area);
    let block = Card::new(&heading, &theme).focused(true).block();
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    if editor.is_loading_data {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading...", Style::default().fg(theme.dim))),
            sections[0],
        );
        return;
    }

    let form = &editor.form;
    let fields = [
        (Field::Title, "Title", form.title.as_str()),
        (Field::Description, "Description", form.description.as_str()),
        (Field::Value, "Value", form.value.as_str()),
        (
            Field::TransactionDate,
            "Date (YYYY-MM-DD)",
            form.transaction_date.as_str(),
        ),
    ];
    let rows = input_rows(sections[0], fields.len());
    for ((field, label, value), row) in fields.into_iter().zip(rows) {
        TextInput {
            label,
            value,
            focused: page.focus.is(field),
            masked: false,
            error: editor.errors.get(field),
        }
        .render(frame, row, &theme);
    }

    let footer = match &editor.error {
        Some(error) => Line::from(Span::styled(error.as_str(), Style::default().fg(theme.error))),
        None if editor.is_loading => Line::from(Span::styled(
            "Saving...",
            Style::default().fg(theme.dim),
        )),
        None => Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", editor.submit_label())),
        ]),
    };
    frame.render_widget(Paragraph::new(footer), sections[1]);
}
