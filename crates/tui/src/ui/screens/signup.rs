use client::{SessionState, forms::Field};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::SignupPage,
    ui::{
        components::input::{INPUT_HEIGHT, TextInput, centered_box, input_rows},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, page: &SignupPage, session: &SessionState) {
    let theme = Theme::default();

    let card_area = centered_box(48, INPUT_HEIGHT * 4 + 4, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" sign up ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .split(inner);
    let rows = input_rows(sections[0], 4);

    let fields = [
        (Field::Name, "Name", page.form.name.as_str(), false),
        (Field::Email, "Email", page.form.email.as_str(), false),
        (Field::Password, "Password", page.form.password.as_str(), true),
        (
            Field::ConfirmPassword,
            "Confirm password",
            page.form.confirm_password.as_str(),
            true,
        ),
    ];
    for ((field, label, value, masked), row) in fields.into_iter().zip(rows) {
        TextInput {
            label,
            value,
            focused: page.focus.is(field),
            masked,
            error: page.errors.get(field),
        }
        .render(frame, row, &theme);
    }

    let status = match (&session.error, session.is_loading) {
        (_, true) => Span::styled("Creating account...", Style::default().fg(theme.dim)),
        (Some(error), false) => Span::styled(error.as_str(), Style::default().fg(theme.error)),
        (None, false) => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), sections[1]);
}
