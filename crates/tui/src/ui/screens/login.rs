use client::{SessionState, forms::Field};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::LoginPage,
    ui::{
        components::input::{INPUT_HEIGHT, TextInput, centered_box, input_rows},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, page: &LoginPage, session: &SessionState) {
    let theme = Theme::default();

    let box_height = INPUT_HEIGHT * 2 + 4;
    let card_area = centered_box(40, box_height, area);
    frame.render_widget(Clear, card_area);

    let block = Block::default()
        .title(" login ")
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
    let rows = input_rows(sections[0], 2);

    TextInput {
        label: "Email",
        value: &page.form.email,
        focused: page.focus.is(Field::Email),
        masked: false,
        error: page.errors.get(Field::Email),
    }
    .render(frame, rows[0], &theme);
    TextInput {
        label: "Password",
        value: &page.form.password,
        focused: page.focus.is(Field::Password),
        masked: true,
        error: page.errors.get(Field::Password),
    }
    .render(frame, rows[1], &theme);

    let status = if session.is_loading {
        Span::styled("Signing in...", Style::default().fg(theme.dim))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), sections[1]);

    // Signup notice, or the last login failure, just below the box.
    let banner = match (&page.flash, &session.error) {
        (_, Some(error)) => Some(Span::styled(error.as_str(), Style::default().fg(theme.error))),
        (Some(flash), None) => Some(Span::styled(
            flash.as_str(),
            Style::default().fg(theme.positive),
        )),
        (None, None) => None,
    };
    if let Some(banner) = banner {
        let banner_area = Rect {
            x: card_area.x,
            y: card_area.y.saturating_add(card_area.height).saturating_add(1),
            width: card_area.width,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), banner_area);
    }
}
