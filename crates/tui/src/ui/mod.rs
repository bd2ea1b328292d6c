pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Page};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    match &state.page {
        Page::Landing => screens::landing::render(frame, area, state),
        Page::Login(page) => screens::login::render(frame, area, page, &state.session),
        Page::Signup(page) => screens::signup::render(frame, area, page, &state.session),
        Page::Dashboard(_) | Page::List(_) | Page::Detail(_) | Page::Form(_) => {
            render_shell(frame, area, state)
        }
    }
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_shell(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + underline)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(
        frame,
        layout[1],
        components::tabs::Tab::for_route(state.route),
        &theme,
    );

    let content = layout[2];
    match &state.page {
        Page::Dashboard(dashboard) => screens::dashboard::render(frame, content, dashboard),
        Page::List(page) => screens::transactions::render(frame, content, page),
        Page::Detail(detail) => screens::detail::render(frame, content, detail),
        Page::Form(page) => screens::form::render(frame, content, page),
        Page::Landing | Page::Login(_) | Page::Signup(_) => {}
    }

    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .session
        .user
        .as_ref()
        .map(|user| format!("{} <{}>", user.name, user.email))
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Saldo", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.dim)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Server", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.base_url)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = Vec::new();
    for (i, tab) in components::tabs::Tab::ALL.iter().enumerate() {
        if i > 0 {
            parts.push(Span::raw(" "));
        }
        parts.push(Span::styled(
            tab.key().to_string(),
            Style::default().fg(theme.accent),
        ));
    }
    parts.push(Span::raw(" tabs"));

    let context = components::hints::for_page(state);
    if !context.is_empty() {
        parts.push(components::hints::hint_separator(theme));
        parts.extend(components::hints::hints_to_spans(context, theme));
    }

    parts.push(components::hints::hint_separator(theme));
    parts.extend(components::hints::hints_to_spans(
        components::hints::SHELL,
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
