use api_types::transaction::TransactionKind;
use client::Route;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Expenses,
    Income,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Expenses, Tab::Income];

    /// Tab that owns `route`.
    pub fn for_route(route: Route) -> Self {
        match route.kind() {
            Some(TransactionKind::Expense) => Self::Expenses,
            Some(TransactionKind::Income) => Self::Income,
            None => Self::Dashboard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Income => "Income",
        }
    }

    pub fn key(self) -> char {
        match self {
            Self::Dashboard => '1',
            Self::Expenses => '2',
            Self::Income => '3',
        }
    }
}

/// Horizontal tab bar with an underline below the labels.
pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Tab, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let label = format!("{} {}", tab.key(), tab.label());
        if *tab == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(theme.dim),
            ));
        }
    }

    let underline = Line::from(Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(theme.border),
    ));

    frame.render_widget(Paragraph::new(vec![Line::from(spans), underline]), area);
}
