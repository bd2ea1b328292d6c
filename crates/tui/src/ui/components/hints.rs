use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, Page},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

const LANDING: &[KeyHint] = &[
    KeyHint::new("l", "login"),
    KeyHint::new("s", "sign up"),
    KeyHint::new("q", "quit"),
];

const AUTH: &[KeyHint] = &[
    KeyHint::new("Tab", "next"),
    KeyHint::new("Enter", "submit"),
    KeyHint::new("Esc", "back"),
];

const DASHBOARD: &[KeyHint] = &[KeyHint::new("r", "refresh")];

const FILTER: &[KeyHint] = &[
    KeyHint::new("Tab", "switch date"),
    KeyHint::new("Enter", "apply"),
    KeyHint::new("Esc", "close"),
];

const LIST: &[KeyHint] = &[
    KeyHint::new("↑↓", "select"),
    KeyHint::new("←→", "page"),
    KeyHint::new("+/-", "size"),
    KeyHint::new("/", "filter"),
    KeyHint::new("c", "clear"),
    KeyHint::new("n", "new"),
    KeyHint::new("Enter", "detail"),
    KeyHint::new("e", "edit"),
    KeyHint::new("d", "delete"),
];

const DETAIL: &[KeyHint] = &[
    KeyHint::new("e", "edit"),
    KeyHint::new("d", "delete"),
    KeyHint::new("b", "back"),
];

const FORM: &[KeyHint] = &[
    KeyHint::new("Tab", "next"),
    KeyHint::new("S-Tab", "prev"),
    KeyHint::new("Enter", "save"),
    KeyHint::new("Esc", "cancel"),
];

const CONFIRM: &[KeyHint] = &[KeyHint::new("y", "delete"), KeyHint::new("n", "cancel")];

/// Hints for whatever currently has the keyboard.
pub fn for_page(state: &AppState) -> &'static [KeyHint] {
    match &state.page {
        Page::Landing => LANDING,
        Page::Login(_) | Page::Signup(_) => AUTH,
        Page::Dashboard(_) => DASHBOARD,
        Page::List(page) if page.filter.is_some() => FILTER,
        Page::List(page) if page.list.pending_delete.is_some() => CONFIRM,
        Page::List(_) => LIST,
        Page::Detail(detail) if detail.confirm_delete => CONFIRM,
        Page::Detail(_) => DETAIL,
        Page::Form(_) => FORM,
    }
}

/// Shortcuts available on every authenticated screen.
pub const SHELL: &[KeyHint] = &[KeyHint::new("L", "logout"), KeyHint::new("q", "quit")];
