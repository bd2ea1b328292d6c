use api_types::{Amount, transaction::TransactionKind};
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Transaction value colored by kind: income green, expenses red.
#[must_use]
pub fn transaction_amount(value: Amount, kind: TransactionKind, theme: &Theme) -> Span<'static> {
    let color = match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    };
    Span::styled(value.to_string(), Style::default().fg(color))
}

/// Signed total colored by sign.
#[must_use]
pub fn balance(value: Amount, theme: &Theme) -> Span<'static> {
    let color = if value.is_negative() {
        theme.negative
    } else if value.is_positive() {
        theme.positive
    } else {
        theme.text
    };
    Span::styled(value.to_string(), Style::default().fg(color))
}
