use api_types::transaction::{Transaction, TransactionKind};
use client::pages::Dashboard;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::ui::{
    components::{
        card::{Card, StatCard},
        money,
    },
    theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_summary(frame, layout[0], dashboard, &theme);

    let status = if dashboard.is_loading {
        Span::styled("Loading...", Style::default().fg(theme.dim))
    } else if let Some(error) = &dashboard.error {
        Span::styled(error.as_str(), Style::default().fg(theme.error))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(status), layout[1]);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);
    render_recent(
        frame,
        lists[0],
        "Recent Expenses",
        &dashboard.expenses,
        TransactionKind::Expense,
        &theme,
    );
    render_recent(
        frame,
        lists[1],
        "Recent Income",
        &dashboard.incomes,
        TransactionKind::Income,
        &theme,
    );
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard, theme: &Theme) {
    let summary = dashboard.summary();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new(
        "Total Income",
        money::transaction_amount(summary.total_income, TransactionKind::Income, theme),
        theme,
    )
    .render(frame, cards[0]);
    StatCard::new(
        "Total Expenses",
        money::transaction_amount(summary.total_expenses, TransactionKind::Expense, theme),
        theme,
    )
    .render(frame, cards[1]);
    StatCard::new("Balance", money::balance(summary.balance, theme), theme).render(frame, cards[2]);
}

fn render_recent(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: &[Transaction],
    kind: TransactionKind,
    theme: &Theme,
) {
    let block = Card::new(title, theme).block();

    if items.is_empty() {
        let empty = format!("No {} yet", kind.plural_label().to_lowercase());
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(theme.dim))).block(block),
            area,
        );
        return;
    }

    let rows = items
        .iter()
        .map(|tx| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    tx.transaction_date.format("%b %d, %Y").to_string(),
                    Style::default().fg(theme.dim),
                ),
                Span::raw("  "),
                Span::styled(tx.title.clone(), Style::default().fg(theme.text)),
                Span::raw("  "),
                money::transaction_amount(tx.value, kind, theme),
            ]))
        })
        .collect::<Vec<_>>();

    frame.render_widget(List::new(rows).block(block), area);
}
