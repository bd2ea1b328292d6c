use api_types::transaction::{Transaction, TransactionKind};
use client::pages::TransactionList;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{FilterEditor, FilterField, ListPage},
    ui::{
        components::{card::Card, confirm, money},
        theme::Theme,
    },
};

/// Below this width rows become stacked cards.
const NARROW_WIDTH: u16 = 80;

pub fn render(frame: &mut Frame<'_>, area: Rect, page: &ListPage) {
    let theme = Theme::default();
    let list = &page.list;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_filter(frame, layout[0], list, page.filter.as_ref(), &theme);

    let title = list.kind().plural_label();
    if list.items.is_empty() {
        render_empty(frame, layout[1], list, title, &theme);
    } else if area.width < NARROW_WIDTH {
        render_cards(frame, layout[1], list, title, &theme);
    } else {
        render_table(frame, layout[1], list, title, &theme);
    }

    render_pagination(frame, layout[2], list, &theme);

    if list.pending_delete.is_some() {
        let message = format!(
            "Are you sure you want to delete this {}?",
            list.kind().label().to_lowercase()
        );
        confirm::render(frame, area, &message, &theme);
    }
}

fn render_filter(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &TransactionList,
    editor: Option<&FilterEditor>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editor.is_some() {
            theme.border_focused
        } else {
            theme.border
        }))
        .title(" Filter by date ");

    let line = match editor {
        Some(editor) => {
            let field = |label: &'static str, value: &str, focused: bool| {
                let style = if focused {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.dim)
                };
                let cursor = if focused { "│" } else { "" };
                vec![
                    Span::styled(label, style),
                    Span::styled(format!("{value}{cursor}"), Style::default().fg(theme.text)),
                ]
            };
            let mut spans = field("From: ", &editor.start, editor.focus == FilterField::Start);
            spans.push(Span::raw("   "));
            spans.extend(field("To: ", &editor.end, editor.focus == FilterField::End));
            if let Some(error) = editor.error {
                spans.push(Span::raw("   "));
                spans.push(Span::styled(error, Style::default().fg(theme.error)));
            }
            Line::from(spans)
        }
        None => {
            let fmt = |date: Option<chrono::NaiveDate>| {
                date.map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "any".to_string())
            };
            let mut spans = vec![
                Span::styled("From: ", Style::default().fg(theme.dim)),
                Span::raw(fmt(list.filter.start_date)),
                Span::raw("   "),
                Span::styled("To: ", Style::default().fg(theme.dim)),
                Span::raw(fmt(list.filter.end_date)),
            ];
            if let Some(error) = &list.error {
                spans.push(Span::raw("   "));
                spans.push(Span::styled(error.as_str(), Style::default().fg(theme.error)));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_empty(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &TransactionList,
    title: &str,
    theme: &Theme,
) {
    let message = if list.is_loading {
        "Loading...".to_string()
    } else {
        format!("No {} found", title.to_lowercase())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(theme.dim)))
            .block(Card::new(title, theme).block()),
        area,
    );
}

fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &TransactionList,
    title: &str,
    theme: &Theme,
) {
    let kind = list.kind();
    let header = Row::new(["Date", "Title", "Description", "Value"])
        .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));

    let rows = list.items.iter().map(|tx| {
        Row::new(vec![
            Line::from(tx.transaction_date.format("%b %d, %Y").to_string()),
            Line::from(tx.title.clone()),
            Line::from(Span::styled(
                tx.description.clone().unwrap_or_else(|| "-".to_string()),
                Style::default().fg(theme.dim),
            )),
            Line::from(money::transaction_amount(tx.value, kind, theme)).right_aligned(),
        ])
    });

    let widths = [
        Constraint::Length(13),
        Constraint::Percentage(35),
        Constraint::Min(10),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Card::new(title, theme).block())
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = TableState::default().with_selected(Some(list.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_cards(
    frame: &mut Frame<'_>,
    area: Rect,
    list: &TransactionList,
    title: &str,
    theme: &Theme,
) {
    let kind = list.kind();
    let items = list
        .items
        .iter()
        .map(|tx| card_item(tx, kind, theme))
        .collect::<Vec<_>>();

    let widget = List::new(items)
        .block(Card::new(title, theme).block())
        .highlight_style(Style::default().fg(theme.accent))
        .highlight_symbol("» ");

    let mut state = ListState::default().with_selected(Some(list.selected));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn card_item(tx: &Transaction, kind: TransactionKind, theme: &Theme) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                tx.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            money::transaction_amount(tx.value, kind, theme),
        ]),
        Line::from(Span::styled(
            tx.transaction_date.format("%b %d, %Y").to_string(),
            Style::default().fg(theme.dim),
        )),
    ];
    if let Some(description) = &tx.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn render_pagination(frame: &mut Frame<'_>, area: Rect, list: &TransactionList, theme: &Theme) {
    let page = &list.page;
    let total_pages = list.total_pages.max(1);
    let range = page
        .item_range(list.total_items)
        .map(|(first, last)| format!("{first}-{last} of {}", list.total_items))
        .unwrap_or_else(|| "0 of 0".to_string());

    let line = Line::from(vec![
        Span::styled("Page ", Style::default().fg(theme.dim)),
        Span::raw(format!("{} of {total_pages}", page.page())),
        Span::styled("   Rows ", Style::default().fg(theme.dim)),
        Span::raw(range),
        Span::styled("   Per page ", Style::default().fg(theme.dim)),
        Span::raw(page.page_size().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
