//! Estimates vs Actuals view
//!
//! Summary cards for the two totals and the line-item table for the current
//! table view and column filter

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{ColumnFilter, TableView};
use crate::tui::app::App;
use crate::tui::layout::{card_row, EstimatesLayout};

use super::render_card;

/// Render the estimates vs actuals section
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = EstimatesLayout::new(area);

    render_cards(frame, app, layout.cards);
    render_filter_line(frame, app, layout.filter);
    render_table(frame, app, layout.table);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.projector.summary();
    let view = app.selection.table_view;
    let cards = card_row(area, 2);

    render_card(
        frame,
        cards[0],
        "Estimates",
        summary.total_estimates.to_string(),
        Some(hint_line('e', view == TableView::EstimatesOnly)),
        view == TableView::EstimatesOnly,
    );
    render_card(
        frame,
        cards[1],
        "Actuals",
        summary.total_actuals.to_string(),
        Some(hint_line('a', view == TableView::ActualsOnly)),
        view == TableView::ActualsOnly,
    );
}

fn hint_line(key: char, active: bool) -> Line<'static> {
    let text = if active {
        "showing (s: back to summary)".to_string()
    } else {
        format!("press {} to view", key)
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn render_filter_line(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.selection.column_filter;
    let mut spans = vec![Span::raw(" Columns: ")];

    for filter in ColumnFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(f/F)", Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let table = app
        .projector
        .project_table(app.selection.table_view, app.selection.column_filter);

    let block = Block::default()
        .title(format!(" {} ", table.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if table.is_empty() {
        let text = Paragraph::new("No line items found.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        table
            .headers()
            .into_iter()
            .map(|h| Cell::from(h).style(header_style)),
    )
    .height(1);

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::from(row.label.clone())];
            cells.extend(row.cells.iter().map(|(column, value)| {
                let color = if column.is_percentage() {
                    Color::Cyan
                } else {
                    Color::White
                };
                Cell::from(Line::from(value.clone()).right_aligned()).style(Style::default().fg(color))
            }));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Min(16)];
    widths.extend(table.columns.iter().map(|column| {
        if column.is_percentage() {
            Constraint::Length(8)
        } else {
            Constraint::Length(16)
        }
    }));

    let widget = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(widget, area);
}
