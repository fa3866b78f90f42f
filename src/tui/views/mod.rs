//! TUI Views module
//!
//! One view per dashboard section, plus the header tabs and status bar.

pub mod cash_flow;
pub mod estimates;
pub mod overview;
pub mod status_bar;
pub mod tabs;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Section;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.header);

    match app.selection.active_section {
        Section::Overview => overview::render(frame, app, layout.main),
        Section::EstimatesActuals => estimates::render(frame, app, layout.main),
        Section::CashFlow => cash_flow::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

/// A bordered card with a title, a bold value and an optional caption
pub(crate) fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    caption: Option<Line<'static>>,
    highlighted: bool,
) {
    let border_color = if highlighted { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut lines = vec![Line::from(Span::styled(
        value,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(caption) = caption {
        lines.push(caption);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
