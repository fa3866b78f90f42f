//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header with tabs, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line and section tabs
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title + tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Split an area into `count` equally wide cards
pub fn card_row(area: Rect, count: u16) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count as u32)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Layout for the overview section
pub struct OverviewLayout {
    /// Stat cards
    pub cards: Rect,
    /// Profitability gauge
    pub split: Rect,
    /// Net cash-flow trend chart
    pub trend: Rect,
}

impl OverviewLayout {
    /// Calculate overview layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Cards
                Constraint::Length(5), // Split gauge
                Constraint::Min(6),    // Trend chart
            ])
            .split(area);

        Self {
            cards: chunks[0],
            split: chunks[1],
            trend: chunks[2],
        }
    }
}

/// Layout for the estimates vs actuals section
pub struct EstimatesLayout {
    /// Estimated / actual summary cards
    pub cards: Rect,
    /// Active filter line
    pub filter: Rect,
    /// Line-item table
    pub table: Rect,
}

impl EstimatesLayout {
    /// Calculate estimates layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Cards
                Constraint::Length(1), // Filter
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            cards: chunks[0],
            filter: chunks[1],
            table: chunks[2],
        }
    }
}

/// Layout for the cash flow section
pub struct CashFlowLayout {
    /// Past / projected legend
    pub legend: Rect,
    /// Bar chart
    pub chart: Rect,
    /// Total cards
    pub totals: Rect,
    /// Liquidity note
    pub note: Rect,
}

impl CashFlowLayout {
    /// Calculate cash flow layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Legend
                Constraint::Min(8),    // Chart
                Constraint::Length(5), // Totals
                Constraint::Length(4), // Note
            ])
            .split(area);

        Self {
            legend: chunks[0],
            chart: chunks[1],
            totals: chunks[2],
            note: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
