//! Overview view
//!
//! Headline cards, the profitability split gauge and the net cash-flow trend

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, Gauge, GraphType},
    Frame,
};

use crate::display::report::{format_percentage, format_trend, trend_arrow};
use crate::models::TrendDirection;
use crate::services::chart::{net_trend_points, ChartSeries};
use crate::tui::app::App;
use crate::tui::layout::{card_row, OverviewLayout};

use super::render_card;

/// Render the overview section
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = OverviewLayout::new(area);

    render_cards(frame, app, layout.cards);
    render_split(frame, app, layout.split);
    render_trend(frame, app, layout.trend);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = app.projector.overview();
    let cards = card_row(area, 4);

    render_card(
        frame,
        cards[0],
        "Total Estimates",
        metrics.total_estimates.to_string(),
        None,
        false,
    );

    let trend_line = metrics.trend.map(|trend| {
        let color = match trend.direction {
            TrendDirection::Up => Color::Green,
            TrendDirection::Down => Color::Red,
            TrendDirection::Flat => Color::Gray,
        };
        Line::from(Span::styled(
            format!("{} {} vs estimate", trend_arrow(trend.direction), format_trend(&trend)),
            Style::default().fg(color),
        ))
    });
    render_card(
        frame,
        cards[1],
        "Total Actuals",
        metrics.total_actuals.to_string(),
        trend_line,
        false,
    );

    render_card(
        frame,
        cards[2],
        "Cumulative Profit",
        metrics.cumulative_profit.to_string(),
        None,
        false,
    );

    let average = metrics
        .average_profitability
        .map(format_percentage)
        .unwrap_or_else(|| "no data".to_string());
    render_card(frame, cards[3], "Avg Profitability", average, None, false);
}

fn render_split(frame: &mut Frame, app: &App, area: Rect) {
    let split = app.projector.profitability_split();
    let total = split.total();

    let ratio = if total.is_positive() {
        (split.profit.as_euros_f64() / total.as_euros_f64()).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let label = if split.is_degenerate() {
        format!("Profit {} (actuals below cost base by {})", split.profit, split.raw_profit.abs())
    } else {
        format!("Profit {}  |  Costs {}", split.profit, split.costs)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Profitability Breakdown ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Red))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_trend(frame: &mut Frame, app: &App, area: Rect) {
    let periods = app.projector.periods();
    let points = net_trend_points(periods);

    let block = Block::default()
        .title(" Recent Cash Flow Trend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let (min_y, max_y) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let max_x = (points.len().saturating_sub(1)) as f64;

    let x_labels: Vec<Span> = match (periods.first(), periods.last()) {
        (Some(first), Some(last)) => vec![
            Span::raw(first.period.clone()),
            Span::raw(last.period.clone()),
        ],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Span::raw(format!("{:.0}", min_y)),
        Span::raw(format!("{:.0}", max_y)),
    ];

    let dataset = ChartDataset::default()
        .name(ChartSeries::Net.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min_y, max_y.max(min_y + 1.0)])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
