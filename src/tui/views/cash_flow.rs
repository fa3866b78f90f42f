//! Cash flow view
//!
//! Grouped inflow/outflow/net bars per period, the past/projected legend,
//! the total cards and the liquidity note

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::report::format_compact;
use crate::models::{CashFlowPeriod, Money};
use crate::services::chart::{timeline_legend, ChartSeries};
use crate::services::CashFlowTotals;
use crate::tui::app::App;
use crate::tui::layout::{card_row, CashFlowLayout};

use super::render_card;

/// Render the cash flow section
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = CashFlowLayout::new(area);

    render_legend(frame, app, layout.legend);
    render_chart(frame, app, layout.chart);
    render_totals(frame, app, layout.totals);
    render_note(frame, app, layout.note);
}

fn series_color(series: ChartSeries, projected: bool) -> Style {
    let color = match series {
        ChartSeries::Inflow => Color::Green,
        ChartSeries::Outflow => Color::Red,
        ChartSeries::Net => Color::Blue,
    };
    let style = Style::default().fg(color);
    if projected {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for series in ChartSeries::ALL {
        spans.push(Span::styled("■ ", series_color(series, false)));
        spans.push(Span::raw(format!("{}  ", series.label())));
    }
    for (i, entry) in timeline_legend(app.projector.periods()).into_iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(format!("{} ", entry), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Height and label for each series bar in one period
fn bar_entries(period: &CashFlowPeriod) -> Vec<(ChartSeries, u64, String)> {
    ChartSeries::ALL
        .iter()
        .map(|&series| {
            (
                series,
                bar_height(series.value(period)),
                format_compact(series.display_amount(period)),
            )
        })
        .collect()
}

/// Bars carry magnitudes; the chart cannot draw below zero
fn period_group(period: &CashFlowPeriod) -> BarGroup<'static> {
    let projected = period.is_projected();
    let bars: Vec<Bar> = bar_entries(period)
        .into_iter()
        .map(|(series, height, label)| {
            Bar::default()
                .value(height)
                .text_value(label)
                .style(series_color(series, projected))
        })
        .collect();

    let label_style = if projected {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    BarGroup::default()
        .label(Line::styled(period.period.clone(), label_style))
        .bars(&bars)
}

fn bar_height(value: Money) -> u64 {
    value.abs().euros().unsigned_abs()
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Cash Flow ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for period in app.projector.periods() {
        chart = chart.data(period_group(period));
    }

    frame.render_widget(chart, area);
}

fn breakdown_line(
    actual: &CashFlowTotals,
    projected: &CashFlowTotals,
    value: impl Fn(&CashFlowTotals) -> Money,
) -> Line<'static> {
    Line::from(Span::styled(
        format!("Past: {} | Projected: {}", value(actual), value(projected)),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_totals(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = app.projector.cash_flow_breakdown();
    let months = breakdown.all.period_count;
    let cards = card_row(area, 3);

    render_card(
        frame,
        cards[0],
        &format!("Total Inflows ({} months)", months),
        breakdown.all.total_inflow.to_string(),
        Some(breakdown_line(&breakdown.actual, &breakdown.projected, |t| {
            t.total_inflow
        })),
        false,
    );
    render_card(
        frame,
        cards[1],
        &format!("Total Outflows ({} months)", months),
        breakdown.all.total_outflow().to_string(),
        Some(breakdown_line(&breakdown.actual, &breakdown.projected, |t| {
            t.total_outflow()
        })),
        false,
    );
    render_card(
        frame,
        cards[2],
        &format!("Net Cash Flow ({} months)", months),
        breakdown.all.total_net.to_string(),
        Some(breakdown_line(&breakdown.actual, &breakdown.projected, |t| {
            t.total_net
        })),
        false,
    );
}

fn render_note(frame: &mut Frame, app: &App, area: Rect) {
    let liquidity = app.projector.liquidity_risk();
    let (title, color) = if liquidity.has_risk() {
        (" Liquidity Risk ", Color::Yellow)
    } else {
        (" Liquidity ", Color::Green)
    };

    let mut lines = Vec::new();
    if let Some(period) = &liquidity.at_risk_period {
        lines.push(Line::from(Span::styled(
            format!("At risk: {}", period),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(liquidity.reason.clone()));

    let note = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(note, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;

    #[test]
    fn test_bar_height_uses_magnitude() {
        assert_eq!(bar_height(Money::from_euros(-32_000)), 32_000);
        assert_eq!(bar_height(Money::from_euros(15_000)), 15_000);
    }

    #[test]
    fn test_bar_entries_label_outflow_as_magnitude() {
        let period = CashFlowPeriod::new(
            "Oct",
            Money::from_euros(40_000),
            Money::from_euros(-45_000),
            PeriodKind::Projected,
        )
        .unwrap();

        let entries = bar_entries(&period);
        assert_eq!(
            entries,
            vec![
                (ChartSeries::Inflow, 40_000, "40k".to_string()),
                (ChartSeries::Outflow, 45_000, "45k".to_string()),
                (ChartSeries::Net, 5_000, "-5k".to_string()),
            ]
        );
    }

    #[test]
    fn test_chart_draws_unsigned_outflow_labels() {
        use ratatui::{backend::TestBackend, Terminal};

        let period = CashFlowPeriod::new(
            "Jul",
            Money::from_euros(25_000),
            Money::from_euros(-32_000),
            PeriodKind::Projected,
        )
        .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        terminal
            .draw(|frame| {
                let chart = BarChart::default()
                    .bar_width(5)
                    .bar_gap(1)
                    .data(period_group(&period));
                frame.render_widget(chart, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("25k"));
        assert!(screen.contains("32k"));
        assert!(!screen.contains("-32k"));
        assert!(screen.contains("-7k"));
        assert!(screen.contains("Jul"));
    }
}
