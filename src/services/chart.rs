//! Chart-ready projections of the cash-flow and profitability data
//!
//! These values feed whatever draws the charts (the TUI, or anything else
//! consuming the library). Outflows stay negative in the series data; only
//! tooltip text shows their magnitude.

use crate::models::{CashFlowPeriod, Money, PeriodKind};

use super::metrics::ProfitabilitySplit;

/// A bar/line series in the cash-flow chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSeries {
    Inflow,
    Outflow,
    Net,
}

impl ChartSeries {
    /// All series in drawing order
    pub const ALL: [ChartSeries; 3] = [Self::Inflow, Self::Outflow, Self::Net];

    /// Legend/tooltip name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inflow => "Inflow",
            Self::Outflow => "Outflow",
            Self::Net => "Net Flow",
        }
    }

    /// Signed value of this series for one period
    pub fn value(&self, period: &CashFlowPeriod) -> Money {
        match self {
            Self::Inflow => period.inflow,
            Self::Outflow => period.outflow,
            Self::Net => period.net(),
        }
    }
}

impl ChartSeries {
    /// Amount shown in labels and tables: outflow as a magnitude, the rest signed
    pub fn display_amount(&self, period: &CashFlowPeriod) -> Money {
        match self {
            Self::Outflow => self.value(period).abs(),
            _ => self.value(period),
        }
    }
}

/// Tooltip body for a series value: series name and the formatted magnitude
pub fn tooltip_entry(series: ChartSeries, value: Money) -> (&'static str, String) {
    (series.label(), value.abs().to_string())
}

/// Tooltip heading for a period, e.g. "Oct (Projected)"
///
/// The kind is read from the record with that label; unknown labels are
/// treated as actual.
pub fn period_heading(periods: &[CashFlowPeriod], label: &str) -> String {
    let kind = periods
        .iter()
        .find(|p| p.period == label)
        .map(|p| p.kind)
        .unwrap_or(PeriodKind::Actual);
    format!("{} ({})", label, kind.label())
}

/// First and last period label of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSpan {
    pub first: String,
    pub last: String,
}

impl PeriodSpan {
    /// "Jan-Jun", or just "Jan" for a single period
    pub fn range_label(&self) -> String {
        if self.first == self.last {
            self.first.clone()
        } else {
            format!("{}-{}", self.first, self.last)
        }
    }
}

/// Span of the periods of the given kind, `None` when there are none
pub fn period_span(periods: &[CashFlowPeriod], kind: PeriodKind) -> Option<PeriodSpan> {
    let mut matching = periods.iter().filter(|p| p.kind == kind);
    let first = matching.next()?;
    let last = matching.last().unwrap_or(first);
    Some(PeriodSpan {
        first: first.period.clone(),
        last: last.period.clone(),
    })
}

/// Legend entries distinguishing past from projected periods
pub fn timeline_legend(periods: &[CashFlowPeriod]) -> Vec<String> {
    let mut legend = Vec::new();
    if let Some(span) = period_span(periods, PeriodKind::Actual) {
        legend.push(format!("Past Performance ({})", span.range_label()));
    }
    if let Some(span) = period_span(periods, PeriodKind::Projected) {
        legend.push(format!("Future Projections ({})", span.range_label()));
    }
    legend
}

/// `(index, net in euros)` points for the net cash-flow trend line
pub fn net_trend_points(periods: &[CashFlowPeriod]) -> Vec<(f64, f64)> {
    periods
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.net().as_euros_f64()))
        .collect()
}

/// One slice of the profitability pie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: Money,
}

/// Profit and cost slices, in drawing order
pub fn profitability_slices(split: &ProfitabilitySplit) -> [PieSlice; 2] {
    [
        PieSlice {
            name: "Profit",
            value: split.profit,
        },
        PieSlice {
            name: "Costs",
            value: split.costs,
        },
    ]
}
