//! Cash Flow Report
//!
//! Per-period inflow/outflow/net, the twelve-month totals with their
//! past/projected split, and the liquidity note.

use crate::display::report::separator;
use crate::display::table::render_cash_flow_table;
use crate::models::{CashFlowPeriod, LiquidityAssessment, PeriodKind};
use crate::services::chart::timeline_legend;
use crate::services::{CashFlowBreakdown, CashFlowTotals, MetricsProjector};

const WIDTH: usize = 70;

/// Cash Flow Report
#[derive(Debug, Clone)]
pub struct CashFlowReport {
    /// Periods shown in the table
    pub periods: Vec<CashFlowPeriod>,
    /// Kind restriction applied to the table, if any
    pub kind: Option<PeriodKind>,
    /// Totals over all periods and per kind
    pub breakdown: CashFlowBreakdown,
    /// Legend lines for past vs. projected periods
    pub legend: Vec<String>,
    /// Liquidity note
    pub liquidity: LiquidityAssessment,
}

impl CashFlowReport {
    /// Generate the report, optionally restricting the table to one kind
    ///
    /// Totals always cover every period, like the dashboard cards.
    pub fn generate(projector: &MetricsProjector, kind: Option<PeriodKind>) -> Self {
        let periods = projector
            .periods()
            .iter()
            .filter(|p| kind.map_or(true, |k| p.kind == k))
            .cloned()
            .collect();

        Self {
            periods,
            kind,
            breakdown: projector.cash_flow_breakdown(),
            legend: timeline_legend(projector.periods()),
            liquidity: projector.liquidity_risk().clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Cash Flow Analysis\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for line in &self.legend {
            output.push_str(&format!("  {}\n", line));
        }
        output.push('\n');

        output.push_str(&render_cash_flow_table(&self.periods));
        output.push_str("\n\n");

        let months = self.breakdown.all.period_count;
        output.push_str(&format_total_line(
            &format!("Total Inflows ({} months)", months),
            &self.breakdown,
            |t| t.total_inflow.to_string(),
        ));
        output.push_str(&format_total_line(
            &format!("Total Outflows ({} months)", months),
            &self.breakdown,
            |t| t.total_outflow().to_string(),
        ));
        output.push_str(&format_total_line(
            &format!("Net Cash Flow ({} months)", months),
            &self.breakdown,
            |t| t.total_net.to_string(),
        ));
        output.push('\n');

        output.push_str("Liquidity Analysis\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if let Some(period) = &self.liquidity.at_risk_period {
            output.push_str(&format!("At risk: {}\n", period));
        }
        output.push_str(&self.liquidity.reason);
        output.push('\n');

        output
    }
}

/// "Label: total (Past: … | Projected: …)"
fn format_total_line(
    label: &str,
    breakdown: &CashFlowBreakdown,
    value: impl Fn(&CashFlowTotals) -> String,
) -> String {
    format!(
        "{:<28} {:>16}   Past: {} | Projected: {}\n",
        label,
        value(&breakdown.all),
        value(&breakdown.actual),
        value(&breakdown.projected)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, SampleData};

    #[test]
    fn test_cash_flow_report() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let text = CashFlowReport::generate(&projector, None).format_terminal();

        assert!(text.contains("Past Performance (Jan-Jun)"));
        assert!(text.contains("Future Projections (Jul-Dec)"));
        assert!(text.contains("Total Inflows (12 months)"));
        assert!(text.contains("393.000,00 €"));
        assert!(text.contains("Past: 95.000,00 € | Projected: 170.000,00 €"));
        assert!(text.contains("128.000,00 €"));
        assert!(text.contains("At risk: October"));
    }

    #[test]
    fn test_kind_filter_limits_table_only() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let report = CashFlowReport::generate(&projector, Some(PeriodKind::Actual));

        assert_eq!(report.periods.len(), 6);
        assert_eq!(report.breakdown.all.period_count, 12);
    }
}
