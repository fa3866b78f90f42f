//! Overview Report
//!
//! Headline cards, the profitability split, and the net cash-flow trend.

use chrono::NaiveDate;

use crate::display::report::{double_separator, format_bar, format_percentage, format_trend, separator, trend_arrow};
use crate::models::Money;
use crate::services::chart::profitability_slices;
use crate::services::{MetricsProjector, OverviewMetrics, ProfitabilitySplit};

const WIDTH: usize = 70;
const BAR_WIDTH: usize = 30;

/// Overview Report
#[derive(Debug, Clone)]
pub struct OverviewReport {
    /// Project name for the header
    pub project_name: String,
    /// Date the figures were refreshed
    pub last_updated: NaiveDate,
    /// Headline figures
    pub metrics: OverviewMetrics,
    /// Profit vs. cost split
    pub split: ProfitabilitySplit,
    /// Net cash flow per period
    pub net_trend: Vec<(String, Money)>,
}

impl OverviewReport {
    /// Generate the overview report
    pub fn generate(projector: &MetricsProjector) -> Self {
        let dataset = projector.dataset();
        Self {
            project_name: dataset.project_name.clone(),
            last_updated: dataset.last_updated,
            metrics: projector.overview(),
            split: projector.profitability_split(),
            net_trend: projector
                .periods()
                .iter()
                .map(|p| (p.period.clone(), p.net()))
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format_title(&self.project_name, self.last_updated));

        // Key metrics
        output.push_str(&format!(
            "Total Estimates:    {:>16}\n",
            self.metrics.total_estimates
        ));
        output.push_str(&format!(
            "Total Actuals:      {:>16}",
            self.metrics.total_actuals
        ));
        if let Some(trend) = &self.metrics.trend {
            output.push_str(&format!(
                "  {} {} vs estimate",
                trend_arrow(trend.direction),
                format_trend(trend)
            ));
        }
        output.push('\n');
        output.push_str(&format!(
            "Cumulative Profit:  {:>16}\n",
            self.metrics.cumulative_profit
        ));
        let avg = self
            .metrics
            .average_profitability
            .map(format_percentage)
            .unwrap_or_else(|| "no data".to_string());
        output.push_str(&format!("Avg Profitability:  {:>16}\n", avg));
        output.push('\n');

        // Profitability breakdown
        output.push_str("Profitability Breakdown\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let total = self.split.total().as_euros_f64();
        for slice in profitability_slices(&self.split) {
            output.push_str(&format!(
                "{:<8} {} {:>16}\n",
                slice.name,
                format_bar(slice.value.as_euros_f64(), total, BAR_WIDTH),
                slice.value
            ));
        }
        if self.split.is_degenerate() {
            output.push_str(&format!(
                "Actuals fall short of the cost base by {}\n",
                self.split.raw_profit.abs()
            ));
        }
        output.push('\n');

        // Net cash flow trend
        output.push_str("Recent Cash Flow Trend\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let max_net = self
            .net_trend
            .iter()
            .map(|(_, net)| net.as_euros_f64())
            .fold(0.0_f64, f64::max);
        for (period, net) in &self.net_trend {
            output.push_str(&format!(
                "{:<8} {} {:>16}\n",
                period,
                format_bar(net.as_euros_f64(), max_net, BAR_WIDTH),
                net
            ));
        }

        output
    }
}

/// Dashboard header shared by all reports
pub fn format_title(project_name: &str, last_updated: NaiveDate) -> String {
    format!(
        "{} - Financials\nFinancial monitoring and analysis dashboard\nLast Updated: {}\n{}\n",
        project_name,
        last_updated.format("%B %-d, %Y"),
        double_separator(WIDTH)
    )
}
