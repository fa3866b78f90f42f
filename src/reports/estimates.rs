//! Estimates vs Actuals Report
//!
//! The two summary figures and the line-item table for a table view and
//! column filter.

use crate::display::report::separator;
use crate::display::table::render_projected_table;
use crate::models::{ColumnFilter, SummaryTotals, TableView};
use crate::services::{MetricsProjector, ProjectedTable};

/// Estimates vs Actuals Report
#[derive(Debug, Clone)]
pub struct EstimatesReport {
    /// Total estimates and actuals
    pub summary: SummaryTotals,
    /// Projected line-item table
    pub table: ProjectedTable,
}

impl EstimatesReport {
    /// Generate the report for a table view and column filter
    pub fn generate(projector: &MetricsProjector, view: TableView, filter: ColumnFilter) -> Self {
        Self {
            summary: *projector.summary(),
            table: projector.project_table(view, filter),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Financial Summary\n");
        output.push_str(&separator(40));
        output.push('\n');

        let marker = |view: TableView| if self.table.view == view { "▶" } else { " " };
        output.push_str(&format!(
            "{} Estimates  {:>16}\n",
            marker(TableView::EstimatesOnly),
            self.summary.total_estimates
        ));
        output.push_str(&format!(
            "{} Actuals    {:>16}\n",
            marker(TableView::ActualsOnly),
            self.summary.total_actuals
        ));
        output.push('\n');

        output.push_str(&format!(
            "{}  [{}]\n",
            self.table.title,
            self.table.filter.label()
        ));
        output.push_str(&render_projected_table(&self.table));
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, SampleData};

    #[test]
    fn test_estimates_report() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let report = EstimatesReport::generate(&projector, TableView::EstimatesOnly, ColumnFilter::All);
        let text = report.format_terminal();

        assert!(text.contains("Estimated Values  [All Columns]"));
        assert!(text.contains("▶ Estimates"));
        assert!(text.contains("Est Profit"));
        assert!(text.contains("20.000,00 €"));
        assert!(!text.contains("Act Cost"));
    }

    #[test]
    fn test_summary_view_marks_nothing() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let report = EstimatesReport::generate(&projector, TableView::Summary, ColumnFilter::ProfitOnly);
        let text = report.format_terminal();

        assert!(!text.contains('▶'));
        assert!(text.contains("Item Line Details  [Profit Only]"));
        assert!(text.contains("47.4%"));
    }
}
