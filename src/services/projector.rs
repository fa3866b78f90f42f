//! Metrics projector
//!
//! Derives every displayed figure from a loaded [`Dataset`] and the current
//! view selection. Holds no state beyond a borrowed data set, so repeated
//! calls with the same inputs give the same output.

use crate::data::Dataset;
use crate::error::FinancialsResult;
use crate::models::{
    CashFlowPeriod, ColumnFilter, ColumnId, LineItem, LiquidityAssessment, Money, PeriodKind,
    SummaryTotals, TableView, Trend, LABEL_COLUMN_HEADER,
};

use super::columns::{project_row, resolve_visible_columns};
use super::metrics::{
    aggregate_cash_flow, cash_flow_breakdown, compute_average_profitability,
    compute_cumulative_profit, compute_profitability_split, CashFlowBreakdown, CashFlowTotals,
    ProfitabilitySplit,
};

/// Headline numbers for the overview cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewMetrics {
    pub total_estimates: Money,
    pub total_actuals: Money,
    /// Actuals vs. estimate, absent if nothing was estimated
    pub trend: Option<Trend>,
    pub cumulative_profit: Money,
    /// Mean profit percentage, absent when no line item has revenue
    pub average_profitability: Option<f64>,
}

/// One projected table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    /// Line item label (first column)
    pub label: String,
    /// Formatted values for the visible columns, in order
    pub cells: Vec<(ColumnId, String)>,
}

/// The line-item table as it should be displayed for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTable {
    pub title: &'static str,
    pub view: TableView,
    pub filter: ColumnFilter,
    pub columns: &'static [ColumnId],
    pub rows: Vec<ProjectedRow>,
}

impl ProjectedTable {
    /// Header row including the leading label column
    pub fn headers(&self) -> Vec<&'static str> {
        std::iter::once(LABEL_COLUMN_HEADER)
            .chain(self.columns.iter().map(|c| c.header(self.view)))
            .collect()
    }

    /// Check if there are no rows to show
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derives display values from a data set
#[derive(Debug, Clone, Copy)]
pub struct MetricsProjector<'a> {
    dataset: &'a Dataset,
}

impl<'a> MetricsProjector<'a> {
    /// Create a projector over a loaded data set
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// The underlying data set
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Summary totals as supplied
    pub fn summary(&self) -> &'a SummaryTotals {
        &self.dataset.summary
    }

    /// Line items in display order
    pub fn line_items(&self) -> &'a [LineItem] {
        &self.dataset.line_items
    }

    /// Cash-flow periods in display order
    pub fn periods(&self) -> &'a [CashFlowPeriod] {
        &self.dataset.cash_flow
    }

    /// Sum of realized profit over all line items
    pub fn cumulative_profit(&self) -> Money {
        compute_cumulative_profit(&self.dataset.line_items)
    }

    /// Mean profit percentage over line items
    pub fn average_profitability(&self) -> FinancialsResult<f64> {
        compute_average_profitability(&self.dataset.line_items)
    }

    /// Profit vs. baseline cost split of the actual total
    pub fn profitability_split(&self) -> ProfitabilitySplit {
        compute_profitability_split(self.dataset.summary.total_actuals, self.dataset.baseline_cost)
    }

    /// Actuals vs. estimates trend
    pub fn estimate_trend(&self) -> Option<Trend> {
        self.dataset.summary.trend()
    }

    /// Headline figures for the overview section
    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics {
            total_estimates: self.dataset.summary.total_estimates,
            total_actuals: self.dataset.summary.total_actuals,
            trend: self.estimate_trend(),
            cumulative_profit: self.cumulative_profit(),
            average_profitability: self.average_profitability().ok(),
        }
    }

    /// Cash-flow totals, optionally restricted to one kind of period
    pub fn cash_flow_totals(&self, kind: Option<PeriodKind>) -> CashFlowTotals {
        aggregate_cash_flow(&self.dataset.cash_flow, kind)
    }

    /// Totals for all periods and for each kind
    pub fn cash_flow_breakdown(&self) -> CashFlowBreakdown {
        cash_flow_breakdown(&self.dataset.cash_flow)
    }

    /// The liquidity note shipped with the data
    pub fn liquidity_risk(&self) -> &'a LiquidityAssessment {
        &self.dataset.liquidity
    }

    /// Visible value columns for a selection
    pub fn visible_columns(&self, view: TableView, filter: ColumnFilter) -> &'static [ColumnId] {
        resolve_visible_columns(view, filter)
    }

    /// Formatted values of one item for a selection
    pub fn project_row(
        &self,
        item: &LineItem,
        view: TableView,
        filter: ColumnFilter,
    ) -> Vec<(ColumnId, String)> {
        project_row(item, view, filter)
    }

    /// The full table for a selection
    pub fn project_table(&self, view: TableView, filter: ColumnFilter) -> ProjectedTable {
        let rows = self
            .line_items()
            .iter()
            .map(|item| ProjectedRow {
                label: item.label.clone(),
                cells: self.project_row(item, view, filter),
            })
            .collect();

        ProjectedTable {
            title: view.title(),
            view,
            filter,
            columns: self.visible_columns(view, filter),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, SampleData};
    use crate::models::TrendDirection;

    #[test]
    fn test_overview_metrics() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let overview = projector.overview();

        assert_eq!(overview.total_estimates, Money::from_euros(125_000));
        assert_eq!(overview.total_actuals, Money::from_euros(137_000));
        assert_eq!(overview.cumulative_profit, Money::from_euros(44_500));
        assert_eq!(
            format!("{:.1}", overview.average_profitability.unwrap()),
            "34.4"
        );

        let trend = overview.trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(format!("{:.1}", trend.percentage), "9.6");
    }

    #[test]
    fn test_overview_without_line_items() {
        let mut dataset = SampleData.load().unwrap();
        dataset.line_items.clear();
        let projector = MetricsProjector::new(&dataset);

        let overview = projector.overview();
        assert_eq!(overview.cumulative_profit, Money::zero());
        assert_eq!(overview.average_profitability, None);
        assert!(projector.project_table(TableView::Summary, ColumnFilter::All).is_empty());
    }

    #[test]
    fn test_project_table() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let table = projector.project_table(TableView::ActualsOnly, ColumnFilter::All);

        assert_eq!(table.title, "Actual Values");
        assert_eq!(
            table.headers(),
            vec!["Item Line", "Act Cost", "Act Revenue", "Act Profit"]
        );
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].label, "Testing & QA");
        assert_eq!(
            table.rows[1].cells[2],
            (ColumnId::ActProfit, "10.400,00 €".to_string())
        );
    }

    #[test]
    fn test_row_cells_follow_visible_columns() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let items = projector.line_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "Development Phase 1");

        let columns = projector.visible_columns(TableView::Summary, ColumnFilter::RevenueOnly);
        assert_eq!(columns, &[ColumnId::EstRev, ColumnId::ActRev]);

        let cells = projector.project_row(&items[0], TableView::Summary, ColumnFilter::RevenueOnly);
        let ids: Vec<ColumnId> = cells.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, columns);
    }

    #[test]
    fn test_profitability_split_uses_baseline() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let split = projector.profitability_split();
        assert_eq!(split.profit, Money::from_euros(37_000));

        let shifted = dataset.clone().with_baseline_cost(Money::from_euros(150_000));
        assert!(MetricsProjector::new(&shifted).profitability_split().is_degenerate());
    }

    #[test]
    fn test_liquidity_risk_is_static_annotation() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let risk = projector.liquidity_risk();
        assert!(risk.has_risk());
        assert!(risk.reason.contains("October"));
    }

    #[test]
    fn test_cash_flow_totals_by_kind() {
        let dataset = SampleData.load().unwrap();
        let projector = MetricsProjector::new(&dataset);
        let projected = projector.cash_flow_totals(Some(PeriodKind::Projected));
        assert_eq!(projected.total_net, Money::from_euros(75_000));
    }
}
