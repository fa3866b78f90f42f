//! Aggregate metrics over line items and cash-flow periods
//!
//! Pure functions: no I/O, no hidden state. Empty inputs yield zero sums,
//! except averages, which report [`FinancialsError::EmptyDataSet`] so callers
//! can show "no data" rather than a misleading 0%.

use crate::error::{FinancialsError, FinancialsResult};
use crate::models::{CashFlowPeriod, LineItem, Money, PeriodKind};

/// Sum of realized profit across all line items
pub fn compute_cumulative_profit(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::profit_total).sum()
}

/// Mean profit percentage across line items
///
/// Items without actual revenue have no defined percentage and are left out
/// of the mean. If no item remains, the result is `EmptyDataSet`.
pub fn compute_average_profitability(items: &[LineItem]) -> FinancialsResult<f64> {
    let percentages: Vec<f64> = items
        .iter()
        .filter_map(LineItem::profit_percentage)
        .collect();

    if percentages.is_empty() {
        return Err(FinancialsError::EmptyDataSet("average profitability"));
    }

    if percentages.len() < items.len() {
        tracing::debug!(
            skipped = items.len() - percentages.len(),
            "line items without actual revenue left out of average"
        );
    }

    Ok(percentages.iter().sum::<f64>() / percentages.len() as f64)
}

/// Profit vs. cost decomposition of the actual total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitabilitySplit {
    /// Profit share, clamped at zero
    pub profit: Money,
    /// Cost share, clamped at zero
    pub costs: Money,
    /// Signed profit before clamping
    pub raw_profit: Money,
}

impl ProfitabilitySplit {
    /// True when actuals fall short of the cost base, so the split has no
    /// meaningful non-negative decomposition
    pub fn is_degenerate(&self) -> bool {
        self.raw_profit.is_negative()
    }

    /// Sum of the displayed slices
    pub fn total(&self) -> Money {
        self.profit + self.costs
    }
}

/// Split the actual total into profit and the baseline cost
pub fn compute_profitability_split(total_actuals: Money, baseline_cost: Money) -> ProfitabilitySplit {
    let raw_profit = total_actuals - baseline_cost;
    let split = ProfitabilitySplit {
        profit: raw_profit.non_negative(),
        costs: baseline_cost.non_negative(),
        raw_profit,
    };

    if split.is_degenerate() {
        tracing::warn!(
            %total_actuals,
            %baseline_cost,
            "actuals below baseline cost; profitability split is degenerate"
        );
    }

    split
}

/// Summed cash flow over a set of periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CashFlowTotals {
    /// Sum of inflows
    pub total_inflow: Money,
    /// Sum of outflows, kept negative
    pub signed_outflow: Money,
    /// Sum of nets
    pub total_net: Money,
    /// Number of periods that contributed
    pub period_count: usize,
}

impl CashFlowTotals {
    /// Outflow as a positive magnitude, for display
    pub fn total_outflow(&self) -> Money {
        self.signed_outflow.abs()
    }

    /// Check if no period matched
    pub fn is_empty(&self) -> bool {
        self.period_count == 0
    }
}

/// Sum inflow, outflow and net over periods of the given kind, or all periods
pub fn aggregate_cash_flow(periods: &[CashFlowPeriod], kind: Option<PeriodKind>) -> CashFlowTotals {
    periods
        .iter()
        .filter(|p| kind.map_or(true, |k| p.kind == k))
        .fold(CashFlowTotals::default(), |mut acc, p| {
            acc.total_inflow += p.inflow;
            acc.signed_outflow += p.outflow;
            acc.total_net += p.net();
            acc.period_count += 1;
            acc
        })
}

/// Totals for all periods plus the actual/projected split shown under each card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashFlowBreakdown {
    pub all: CashFlowTotals,
    pub actual: CashFlowTotals,
    pub projected: CashFlowTotals,
}

/// Aggregate all periods, then each kind separately
pub fn cash_flow_breakdown(periods: &[CashFlowPeriod]) -> CashFlowBreakdown {
    CashFlowBreakdown {
        all: aggregate_cash_flow(periods, None),
        actual: aggregate_cash_flow(periods, Some(PeriodKind::Actual)),
        projected: aggregate_cash_flow(periods, Some(PeriodKind::Projected)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, SampleData};

    fn item(est_cost: i64, act_cost: i64, est_rev: i64, act_rev: i64) -> LineItem {
        LineItem::new(
            "Item",
            Money::from_euros(est_cost),
            Money::from_euros(act_cost),
            Money::from_euros(est_rev),
            Money::from_euros(act_rev),
        )
    }

    fn period(label: &str, inflow: i64, outflow: i64, kind: PeriodKind) -> CashFlowPeriod {
        CashFlowPeriod::new(label, Money::from_euros(inflow), Money::from_euros(outflow), kind)
            .unwrap()
    }

    #[test]
    fn test_cumulative_profit_sample() {
        let dataset = SampleData.load().unwrap();
        assert_eq!(
            compute_cumulative_profit(&dataset.line_items),
            Money::from_euros(44_500)
        );
    }

    #[test]
    fn test_cumulative_profit_matches_per_item_sum() {
        let items = vec![item(1, 100, 1, 250), item(1, 300, 1, 120), item(0, 0, 0, 0)];
        let expected: Money = items
            .iter()
            .map(|i| i.actual_revenue - i.actual_cost)
            .sum();
        assert_eq!(compute_cumulative_profit(&items), expected);
        assert_eq!(expected, Money::from_euros(-30));
    }

    #[test]
    fn test_cumulative_profit_empty() {
        assert_eq!(compute_cumulative_profit(&[]), Money::zero());
    }

    #[test]
    fn test_average_profitability_sample() {
        let dataset = SampleData.load().unwrap();
        let avg = compute_average_profitability(&dataset.line_items).unwrap();
        assert_eq!(format!("{:.1}", avg), "34.4");
    }

    #[test]
    fn test_average_profitability_is_mean_of_percentages() {
        let items = vec![item(0, 50, 0, 100), item(0, 75, 0, 100)];
        let avg = compute_average_profitability(&items).unwrap();
        assert!((avg - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_profitability_empty_is_no_data() {
        let err = compute_average_profitability(&[]).unwrap_err();
        assert!(err.is_empty_data_set());
    }

    #[test]
    fn test_average_profitability_skips_items_without_revenue() {
        let items = vec![item(0, 50, 0, 100), item(10, 10, 0, 0)];
        let avg = compute_average_profitability(&items).unwrap();
        assert!((avg - 50.0).abs() < 1e-9);

        let only_zero = vec![item(10, 10, 0, 0)];
        assert!(compute_average_profitability(&only_zero).is_err());
    }

    #[test]
    fn test_profitability_split() {
        let split =
            compute_profitability_split(Money::from_euros(137_000), Money::from_euros(100_000));
        assert_eq!(split.profit, Money::from_euros(37_000));
        assert_eq!(split.costs, Money::from_euros(100_000));
        assert!(!split.is_degenerate());
        assert_eq!(split.total(), Money::from_euros(137_000));
    }

    #[test]
    fn test_profitability_split_degenerate() {
        let split =
            compute_profitability_split(Money::from_euros(80_000), Money::from_euros(100_000));
        assert_eq!(split.profit, Money::zero());
        assert_eq!(split.raw_profit, Money::from_euros(-20_000));
        assert!(split.is_degenerate());
    }

    #[test]
    fn test_aggregate_cash_flow_two_periods() {
        let periods = vec![
            period("Jan", 15_000, -8_000, PeriodKind::Actual),
            period("Feb", 22_000, -12_000, PeriodKind::Actual),
        ];
        let totals = aggregate_cash_flow(&periods, None);
        assert_eq!(totals.total_inflow, Money::from_euros(37_000));
        assert_eq!(totals.total_outflow(), Money::from_euros(20_000));
        assert_eq!(totals.signed_outflow, Money::from_euros(-20_000));
        assert_eq!(totals.total_net, Money::from_euros(17_000));
    }

    #[test]
    fn test_aggregate_cash_flow_by_kind() {
        let dataset = SampleData.load().unwrap();
        let breakdown = cash_flow_breakdown(&dataset.cash_flow);

        assert_eq!(breakdown.all.total_inflow, Money::from_euros(393_000));
        assert_eq!(breakdown.all.total_outflow(), Money::from_euros(265_000));
        assert_eq!(breakdown.all.total_net, Money::from_euros(128_000));

        assert_eq!(breakdown.actual.total_inflow, Money::from_euros(148_000));
        assert_eq!(breakdown.actual.total_net, Money::from_euros(53_000));
        assert_eq!(breakdown.projected.total_inflow, Money::from_euros(245_000));
        assert_eq!(breakdown.projected.total_outflow(), Money::from_euros(170_000));
        assert_eq!(breakdown.actual.period_count, 6);
    }

    #[test]
    fn test_aggregate_cash_flow_no_match() {
        let periods = vec![period("Jan", 1, -1, PeriodKind::Actual)];
        let totals = aggregate_cash_flow(&periods, Some(PeriodKind::Projected));
        assert!(totals.is_empty());
        assert_eq!(totals.total_net, Money::zero());
    }
}
