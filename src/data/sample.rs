//! Compiled-in sample figures for "Project X"

use chrono::NaiveDate;

use super::{DataSource, Dataset};
use crate::error::{FinancialsError, FinancialsResult};
use crate::models::{
    CashFlowPeriod, LineItem, LiquidityAssessment, Money, PeriodKind, SummaryTotals,
};

/// (label, estimated cost, actual cost, estimated revenue, actual revenue)
const LINE_ITEMS: &[(&str, i64, i64, i64, i64)] = &[
    ("Development Phase 1", 45_000, 48_500, 65_000, 68_000),
    ("Testing & QA", 25_000, 27_800, 35_000, 38_200),
    ("Cloud Deployment", 15_000, 16_200, 25_000, 30_800),
];

/// (month, inflow, outflow, kind)
const CASH_FLOW: &[(&str, i64, i64, PeriodKind)] = &[
    ("Jan", 15_000, -8_000, PeriodKind::Actual),
    ("Feb", 22_000, -12_000, PeriodKind::Actual),
    ("Mar", 18_000, -15_000, PeriodKind::Actual),
    ("Apr", 28_000, -18_000, PeriodKind::Actual),
    ("May", 35_000, -22_000, PeriodKind::Actual),
    ("Jun", 30_000, -20_000, PeriodKind::Actual),
    ("Jul", 32_000, -21_000, PeriodKind::Projected),
    ("Aug", 38_000, -25_000, PeriodKind::Projected),
    ("Sep", 42_000, -28_000, PeriodKind::Projected),
    ("Oct", 45_000, -32_000, PeriodKind::Projected),
    ("Nov", 40_000, -29_000, PeriodKind::Projected),
    ("Dec", 48_000, -35_000, PeriodKind::Projected),
];

const TOTAL_ESTIMATES: i64 = 125_000;
const TOTAL_ACTUALS: i64 = 137_000;
const BASELINE_COST: i64 = 100_000;

const LIQUIDITY_PERIOD: &str = "October";
const LIQUIDITY_REASON: &str = "Based on projections, potential liquidity challenges may occur \
     in October due to increased outflows. Consider adjusting payment schedules or securing \
     additional funding to maintain optimal cash flow.";

/// The built-in demonstration data set
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl DataSource for SampleData {
    fn load(&self) -> FinancialsResult<Dataset> {
        let line_items = LINE_ITEMS
            .iter()
            .map(|&(label, est_cost, act_cost, est_rev, act_rev)| {
                LineItem::new(
                    label,
                    Money::from_euros(est_cost),
                    Money::from_euros(act_cost),
                    Money::from_euros(est_rev),
                    Money::from_euros(act_rev),
                )
            })
            .collect();

        let cash_flow = CASH_FLOW
            .iter()
            .map(|&(month, inflow, outflow, kind)| {
                CashFlowPeriod::new(
                    month,
                    Money::from_euros(inflow),
                    Money::from_euros(outflow),
                    kind,
                )
            })
            .collect::<FinancialsResult<Vec<_>>>()?;

        let last_updated = NaiveDate::from_ymd_opt(2025, 7, 1)
            .ok_or_else(|| FinancialsError::Validation("Invalid last-updated date".into()))?;

        let dataset = Dataset {
            project_name: "Project X".to_string(),
            last_updated,
            summary: SummaryTotals::new(
                Money::from_euros(TOTAL_ESTIMATES),
                Money::from_euros(TOTAL_ACTUALS),
            ),
            line_items,
            cash_flow,
            baseline_cost: Money::from_euros(BASELINE_COST),
            liquidity: LiquidityAssessment::flagged(LIQUIDITY_PERIOD, LIQUIDITY_REASON),
        };

        dataset.validate()?;
        tracing::debug!(
            line_items = dataset.line_items.len(),
            periods = dataset.cash_flow.len(),
            "loaded sample data set"
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let dataset = SampleData.load().unwrap();
        assert_eq!(dataset.line_items.len(), 3);
        assert_eq!(dataset.cash_flow.len(), 12);
        assert_eq!(dataset.summary.total_actuals, Money::from_euros(137_000));
        assert_eq!(dataset.baseline_cost, Money::from_euros(100_000));
    }

    #[test]
    fn test_first_six_periods_are_actual() {
        let dataset = SampleData.load().unwrap();
        assert!(dataset.cash_flow[..6].iter().all(|p| p.is_actual()));
        assert!(dataset.cash_flow[6..].iter().all(|p| p.is_projected()));
    }

    #[test]
    fn test_sample_nets_match_published_figures() {
        let dataset = SampleData.load().unwrap();
        let nets: Vec<i64> = dataset.cash_flow.iter().map(|p| p.net().euros()).collect();
        assert_eq!(
            nets,
            vec![
                7_000, 10_000, 3_000, 10_000, 13_000, 10_000, 11_000, 13_000, 14_000, 13_000,
                11_000, 13_000
            ]
        );
    }

    #[test]
    fn test_liquidity_note_flags_october() {
        let dataset = SampleData.load().unwrap();
        assert_eq!(dataset.liquidity.at_risk_period.as_deref(), Some("October"));
    }
}
