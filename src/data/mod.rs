//! Data provisioning for the dashboard
//!
//! The projector never knows where figures come from: a [`DataSource`]
//! hands it a [`Dataset`], which is loaded once and treated as read-only.
//! [`SampleData`] is the compiled-in source used by the binary.

pub mod sample;

pub use sample::SampleData;

use std::collections::HashSet;

use crate::error::{FinancialsError, FinancialsResult};
use crate::models::{CashFlowPeriod, LineItem, LiquidityAssessment, Money, SummaryTotals};

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Project name shown in the header
    pub project_name: String,
    /// Date the figures were last refreshed
    pub last_updated: chrono::NaiveDate,
    /// Independent top-level totals
    pub summary: SummaryTotals,
    /// Itemized breakdown, in display order
    pub line_items: Vec<LineItem>,
    /// Monthly cash flow, in display order
    pub cash_flow: Vec<CashFlowPeriod>,
    /// Cost base the profitability split is measured against
    pub baseline_cost: Money,
    /// Liquidity note for the cash-flow section
    pub liquidity: LiquidityAssessment,
}

impl Dataset {
    /// Check structural consistency of the loaded data
    ///
    /// Line item labels must be non-empty and period labels must be unique,
    /// since chart tooltips look periods up by label.
    pub fn validate(&self) -> FinancialsResult<()> {
        if let Some(item) = self.line_items.iter().find(|i| i.label.trim().is_empty()) {
            return Err(FinancialsError::Validation(format!(
                "Line item with empty label (actual cost {})",
                item.actual_cost
            )));
        }

        let mut seen = HashSet::new();
        for period in &self.cash_flow {
            if !seen.insert(period.period.as_str()) {
                return Err(FinancialsError::Validation(format!(
                    "Duplicate cash-flow period: {}",
                    period.period
                )));
            }
        }

        if self.baseline_cost.is_negative() {
            return Err(FinancialsError::Validation(format!(
                "Baseline cost must not be negative, got {}",
                self.baseline_cost
            )));
        }

        Ok(())
    }

    /// Replace the profitability baseline
    pub fn with_baseline_cost(mut self, baseline_cost: Money) -> Self {
        self.baseline_cost = baseline_cost;
        self
    }
}

/// Something that can provide the dashboard's data set
pub trait DataSource {
    /// Load and validate the data set
    fn load(&self) -> FinancialsResult<Dataset>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodKind;

    #[test]
    fn test_sample_data_is_valid() {
        let dataset = SampleData.load().unwrap();
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_duplicate_periods_rejected() {
        let mut dataset = SampleData.load().unwrap();
        let jan = CashFlowPeriod::new(
            "Jan",
            Money::from_euros(1),
            Money::zero(),
            PeriodKind::Projected,
        )
        .unwrap();
        dataset.cash_flow.push(jan);

        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate cash-flow period: Jan"));
    }

    #[test]
    fn test_negative_baseline_rejected() {
        let dataset = SampleData
            .load()
            .unwrap()
            .with_baseline_cost(Money::from_euros(-1));
        assert!(dataset.validate().unwrap_err().is_validation());
    }
}
