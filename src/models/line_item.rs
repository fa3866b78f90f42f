//! Line item model
//!
//! One itemized row of the cost/revenue breakdown, such as a project phase.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Estimated and actual cost/revenue figures for one line of the breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label (e.g. "Development Phase 1")
    pub label: String,
    /// Estimated cost
    pub estimated_cost: Money,
    /// Actual cost
    pub actual_cost: Money,
    /// Estimated revenue
    pub estimated_revenue: Money,
    /// Actual revenue
    pub actual_revenue: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(
        label: impl Into<String>,
        estimated_cost: Money,
        actual_cost: Money,
        estimated_revenue: Money,
        actual_revenue: Money,
    ) -> Self {
        Self {
            label: label.into(),
            estimated_cost,
            actual_cost,
            estimated_revenue,
            actual_revenue,
        }
    }

    /// Realized profit: actual revenue minus actual cost
    pub fn profit_total(&self) -> Money {
        self.actual_revenue - self.actual_cost
    }

    /// Profit as a percentage of actual revenue
    ///
    /// Returns `None` when there is no actual revenue to divide by.
    pub fn profit_percentage(&self) -> Option<f64> {
        self.profit_total().percent_of(self.actual_revenue)
    }

    /// Planned profit: estimated revenue minus estimated cost
    pub fn estimated_profit(&self) -> Money {
        self.estimated_revenue - self.estimated_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn development_phase() -> LineItem {
        LineItem::new(
            "Development Phase 1",
            Money::from_euros(45_000),
            Money::from_euros(48_500),
            Money::from_euros(65_000),
            Money::from_euros(68_000),
        )
    }

    #[test]
    fn test_profit_total() {
        assert_eq!(development_phase().profit_total(), Money::from_euros(19_500));
    }

    #[test]
    fn test_profit_percentage() {
        let pct = development_phase().profit_percentage().unwrap();
        assert_eq!(format!("{:.1}", pct), "28.7");
    }

    #[test]
    fn test_profit_percentage_without_revenue() {
        let item = LineItem::new(
            "Discovery",
            Money::from_euros(1_000),
            Money::from_euros(1_200),
            Money::zero(),
            Money::zero(),
        );
        assert_eq!(item.profit_percentage(), None);
        assert_eq!(item.profit_total(), Money::from_euros(-1_200));
    }

    #[test]
    fn test_estimated_profit() {
        assert_eq!(
            development_phase().estimated_profit(),
            Money::from_euros(20_000)
        );
    }
}
