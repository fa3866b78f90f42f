//! Top-level summary figures
//!
//! Total estimates and total actuals are reported independently of the
//! line-item breakdown and are never reconciled against it.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Project-level totals shown on the overview cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Total estimated figure
    pub total_estimates: Money,
    /// Total actual figure
    pub total_actuals: Money,
}

impl SummaryTotals {
    /// Create summary totals
    pub fn new(total_estimates: Money, total_actuals: Money) -> Self {
        Self {
            total_estimates,
            total_actuals,
        }
    }

    /// Actuals minus estimates
    pub fn variance(&self) -> Money {
        self.total_actuals - self.total_estimates
    }

    /// Variance as a percentage of the estimate, `None` if nothing was estimated
    pub fn variance_percentage(&self) -> Option<f64> {
        self.variance().percent_of(self.total_estimates)
    }

    /// Trend indicator for the "vs estimate" badge
    pub fn trend(&self) -> Option<Trend> {
        self.variance_percentage().map(Trend::from_percentage)
    }
}

/// Direction of a variance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// A signed percentage variance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Up, down or flat, judged at display precision
    pub direction: TrendDirection,
    /// Signed percentage
    pub percentage: f64,
}

impl Trend {
    /// Build a trend from a signed percentage
    ///
    /// Variances that round to 0.0 at one decimal count as flat.
    pub fn from_percentage(percentage: f64) -> Self {
        let rounded = (percentage * 10.0).round() / 10.0;
        let direction = if rounded > 0.0 {
            TrendDirection::Up
        } else if rounded < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };
        Self {
            direction,
            percentage,
        }
    }

    /// Magnitude without sign
    pub fn magnitude(&self) -> f64 {
        self.percentage.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance_percentage() {
        let summary = SummaryTotals::new(Money::from_euros(125_000), Money::from_euros(137_000));
        assert_eq!(summary.variance(), Money::from_euros(12_000));
        let pct = summary.variance_percentage().unwrap();
        assert!((pct - 9.6).abs() < 1e-9);
    }

    #[test]
    fn test_trend_up() {
        let summary = SummaryTotals::new(Money::from_euros(125_000), Money::from_euros(137_000));
        let trend = summary.trend().unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn test_trend_down() {
        let summary = SummaryTotals::new(Money::from_euros(100_000), Money::from_euros(90_000));
        let trend = summary.trend().unwrap();
        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.magnitude() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_flat_below_display_precision() {
        assert_eq!(Trend::from_percentage(0.04).direction, TrendDirection::Flat);
    }

    #[test]
    fn test_no_trend_without_estimate() {
        let summary = SummaryTotals::new(Money::zero(), Money::from_euros(1));
        assert!(summary.trend().is_none());
    }
}
