//! Cash-flow period model
//!
//! One month's cash-flow record, tagged as historical (actual) or forecast
//! (projected). Outflows are stored as negative amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{FinancialsError, FinancialsResult};

/// Whether a period's figures are historical or forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Historical figures
    Actual,
    /// Forecast figures
    Projected,
}

impl PeriodKind {
    /// Label used in chart tooltips
    pub fn label(&self) -> &'static str {
        match self {
            Self::Actual => "Actual",
            Self::Projected => "Projected",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PeriodKind {
    type Err = FinancialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "actual" | "past" => Ok(Self::Actual),
            "projected" | "projection" | "future" => Ok(Self::Projected),
            other => Err(FinancialsError::Validation(format!(
                "Unknown period kind '{}'. Use 'actual' or 'projected'",
                other
            ))),
        }
    }
}

/// Cash movement for a single period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPeriod {
    /// Period label (month name)
    pub period: String,
    /// Money coming in, never negative
    pub inflow: Money,
    /// Money going out, stored as a negative amount
    pub outflow: Money,
    /// Actual or projected
    pub kind: PeriodKind,
}

impl CashFlowPeriod {
    /// Create a validated cash-flow period
    pub fn new(
        period: impl Into<String>,
        inflow: Money,
        outflow: Money,
        kind: PeriodKind,
    ) -> FinancialsResult<Self> {
        let period = period.into();

        if period.trim().is_empty() {
            return Err(FinancialsError::Validation(
                "Cash-flow period label cannot be empty".into(),
            ));
        }
        if inflow.is_negative() {
            return Err(FinancialsError::Validation(format!(
                "Inflow for {} must not be negative, got {}",
                period, inflow
            )));
        }
        if outflow.is_positive() {
            return Err(FinancialsError::Validation(format!(
                "Outflow for {} must be stored as a negative amount, got {}",
                period, outflow
            )));
        }

        Ok(Self {
            period,
            inflow,
            outflow,
            kind,
        })
    }

    /// Net movement: inflow plus (negative) outflow
    pub fn net(&self) -> Money {
        self.inflow + self.outflow
    }

    /// Check if this period holds historical figures
    pub fn is_actual(&self) -> bool {
        self.kind == PeriodKind::Actual
    }

    /// Check if this period holds forecast figures
    pub fn is_projected(&self) -> bool {
        self.kind == PeriodKind::Projected
    }
}
