//! Liquidity annotation for the cash-flow section

use serde::{Deserialize, Serialize};

/// A note about where cash may run short
///
/// This is an editorial annotation supplied with the data, not the output of
/// a threshold check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityAssessment {
    /// Period flagged as at risk, if any
    pub at_risk_period: Option<String>,
    /// Explanation shown to the reader
    pub reason: String,
}

impl LiquidityAssessment {
    /// Create an annotation flagging a period
    pub fn flagged(period: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            at_risk_period: Some(period.into()),
            reason: reason.into(),
        }
    }

    /// Check if a period is flagged
    pub fn has_risk(&self) -> bool {
        self.at_risk_period.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_has_risk() {
        let note = LiquidityAssessment::flagged("October", "Large outflow due to equipment");
        assert!(note.has_risk());
        assert_eq!(note.at_risk_period.as_deref(), Some("October"));
    }

    #[test]
    fn test_note_without_period_has_no_risk() {
        let note: LiquidityAssessment =
            serde_json::from_str(r#"{ "at_risk_period": null, "reason": "Cash stays positive" }"#)
                .unwrap();
        assert!(!note.has_risk());
        assert_eq!(note.reason, "Cash stays positive");
    }
}
