//! Table column identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::selection::TableView;

/// A value column of the line-item table
///
/// The leading "Item Line" label column is always shown and is not listed
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    EstCost,
    ActCost,
    EstRev,
    ActRev,
    /// Realized profit (actual revenue minus actual cost)
    Total,
    /// Realized profit as a share of actual revenue
    Pct,
    /// Planned profit (estimated revenue minus estimated cost)
    EstProfit,
    /// Realized profit, as labelled in the actuals-only view
    ActProfit,
}

impl ColumnId {
    /// Stable identifier, matching the variant name
    pub fn id(&self) -> &'static str {
        match self {
            Self::EstCost => "EstCost",
            Self::ActCost => "ActCost",
            Self::EstRev => "EstRev",
            Self::ActRev => "ActRev",
            Self::Total => "Total",
            Self::Pct => "Pct",
            Self::EstProfit => "EstProfit",
            Self::ActProfit => "ActProfit",
        }
    }

    /// Column heading as shown under the given table view
    pub fn header(&self, view: TableView) -> &'static str {
        match (self, view) {
            (Self::EstRev, TableView::EstimatesOnly) => "Est Revenue",
            (Self::ActRev, TableView::ActualsOnly) => "Act Revenue",
            (Self::EstCost, _) => "Est Cost",
            (Self::ActCost, _) => "Act Cost",
            (Self::EstRev, _) => "Est Rev",
            (Self::ActRev, _) => "Act Rev",
            (Self::Total, _) => "Total",
            (Self::Pct, _) => "%",
            (Self::EstProfit, _) => "Est Profit",
            (Self::ActProfit, _) => "Act Profit",
        }
    }

    /// Whether the column holds a percentage rather than a currency amount
    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Pct)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Heading of the always-present label column
pub const LABEL_COLUMN_HEADER: &str = "Item Line";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_depend_on_view() {
        assert_eq!(ColumnId::EstRev.header(TableView::Summary), "Est Rev");
        assert_eq!(ColumnId::EstRev.header(TableView::EstimatesOnly), "Est Revenue");
        assert_eq!(ColumnId::ActRev.header(TableView::ActualsOnly), "Act Revenue");
        assert_eq!(ColumnId::Pct.header(TableView::Summary), "%");
    }

    #[test]
    fn test_id_matches_display() {
        assert_eq!(ColumnId::EstProfit.to_string(), "EstProfit");
        assert!(ColumnId::Pct.is_percentage());
        assert!(!ColumnId::Total.is_percentage());
    }
}
