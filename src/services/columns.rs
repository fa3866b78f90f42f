//! Column visibility and row projection for the line-item table
//!
//! Which columns are visible is a pure lookup on (table view, column filter);
//! every combination is listed in [`COLUMN_TABLE`].

use crate::display::report::format_percentage;
use crate::models::{ColumnFilter, ColumnId, LineItem, Money, TableView};

use ColumnId::*;

/// Visible columns, indexed by `[TableView::index()][ColumnFilter::index()]`
///
/// Filter order: All, CostsOnly, RevenueOnly, ProfitOnly.
const COLUMN_TABLE: [[&[ColumnId]; 4]; 3] = [
    // Summary
    [
        &[EstCost, ActCost, EstRev, ActRev, Total, Pct],
        &[EstCost, ActCost],
        &[EstRev, ActRev],
        &[Total, Pct],
    ],
    // EstimatesOnly
    [
        &[EstCost, EstRev, EstProfit],
        &[EstCost],
        &[EstRev],
        &[EstProfit],
    ],
    // ActualsOnly
    [
        &[ActCost, ActRev, ActProfit],
        &[ActCost],
        &[ActRev],
        &[ActProfit],
    ],
];

/// Shown in the percentage column when a row has no actual revenue
pub const NOT_AVAILABLE: &str = "n/a";

/// Ordered list of visible value columns for a selection
pub fn resolve_visible_columns(view: TableView, filter: ColumnFilter) -> &'static [ColumnId] {
    COLUMN_TABLE[view.index()][filter.index()]
}

/// Raw currency value of a column, `None` for the percentage column
pub fn column_amount(item: &LineItem, column: ColumnId) -> Option<Money> {
    match column {
        EstCost => Some(item.estimated_cost),
        ActCost => Some(item.actual_cost),
        EstRev => Some(item.estimated_revenue),
        ActRev => Some(item.actual_revenue),
        Total | ActProfit => Some(item.profit_total()),
        EstProfit => Some(item.estimated_profit()),
        Pct => None,
    }
}

/// Display string for one cell
pub fn format_cell(item: &LineItem, column: ColumnId) -> String {
    match column_amount(item, column) {
        Some(amount) => amount.to_string(),
        None => item
            .profit_percentage()
            .map(format_percentage)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

/// Formatted values of a line item for the visible columns, in column order
pub fn project_row(item: &LineItem, view: TableView, filter: ColumnFilter) -> Vec<(ColumnId, String)> {
    resolve_visible_columns(view, filter)
        .iter()
        .map(|&column| (column, format_cell(item, column)))
        .collect()
}
