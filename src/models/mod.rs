//! Core data models for the financials dashboard
//!
//! This module contains the data structures of the reporting domain: line
//! items, cash-flow periods, summary totals, money, and the UI selection
//! that drives which figures are shown.

pub mod cash_flow;
pub mod column;
pub mod line_item;
pub mod liquidity;
pub mod money;
pub mod selection;
pub mod summary;

pub use cash_flow::{CashFlowPeriod, PeriodKind};
pub use column::{ColumnId, LABEL_COLUMN_HEADER};
pub use line_item::LineItem;
pub use liquidity::LiquidityAssessment;
pub use money::Money;
pub use selection::{ColumnFilter, Section, TableView, ViewSelection};
pub use summary::{SummaryTotals, Trend, TrendDirection};
