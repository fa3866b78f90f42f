//! Service layer for the financials dashboard
//!
//! The service layer derives display values from the loaded data set:
//! aggregates, column visibility, row projection, and chart series.

pub mod chart;
pub mod columns;
pub mod metrics;
pub mod projector;

pub use chart::{ChartSeries, PieSlice};
pub use metrics::{CashFlowBreakdown, CashFlowTotals, ProfitabilitySplit};
pub use projector::{MetricsProjector, OverviewMetrics, ProjectedRow, ProjectedTable};
