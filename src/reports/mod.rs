//! Reports module for the financials dashboard
//!
//! Text renderings of each dashboard section for non-interactive output.

pub mod cash_flow;
pub mod estimates;
pub mod overview;

pub use cash_flow::CashFlowReport;
pub use estimates::EstimatesReport;
pub use overview::OverviewReport;
