//! Project X Financials - derived metrics for a project financial dashboard
//!
//! This library turns a project's summary totals, line items and monthly
//! cash-flow records into everything a financial dashboard displays:
//! headline figures, profitability, the estimates-vs-actuals table for any
//! table view and column filter, and cash-flow totals and chart series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core value types (money, line items, cash-flow periods, selections)
//! - `data`: The data set and its sources
//! - `services`: Metric computations and the `MetricsProjector`
//! - `display` / `reports`: Text renderings for the CLI
//! - `tui`: Interactive dashboard
//! - `config`: Configuration and path management
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use projectx_financials::data::{DataSource, SampleData};
//! use projectx_financials::services::MetricsProjector;
//!
//! let dataset = SampleData.load().unwrap();
//! let projector = MetricsProjector::new(&dataset);
//! assert_eq!(projector.cumulative_profit().to_string(), "44.500,00 €");
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::FinancialsError;
