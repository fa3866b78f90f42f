//! CLI commands for the dashboard sections
//!
//! Each command prints the text rendering of one section.

use crate::config::settings::Settings;
use crate::error::FinancialsResult;
use crate::models::{ColumnFilter, PeriodKind, TableView};
use crate::reports::{CashFlowReport, EstimatesReport, OverviewReport};
use crate::services::MetricsProjector;

/// Handle the overview command
pub fn handle_overview_command(projector: &MetricsProjector) -> FinancialsResult<()> {
    println!("{}", OverviewReport::generate(projector).format_terminal());
    Ok(())
}

/// Handle the table command
///
/// Unrecognised view or filter names fall back to the defaults with a
/// warning rather than failing.
pub fn handle_table_command(
    projector: &MetricsProjector,
    settings: &Settings,
    view: Option<String>,
    filter: Option<String>,
) -> FinancialsResult<()> {
    let (view, filter) = resolve_table_selection(settings, view.as_deref(), filter.as_deref());
    println!(
        "{}",
        EstimatesReport::generate(projector, view, filter).format_terminal()
    );
    Ok(())
}

/// Handle the cash flow command
pub fn handle_cash_flow_command(
    projector: &MetricsProjector,
    kind: Option<PeriodKind>,
) -> FinancialsResult<()> {
    println!(
        "{}",
        CashFlowReport::generate(projector, kind).format_terminal()
    );
    Ok(())
}

/// Command-line names win over the configured defaults
fn resolve_table_selection(
    settings: &Settings,
    view: Option<&str>,
    filter: Option<&str>,
) -> (TableView, ColumnFilter) {
    let view = view
        .map(TableView::parse_or_default)
        .unwrap_or(settings.default_table_view);
    let filter = filter
        .map(ColumnFilter::parse_or_default)
        .unwrap_or(settings.default_column_filter);
    (view, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_arguments() {
        let settings = Settings::default();
        let (view, filter) = resolve_table_selection(&settings, Some("actuals"), Some("profit"));
        assert_eq!(view, TableView::ActualsOnly);
        assert_eq!(filter, ColumnFilter::ProfitOnly);
    }

    #[test]
    fn test_selection_falls_back_to_settings() {
        let settings = Settings {
            default_table_view: TableView::EstimatesOnly,
            default_column_filter: ColumnFilter::RevenueOnly,
            ..Settings::default()
        };
        let (view, filter) = resolve_table_selection(&settings, None, None);
        assert_eq!(view, TableView::EstimatesOnly);
        assert_eq!(filter, ColumnFilter::RevenueOnly);
    }

    #[test]
    fn test_unknown_names_fail_closed() {
        let settings = Settings {
            default_table_view: TableView::ActualsOnly,
            ..Settings::default()
        };
        let (view, filter) = resolve_table_selection(&settings, Some("bogus"), Some("bogus"));
        assert_eq!(view, TableView::Summary);
        assert_eq!(filter, ColumnFilter::All);
    }
}
