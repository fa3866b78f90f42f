//! Table rendering with `tabled`
//!
//! Builds boxed text tables for the non-interactive CLI output.

use tabled::builder::Builder;
use tabled::settings::{object::Columns, Alignment, Modify, Style};

use crate::models::CashFlowPeriod;
use crate::services::chart::ChartSeries;
use crate::services::ProjectedTable;

/// Render the projected line-item table
pub fn render_projected_table(table: &ProjectedTable) -> String {
    if table.is_empty() {
        return "No line items found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(table.headers().into_iter().map(String::from));

    for row in &table.rows {
        let record = std::iter::once(row.label.clone())
            .chain(row.cells.iter().map(|(_, value)| value.clone()));
        builder.push_record(record);
    }

    let mut rendered = builder.build();
    rendered
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    rendered.to_string()
}

/// Render one row per period with the series amounts and the period kind
pub fn render_cash_flow_table(periods: &[CashFlowPeriod]) -> String {
    if periods.is_empty() {
        return "No cash-flow periods found.".to_string();
    }

    let mut builder = Builder::default();
    let mut header = vec!["Period".to_string()];
    header.extend(ChartSeries::ALL.iter().map(|s| s.label().to_string()));
    header.push("Type".to_string());
    builder.push_record(header);

    for period in periods {
        let mut record = vec![period.period.clone()];
        record.extend(
            ChartSeries::ALL
                .iter()
                .map(|s| s.display_amount(period).to_string()),
        );
        record.push(period.kind.label().to_string());
        builder.push_record(record);
    }

    let mut rendered = builder.build();
    rendered
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));
    rendered.to_string()
}
