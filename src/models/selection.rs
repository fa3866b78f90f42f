//! View selection state
//!
//! Three independent pieces of UI state: the active section, which subset of
//! estimate/actual figures the table shows, and which column category is
//! visible. Selection lives for one session and is never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinancialsError;

/// Lowercase and unify separators so "Cash Flow", "cash_flow" and
/// "cash-flow" compare equal
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Dashboard section (tab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Overview,
    EstimatesActuals,
    CashFlow,
}

impl Section {
    /// All sections in tab order
    pub const ALL: [Section; 3] = [Self::Overview, Self::EstimatesActuals, Self::CashFlow];

    /// Tab title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::EstimatesActuals => "Estimates vs Actuals",
            Self::CashFlow => "Cash Flow Graph",
        }
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::EstimatesActuals => 1,
            Self::CashFlow => 2,
        }
    }

    /// Parse a section name, falling back to the default for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        s.parse::<Self>().unwrap_or_else(|err| {
            tracing::warn!(input = s, error = %err, "falling back to default section");
            Self::default()
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = FinancialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "overview" => Ok(Self::Overview),
            "estimates" | "estimates-actuals" | "estimates-vs-actuals" => {
                Ok(Self::EstimatesActuals)
            }
            "cashflow" | "cash-flow" | "cash-flow-graph" => Ok(Self::CashFlow),
            _ => Err(FinancialsError::UnknownSection(s.to_string())),
        }
    }
}

/// Which subset of estimate/actual figures the table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableView {
    #[default]
    Summary,
    EstimatesOnly,
    ActualsOnly,
}

impl TableView {
    /// All table views in lookup-table order
    pub const ALL: [TableView; 3] = [Self::Summary, Self::EstimatesOnly, Self::ActualsOnly];

    /// Row index into the column lookup table
    pub fn index(&self) -> usize {
        match self {
            Self::Summary => 0,
            Self::EstimatesOnly => 1,
            Self::ActualsOnly => 2,
        }
    }

    /// Table heading for this view
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Item Line Details",
            Self::EstimatesOnly => "Estimated Values",
            Self::ActualsOnly => "Actual Values",
        }
    }

    /// Parse a view name, falling back to the default for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        s.parse::<Self>().unwrap_or_else(|err| {
            tracing::warn!(input = s, error = %err, "falling back to default table view");
            Self::default()
        })
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Summary => "summary",
            Self::EstimatesOnly => "estimates",
            Self::ActualsOnly => "actuals",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TableView {
    type Err = FinancialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "summary" => Ok(Self::Summary),
            "estimates" | "estimates-only" => Ok(Self::EstimatesOnly),
            "actuals" | "actuals-only" => Ok(Self::ActualsOnly),
            _ => Err(FinancialsError::UnknownTableView(s.to_string())),
        }
    }
}

/// Narrows the table to one category of columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFilter {
    #[default]
    All,
    CostsOnly,
    RevenueOnly,
    ProfitOnly,
}

impl ColumnFilter {
    /// All filters in dropdown order
    pub const ALL: [ColumnFilter; 4] = [
        Self::All,
        Self::CostsOnly,
        Self::RevenueOnly,
        Self::ProfitOnly,
    ];

    /// Column index into the column lookup table
    pub fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::CostsOnly => 1,
            Self::RevenueOnly => 2,
            Self::ProfitOnly => 3,
        }
    }

    /// Dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Columns",
            Self::CostsOnly => "Costs Only",
            Self::RevenueOnly => "Revenue Only",
            Self::ProfitOnly => "Profit Only",
        }
    }

    /// The next filter in dropdown order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous filter in dropdown order, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a filter name, falling back to the default for unknown input
    pub fn parse_or_default(s: &str) -> Self {
        s.parse::<Self>().unwrap_or_else(|err| {
            tracing::warn!(input = s, error = %err, "falling back to default column filter");
            Self::default()
        })
    }
}

impl fmt::Display for ColumnFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ColumnFilter {
    type Err = FinancialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all" | "all-columns" => Ok(Self::All),
            "costs" | "costs-only" => Ok(Self::CostsOnly),
            "revenue" | "revenue-only" => Ok(Self::RevenueOnly),
            "profit" | "profit-only" => Ok(Self::ProfitOnly),
            _ => Err(FinancialsError::UnknownColumnFilter(s.to_string())),
        }
    }
}

/// The full UI selection
///
/// Each field changes only through direct selection. Switching sections
/// keeps the table view and column filter as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub active_section: Section,
    pub table_view: TableView,
    pub column_filter: ColumnFilter,
}

impl ViewSelection {
    /// Create a selection from explicit values
    pub fn new(active_section: Section, table_view: TableView, column_filter: ColumnFilter) -> Self {
        Self {
            active_section,
            table_view,
            column_filter,
        }
    }

    /// Switch the active section
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Switch the table view
    pub fn select_table_view(&mut self, view: TableView) {
        self.table_view = view;
    }

    /// Switch the column filter
    pub fn select_column_filter(&mut self, filter: ColumnFilter) {
        self.column_filter = filter;
    }

    /// Move to the next tab, wrapping around
    pub fn next_section(&mut self) {
        let next = (self.active_section.index() + 1) % Section::ALL.len();
        self.active_section = Section::ALL[next];
    }

    /// Move to the previous tab, wrapping around
    pub fn previous_section(&mut self) {
        let len = Section::ALL.len();
        let prev = (self.active_section.index() + len - 1) % len;
        self.active_section = Section::ALL[prev];
    }

    /// Cycle the column filter forward
    pub fn next_column_filter(&mut self) {
        self.column_filter = self.column_filter.next();
    }

    /// Cycle the column filter backward
    pub fn previous_column_filter(&mut self) {
        self.column_filter = self.column_filter.previous();
    }

    /// Whether the table view currently affects what is shown
    pub fn table_view_is_active(&self) -> bool {
        self.active_section == Section::EstimatesActuals
    }
}
