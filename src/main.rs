use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use projectx_financials::cli::{
    handle_cash_flow_command, handle_config_command, handle_overview_command, handle_table_command,
};
use projectx_financials::config::{paths::FinancialsPaths, settings::Settings};
use projectx_financials::data::{DataSource, SampleData};
use projectx_financials::logging::{self, LogTarget};
use projectx_financials::models::PeriodKind;
use projectx_financials::services::MetricsProjector;

#[derive(Parser)]
#[command(
    name = "financials",
    version,
    about = "Project X financial monitoring and analysis dashboard",
    long_about = "Shows project estimates against actuals, profitability and \
                  monthly cash flow, either as an interactive terminal dashboard \
                  or as plain-text reports."
)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print headline figures, profitability and the net cash-flow trend
    Overview,

    /// Print the estimates vs actuals line-item table
    Table {
        /// Table view: summary, estimates or actuals
        #[arg(short, long)]
        view: Option<String>,

        /// Column filter: all, costs, revenue or profit
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print monthly cash flow, totals and the liquidity note
    #[command(alias = "cash-flow")]
    Cashflow {
        /// Only list actual or projected periods
        #[arg(short, long)]
        kind: Option<PeriodKind>,
    },

    /// Show configuration and paths
    Config {
        /// Write a settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinancialsPaths::resolve(cli.config.as_deref())?;
    let settings_path = cli.config.clone().unwrap_or_else(|| paths.settings_file());

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let log_target = if interactive {
        LogTarget::File(paths.log_file())
    } else {
        LogTarget::Stderr
    };
    logging::init(log_target)?;

    let settings = Settings::load_from_or_default(&settings_path)?;

    let mut dataset = SampleData.load()?;
    if let Some(baseline_cost) = settings.baseline_cost {
        dataset = dataset.with_baseline_cost(baseline_cost);
        dataset.validate()?;
    }
    let projector = MetricsProjector::new(&dataset);

    match cli.command {
        None | Some(Commands::Tui) => {
            projectx_financials::tui::run_tui(projector, &settings)?;
        }
        Some(Commands::Overview) => {
            handle_overview_command(&projector)?;
        }
        Some(Commands::Table { view, filter }) => {
            handle_table_command(&projector, &settings, view, filter)?;
        }
        Some(Commands::Cashflow { kind }) => {
            handle_cash_flow_command(&projector, kind)?;
        }
        Some(Commands::Config { init }) => {
            handle_config_command(&settings, &settings_path, &paths.log_file(), init)?;
        }
    }

    Ok(())
}
