use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_config_command, handle_expense_command, handle_export_command, report_error,
    ExpenseCommands,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::export::ExportFormat;
use expense_tracker::storage::{ExpenseRepository, StorageFormat};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Records expenses with a description, amount and date in a local \
                  CSV or JSON file. Lists them, totals them (optionally for one \
                  month) and deletes them by id."
)]
struct Cli {
    /// Base directory for settings and data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Use this data file instead of the one in the data directory
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Storage format of the data file (overrides the settings file)
    #[arg(long, global = true, value_enum)]
    storage_format: Option<StorageFormat>,

    /// Log level when EXPENSE_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings in effect to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    expense_tracker::logging::init(&cli.log_level);

    // Storage and input failures are reported, never turned into a failing exit
    if let Err(err) = run(cli) {
        tracing::error!("{:#}", err);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new().context("Failed to resolve the data directory")?,
    };

    let mut settings = Settings::load_or_default(&paths).context("Failed to load settings")?;
    if let Some(format) = cli.storage_format {
        settings.storage_format = format;
    }

    let data_file = cli
        .file
        .unwrap_or_else(|| paths.expenses_file(settings.storage_format));
    let repo = ExpenseRepository::new(data_file, settings.storage_format)
        .with_atomic_writes(settings.atomic_writes);

    let result = match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&repo, &settings, cmd),
        Some(Commands::Export { format, output }) => handle_export_command(&repo, format, output),
        Some(Commands::Config { init }) => handle_config_command(&paths, &settings, &repo, init),
        None => {
            println!("Expense Tracker - personal expenses from the command line");
            println!();
            println!("Run 'expense --help' for usage information.");
            Ok(())
        }
    };

    if let Err(err) = result {
        report_error(&err);
    }

    Ok(())
}
