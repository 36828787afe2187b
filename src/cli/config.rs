//! CLI command for showing and initializing configuration

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::storage::ExpenseRepository;

/// Handle the config command
///
/// With `init`, the settings in effect are written to disk first.
pub fn handle_config_command(
    paths: &ExpensePaths,
    settings: &Settings,
    repo: &ExpenseRepository,
    init: bool,
) -> ExpenseResult<()> {
    if init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Data file:      {}", repo.path().display());
    println!();
    println!("Settings:");
    println!("  Storage format:    {}", repo.format());
    println!("  Atomic writes:     {}", settings.atomic_writes);
    println!("  Date format:       {}", settings.date_format);
    println!("  Description width: {}", settings.description_width);

    Ok(())
}
