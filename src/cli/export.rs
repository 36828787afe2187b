//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses, ExportFormat};
use crate::storage::ExpenseRepository;

/// Handle the export command
///
/// Writes to `output` when given, otherwise to stdout. Unlike `list`, a
/// data file that cannot be read is an error here, so an export is never
/// silently empty.
pub fn handle_export_command(
    repo: &ExpenseRepository,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let collection = repo.load()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_expenses(&collection, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            println!(
                "Exported {} expenses to: {}",
                collection.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            export_expenses(&collection, format, &mut writer)?;
        }
    }

    Ok(())
}
