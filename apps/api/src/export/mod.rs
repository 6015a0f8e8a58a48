//! Export — flattens the current filtered view into tabular rows and hands
//! them to the spreadsheet-writer collaborator.

pub mod handlers;
pub mod rows;
pub mod writer;

use crate::errors::AppError;
use crate::export::rows::{flatten_record, ResumeRow};
use crate::export::writer::{SheetConfig, SpreadsheetWriter};
use crate::models::resume::ResumeRecord;

/// Outcome of an export request.
pub enum ExportOutcome {
    /// Nothing visible to export — no file is generated.
    Empty,
    File {
        bytes: Vec<u8>,
        filename: String,
        rows: usize,
    },
}

/// Exports the filtered view. An empty view short-circuits before the writer
/// is ever invoked; otherwise one row per visible record is written under the
/// fixed sheet label with the deterministic filename.
pub fn export_view(
    view: &[ResumeRecord],
    writer: &dyn SpreadsheetWriter,
) -> Result<ExportOutcome, AppError> {
    if view.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let rows: Vec<ResumeRow> = view.iter().map(flatten_record).collect();
    let sheet = SheetConfig::default();
    let bytes = writer.write(&rows, &sheet)?;

    Ok(ExportOutcome::File {
        bytes,
        filename: sheet.file_name(),
        rows: rows.len(),
    })
}
