//! Spreadsheet writer — the file-generation collaborator behind the export
//! endpoint.
//!
//! `AppState` holds an `Arc<dyn SpreadsheetWriter>`, so the XLSX backend can
//! be swapped (or stubbed in tests) without touching handlers.

use rust_xlsxwriter::{Format, Workbook};

use crate::errors::AppError;
use crate::export::rows::ResumeRow;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Deterministic export naming: one fixed file stem, one fixed sheet label.
const EXPORT_FILE_STEM: &str = "all-resumes";
const EXPORT_SHEET_LABEL: &str = "Resumes";

#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub file_stem: String,
    pub sheet_label: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            file_stem: EXPORT_FILE_STEM.to_string(),
            sheet_label: EXPORT_SHEET_LABEL.to_string(),
        }
    }
}

impl SheetConfig {
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.file_stem)
    }
}

/// The spreadsheet-generation collaborator.
pub trait SpreadsheetWriter: Send + Sync {
    fn write(&self, rows: &[ResumeRow], sheet: &SheetConfig) -> Result<Vec<u8>, AppError>;
}

/// Default backend: an in-memory XLSX workbook with a bold header row and one
/// row per resume.
pub struct XlsxWriter;

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, rows: &[ResumeRow], sheet: &SheetConfig) -> Result<Vec<u8>, AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.sheet_label)?;

        let header_format = Format::new().set_bold();
        for (col, title) in ResumeRow::HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            for (col, cell) in row.cells().iter().enumerate() {
                worksheet.write_string((i + 1) as u32, col as u16, *cell)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
