use std::sync::Arc;

use crate::export::writer::SpreadsheetWriter;
use crate::models::resume::ResumeRecord;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The full collection as loaded at startup. Immutable until the next
    /// process start — filtered views are always derived fresh from it.
    pub collection: Arc<Vec<ResumeRecord>>,
    /// Pluggable spreadsheet backend. Default: XlsxWriter.
    pub writer: Arc<dyn SpreadsheetWriter>,
}
