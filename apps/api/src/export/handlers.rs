use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::export::writer::XLSX_CONTENT_TYPE;
use crate::export::{export_view, ExportOutcome};
use crate::filter::engine::apply_filters;
use crate::filter::handlers::FilterQuery;
use crate::state::AppState;

/// GET /api/v1/resumes/export
///
/// Applies the same filter criteria as the filtered list, then streams the
/// visible rows as an XLSX attachment. An empty view returns a "no data"
/// notice instead of a file.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, AppError> {
    let config = query.into_config();
    let view = apply_filters(&state.collection, &config);

    match export_view(&view, state.writer.as_ref())? {
        ExportOutcome::Empty => {
            info!("Export requested but the filtered view is empty");
            Ok(Json(json!({
                "notice": "No resume data available to export",
                "rows": 0
            }))
            .into_response())
        }
        ExportOutcome::File {
            bytes,
            filename,
            rows,
        } => {
            info!("Exported {rows} resumes to {filename}");
            let response = Response::builder()
                .header(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                )
                .header("x-exported-rows", rows.to_string())
                .body(Body::from(Bytes::from(bytes)))
                .map_err(|e| AppError::Internal(e.into()))?;
            Ok(response)
        }
    }
}
