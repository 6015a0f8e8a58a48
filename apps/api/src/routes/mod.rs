pub mod health;

use axum::{routing::get, Router};

use crate::export::handlers as export_handlers;
use crate::filter::handlers as filter_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", get(filter_handlers::handle_list_resumes))
        .route(
            "/api/v1/resumes/filtered",
            get(filter_handlers::handle_filtered_resumes),
        )
        .route(
            "/api/v1/resumes/export",
            get(export_handlers::handle_export),
        )
        .with_state(state)
}
