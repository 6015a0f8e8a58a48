use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::filter::engine::apply_filters;
use crate::filter::{FilterConfig, FilterMode};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// Filter criteria as they arrive on the query string. Absent parameters are
/// inactive criteria; an absent mode applies no mode reset.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub skill: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub mode: Option<FilterMode>,
}

impl FilterQuery {
    pub fn into_config(self) -> FilterConfig {
        let mut config = FilterConfig {
            search: self.search.unwrap_or_default(),
            skill: self.skill.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            experience: self.experience.unwrap_or_default(),
            ..FilterConfig::default()
        };
        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        config
    }
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub total: usize,
    pub records: Vec<ResumeRecord>,
}

#[derive(Serialize)]
pub struct FilteredListResponse {
    pub total: usize,
    pub matched: usize,
    pub records: Vec<ResumeRecord>,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    Json(ResumeListResponse {
        total: state.collection.len(),
        records: state.collection.as_ref().clone(),
    })
}

/// GET /api/v1/resumes/filtered
pub async fn handle_filtered_resumes(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<FilteredListResponse> {
    let config = query.into_config();
    let records = apply_filters(&state.collection, &config);
    Json(FilteredListResponse {
        total: state.collection.len(),
        matched: records.len(),
        records,
    })
}
