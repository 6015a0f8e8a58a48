//! Filter engine — pure, conjunctive, case-insensitive substring matching.
//!
//! Recomputation is always total: every call starts from the full collection,
//! so stale partial results are never reused. Absent optional fields are
//! treated as non-matching, never as errors.

use crate::filter::FilterConfig;
use crate::models::resume::ResumeRecord;

/// Applies the filter configuration to the full collection and returns the
/// filtered view, preserving collection order.
///
/// Active criteria combine conjunctively:
/// - search: name OR email OR any skill
/// - skill: any skill
/// - location: the location field
/// - experience: any experience entry's title OR company
pub fn apply_filters(collection: &[ResumeRecord], config: &FilterConfig) -> Vec<ResumeRecord> {
    collection
        .iter()
        .filter(|record| matches_config(record, config))
        .cloned()
        .collect()
}

fn matches_config(record: &ResumeRecord, config: &FilterConfig) -> bool {
    matches_search(record, &config.search)
        && matches_skill(record, &config.skill)
        && matches_location(record, &config.location)
        && matches_experience(record, &config.experience)
}

fn matches_search(record: &ResumeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ci(&record.name, term)
        || contains_ci(&record.email, term)
        || record.skills.iter().any(|s| contains_ci(s, term))
}

fn matches_skill(record: &ResumeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.skills.iter().any(|s| contains_ci(s, term))
}

fn matches_location(record: &ResumeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .location
        .as_deref()
        .map(|loc| contains_ci(loc, term))
        .unwrap_or(false)
}

fn matches_experience(record: &ResumeRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .experience
        .iter()
        .any(|e| contains_ci(&e.title, term) || contains_ci(&e.company, term))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
