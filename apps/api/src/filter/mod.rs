//! Filtering — criteria model, mode controller, and the pure filter engine.

pub mod engine;
pub mod handlers;

use serde::{Deserialize, Serialize};

/// Which single criterion input is active alongside the free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Skills,
    Location,
    Experience,
}

/// The full filter configuration for one view: four independent criterion
/// strings plus the active mode. Empty string means the criterion is
/// inactive. Kept separate from HTTP wiring so the engine stays pure.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub search: String,
    pub skill: String,
    pub location: String,
    pub experience: String,
    pub mode: FilterMode,
}

impl FilterConfig {
    /// Switches the active filter mode. Switching to `All` resets the
    /// skill/location/experience criteria; the search term always survives.
    pub fn set_mode(&mut self, mode: FilterMode) {
        if mode == FilterMode::All {
            self.skill.clear();
            self.location.clear();
            self.experience.clear();
        }
        self.mode = mode;
    }
}
