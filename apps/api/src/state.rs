use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::SkillScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill scorer. Default: RandomSkillScorer. Swap via
    /// DETERMINISTIC_SCORER / MATCH_SEED env.
    pub scorer: Arc<dyn SkillScorer>,
}
