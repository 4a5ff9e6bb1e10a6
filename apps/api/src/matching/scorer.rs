//! Skill scoring — pluggable, trait-based stand-in for real resume analysis.
//!
//! Default: `RandomSkillScorer` (independent per-skill draws, seedable for
//! reproducible runs). Alternate: `FixedRateSkillScorer` (no random source).
//!
//! `AppState` holds an `Arc<dyn SkillScorer>`, swapped at startup via config.
//! A real text-analysis backend can be dropped in later without touching the
//! evaluator or the ranking engine.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::matching::models::EligibilityVerdict;

/// Per-skill match probability when the resume link looks real.
pub const VALID_RESUME_MATCH_RATE: f64 = 0.85;
/// Per-skill match probability for an unrecognized link.
pub const INVALID_RESUME_MATCH_RATE: f64 = 0.60;
/// Eligibility threshold (match percentage) for a valid-looking resume.
pub const VALID_RESUME_THRESHOLD: u32 = 35;
/// Eligibility threshold for an unrecognized link.
pub const INVALID_RESUME_THRESHOLD: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The skill scorer trait. Implement this to swap backends without touching
/// the evaluator, the engine, or the handlers.
pub trait SkillScorer: Send + Sync {
    /// Scores a candidate's resume link against a job's required skills.
    ///
    /// Empty link or empty skill list is a rejection, not an error. The
    /// returned matched skills are a subset of `required_skills` in
    /// declaration order.
    fn score(&self, resume_link: &str, required_skills: &[String]) -> EligibilityVerdict;

    /// Short backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

/// A resume link counts as "valid" when it plausibly points at an actual
/// resume. Substring checks are case-sensitive, matching the source data.
fn looks_like_resume(resume_link: &str) -> bool {
    resume_link.contains("drive.google.com")
        || resume_link.contains(".pdf")
        || resume_link.contains("resume")
}

/// Applies the validity-dependent threshold to a matched subset.
fn verdict_from_matches(
    matched_skills: Vec<String>,
    required_count: usize,
    valid_resume: bool,
) -> EligibilityVerdict {
    let match_percentage =
        ((matched_skills.len() as f64 / required_count as f64) * 100.0).round() as u32;
    let threshold = if valid_resume {
        VALID_RESUME_THRESHOLD
    } else {
        INVALID_RESUME_THRESHOLD
    };

    EligibilityVerdict {
        eligible: match_percentage >= threshold,
        matched_skills,
        match_percentage,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RandomSkillScorer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Probabilistic scorer. Each required skill is matched independently, in
/// declaration order, at a rate that depends on whether the link looks like
/// a real resume.
pub struct RandomSkillScorer {
    rng: Mutex<StdRng>,
}

impl RandomSkillScorer {
    pub fn from_entropy() -> Self {
        RandomSkillScorer {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Fixed seed. Two scorers with the same seed produce identical draw
    /// sequences, so full runs are reproducible.
    pub fn seeded(seed: u64) -> Self {
        RandomSkillScorer {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SkillScorer for RandomSkillScorer {
    fn score(&self, resume_link: &str, required_skills: &[String]) -> EligibilityVerdict {
        if resume_link.is_empty() || required_skills.is_empty() {
            return EligibilityVerdict::rejected();
        }

        let valid_resume = looks_like_resume(resume_link);
        let rate = if valid_resume {
            VALID_RESUME_MATCH_RATE
        } else {
            INVALID_RESUME_MATCH_RATE
        };

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let matched_skills: Vec<String> = required_skills
            .iter()
            .filter(|_| rng.random::<f64>() < rate)
            .cloned()
            .collect();
        drop(rng);

        verdict_from_matches(matched_skills, required_skills.len(), valid_resume)
    }

    fn backend(&self) -> &'static str {
        "random"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FixedRateSkillScorer — deterministic backend
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic scorer: matches the first ⌈rate × n⌉ required skills in
/// declaration order, with the same validity gates and thresholds as the
/// random scorer. Useful for demos and golden-output runs.
pub struct FixedRateSkillScorer;

impl SkillScorer for FixedRateSkillScorer {
    fn score(&self, resume_link: &str, required_skills: &[String]) -> EligibilityVerdict {
        if resume_link.is_empty() || required_skills.is_empty() {
            return EligibilityVerdict::rejected();
        }

        let valid_resume = looks_like_resume(resume_link);
        let rate = if valid_resume {
            VALID_RESUME_MATCH_RATE
        } else {
            INVALID_RESUME_MATCH_RATE
        };

        let take = ((required_skills.len() as f64) * rate).ceil() as usize;
        let matched_skills: Vec<String> =
            required_skills.iter().take(take).cloned().collect();

        verdict_from_matches(matched_skills, required_skills.len(), valid_resume)
    }

    fn backend(&self) -> &'static str {
        "fixed-rate"
    }
}

/// Selects the configured scorer backend.
pub fn build_scorer(config: &Config) -> Arc<dyn SkillScorer> {
    if config.deterministic_scorer {
        return Arc::new(FixedRateSkillScorer);
    }
    match config.match_seed {
        Some(seed) => Arc::new(RandomSkillScorer::seeded(seed)),
        None => Arc::new(RandomSkillScorer::from_entropy()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
