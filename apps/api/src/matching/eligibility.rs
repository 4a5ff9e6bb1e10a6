//! Eligibility evaluator — per (job, candidate) country, degree and
//! simulated resume/skill checks. All three must pass.

use tracing::debug;

use crate::matching::models::{Candidate, EligibilityVerdict, JobPosting};
use crate::matching::normalize::canonical_country;
use crate::matching::scorer::SkillScorer;

/// Country compatibility. An empty country on either side passes
/// unconditionally (lenient default); otherwise canonical forms must match.
pub fn country_compatible(job_country: &str, candidate_country: &str) -> bool {
    if job_country.is_empty() || candidate_country.is_empty() {
        return true;
    }
    canonical_country(job_country) == canonical_country(candidate_country)
}

/// Degree eligibility. An empty candidate degree or an empty eligible list
/// passes unconditionally. Otherwise some listed degree must appear inside
/// the candidate's degree (case-insensitive), or itself contain "any" or
/// "general".
pub fn degree_eligible(candidate_degree: &str, eligible_degrees: &[String]) -> bool {
    if candidate_degree.is_empty() || eligible_degrees.is_empty() {
        return true;
    }

    let candidate_lower = candidate_degree.to_lowercase();
    eligible_degrees.iter().any(|degree| {
        let degree_lower = degree.to_lowercase();
        candidate_lower.contains(&degree_lower)
            || degree_lower.contains("any")
            || degree_lower.contains("general")
    })
}

/// Evaluates one (job, candidate) pair.
///
/// The scorer is consulted for every pair, even when the country or degree
/// check already failed, so a seeded scorer consumes draws in the same order
/// regardless of the other outcomes. The verdict's matched skills and
/// percentage always come from the scorer; `eligible` is the conjunction of
/// all three checks.
pub fn evaluate(
    job: &JobPosting,
    candidate: &Candidate,
    scorer: &dyn SkillScorer,
) -> EligibilityVerdict {
    let country_ok = country_compatible(&job.country, &candidate.country);
    let degree_ok = degree_eligible(&candidate.degree, &job.eligible_degrees);
    let analysis = scorer.score(&candidate.resume_link, &job.required_skills);

    let eligible = country_ok && degree_ok && analysis.eligible;
    debug!(
        candidate = %candidate.name,
        country_ok,
        degree_ok,
        resume_ok = analysis.eligible,
        eligible,
        "evaluated candidate"
    );

    EligibilityVerdict {
        eligible,
        ..analysis
    }
}
