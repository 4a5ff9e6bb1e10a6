//! Ranking engine — runs the evaluator across jobs × candidates and produces
//! one `JobResult` per job, in job input order.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::matching::eligibility::evaluate;
use crate::matching::models::{Candidate, JobPosting, JobResult, MatchedCandidate};
use crate::matching::scorer::SkillScorer;

/// The one condition the engine surfaces to callers. Every per-record anomaly
/// (missing fields, bad counts) is already resolved locally with defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no job or candidate rows to process")]
    NoInput,
}

/// Matches every candidate against every job. O(J × C) evaluations, no early
/// termination — fine for spreadsheet-sized inputs.
///
/// Per job: eligible candidates are sorted by match percentage descending
/// (stable, so ties keep original candidate order) and truncated to the
/// job's requirement count. Each call is independent; results live only as
/// long as the caller keeps them.
pub fn match_candidates(
    jobs: &[JobPosting],
    candidates: &[Candidate],
    scorer: &dyn SkillScorer,
) -> Result<Vec<JobResult>, MatchError> {
    if jobs.is_empty() || candidates.is_empty() {
        return Err(MatchError::NoInput);
    }

    let mut results = Vec::with_capacity(jobs.len());

    for job in jobs {
        let mut eligible: Vec<MatchedCandidate> = Vec::new();
        for candidate in candidates {
            let verdict = evaluate(job, candidate, scorer);
            if verdict.eligible {
                eligible.push(MatchedCandidate {
                    name: candidate.name.clone(),
                    country: candidate.country.clone(),
                    degree: candidate.degree.clone(),
                    match_percentage: verdict.match_percentage,
                    matched_skills: verdict.matched_skills,
                });
            }
        }

        // Stable sort: ties keep original candidate order
        eligible.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        let candidates_count = eligible.len() as u32;
        let top_candidate_match = eligible.first().map(|c| c.match_percentage).unwrap_or(0);
        let top_names: Vec<&str> = eligible
            .iter()
            .take(job.requirement_count as usize)
            .map(|c| c.name.as_str())
            .collect();

        debug!(
            company = %job.company_name,
            role = %job.role,
            eligible = candidates_count,
            top_candidate_match,
            "ranked candidates for job"
        );

        results.push(JobResult {
            company_name: job.company_name.clone(),
            role: job.role.clone(),
            required_skills: job.required_skills.join(", "),
            eligible_degrees: job.eligible_degrees.join(", "),
            eligible_students: top_names.join(", "),
            requirement_count: job.requirement_count,
            candidates_count,
            country: job.country.clone(),
            top_candidate_match,
        });
    }

    info!(
        jobs = jobs.len(),
        candidates = candidates.len(),
        "matching run complete"
    );

    Ok(results)
}

/// Aggregates the presentation layer consumes for its summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_companies: u32,
    /// Sum of per-job eligible-candidate counts.
    pub total_candidates: u32,
    /// Rounded mean of per-job top candidate match; 0 when there are no jobs.
    pub avg_top_match: u32,
}

impl Summary {
    pub fn from_results(results: &[JobResult]) -> Self {
        if results.is_empty() {
            return Summary {
                total_companies: 0,
                total_candidates: 0,
                avg_top_match: 0,
            };
        }

        let top_sum: u32 = results.iter().map(|r| r.top_candidate_match).sum();
        Summary {
            total_companies: results.len() as u32,
            total_candidates: results.iter().map(|r| r.candidates_count).sum(),
            avg_top_match: (f64::from(top_sum) / results.len() as f64).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::EligibilityVerdict;
    use crate::matching::scorer::{FixedRateSkillScorer, RandomSkillScorer};

    /// Reads the match percentage out of the resume link ("resume-80" → 80%),
    /// so ranking tests can script exact scores per candidate. 0 = ineligible.
    struct ScriptedScorer;

    impl SkillScorer for ScriptedScorer {
        fn score(&self, resume_link: &str, required_skills: &[String]) -> EligibilityVerdict {
            let percentage = resume_link
                .rsplit('-')
                .next()
                .and_then(|p| p.parse::<u32>().ok())
                .unwrap_or(0);
            EligibilityVerdict {
                eligible: percentage > 0,
                matched_skills: required_skills.to_vec(),
                match_percentage: percentage,
            }
        }

        fn backend(&self) -> &'static str {
            "scripted"
        }
    }

    fn job(company: &str, requirement_count: u32) -> JobPosting {
        JobPosting {
            company_name: company.to_string(),
            role: "Engineer".to_string(),
            required_skills: vec!["Python".to_string(), "SQL".to_string()],
            eligible_degrees: vec!["Any".to_string()],
            country: "India".to_string(),
            requirement_count,
        }
    }

    fn candidate(name: &str, resume_link: &str) -> Candidate {
        Candidate {
            name: name.to_string(),
            country: "India".to_string(),
            degree: "Computer Science".to_string(),
            skills: vec![],
            resume_link: resume_link.to_string(),
        }
    }

    #[test]
    fn test_empty_jobs_or_candidates_signal_no_input() {
        let jobs = vec![job("Acme", 1)];
        let candidates = vec![candidate("Asha", "resume-80")];

        assert_eq!(
            match_candidates(&[], &candidates, &ScriptedScorer),
            Err(MatchError::NoInput)
        );
        assert_eq!(
            match_candidates(&jobs, &[], &ScriptedScorer),
            Err(MatchError::NoInput)
        );
    }

    #[test]
    fn test_one_result_per_job_in_input_order() {
        let jobs = vec![job("Acme", 1), job("Globex", 1), job("Initech", 1)];
        let candidates = vec![candidate("Asha", "resume-80")];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        let companies: Vec<&str> = results.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Globex", "Initech"]);
    }

    #[test]
    fn test_candidates_ranked_by_match_percentage_descending() {
        let jobs = vec![job("Acme", 3)];
        let candidates = vec![
            candidate("Low", "resume-40"),
            candidate("High", "resume-90"),
            candidate("Mid", "resume-70"),
        ];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        assert_eq!(results[0].eligible_students, "High, Mid, Low");
        assert_eq!(results[0].top_candidate_match, 90);
        assert_eq!(results[0].candidates_count, 3);
    }

    #[test]
    fn test_ties_keep_original_candidate_order() {
        let jobs = vec![job("Acme", 3)];
        let candidates = vec![
            candidate("First", "resume-70"),
            candidate("Second", "resume-70"),
            candidate("Third", "resume-70"),
        ];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        assert_eq!(results[0].eligible_students, "First, Second, Third");
    }

    #[test]
    fn test_matched_set_truncated_to_requirement_count() {
        let jobs = vec![job("Acme", 2)];
        let candidates = vec![
            candidate("A", "resume-90"),
            candidate("B", "resume-80"),
            candidate("C", "resume-70"),
        ];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        assert_eq!(results[0].eligible_students, "A, B");
        // candidates_count still reports all eligible candidates
        assert_eq!(results[0].candidates_count, 3);
    }

    #[test]
    fn test_top_candidate_match_zero_iff_none_eligible() {
        let jobs = vec![job("Acme", 1)];
        let candidates = vec![candidate("Nobody", "resume-0")];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        assert_eq!(results[0].candidates_count, 0);
        assert_eq!(results[0].top_candidate_match, 0);
        assert_eq!(results[0].eligible_students, "");
    }

    #[test]
    fn test_seeded_runs_are_idempotent() {
        let jobs = vec![job("Acme", 2), job("Globex", 1)];
        let candidates = vec![
            candidate("Asha", "https://drive.google.com/file/d/a"),
            candidate("Ravi", "profile.pdf"),
            candidate("Mei", "https://example.com/nothing"),
        ];

        let first = match_candidates(&jobs, &candidates, &RandomSkillScorer::seeded(42)).unwrap();
        let second = match_candidates(&jobs, &candidates, &RandomSkillScorer::seeded(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_with_empty_resume_link() {
        // 1 job (India, Python+SQL, Any degree, 2 slots); 3 candidates, one
        // with no resume link at all. The deterministic scorer matches both
        // skills for the two valid-resume candidates.
        let jobs = vec![job("Acme", 2)];
        let candidates = vec![
            candidate("NoResume", ""),
            candidate("Asha", "https://drive.google.com/file/d/a"),
            candidate("Ravi", "ravi-resume.pdf"),
        ];

        let results = match_candidates(&jobs, &candidates, &FixedRateSkillScorer).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidates_count, 2);
        assert_eq!(results[0].eligible_students, "Asha, Ravi");
        assert_eq!(results[0].top_candidate_match, 100);
    }

    #[test]
    fn test_summary_of_empty_results_is_zeroed() {
        assert_eq!(
            Summary::from_results(&[]),
            Summary {
                total_companies: 0,
                total_candidates: 0,
                avg_top_match: 0
            }
        );
    }

    #[test]
    fn test_summary_aggregates_counts_and_rounds_average() {
        let jobs = vec![job("Acme", 1), job("Globex", 1)];
        let candidates = vec![candidate("A", "resume-90"), candidate("B", "resume-70")];

        let results = match_candidates(&jobs, &candidates, &ScriptedScorer).unwrap();
        let summary = Summary::from_results(&results);
        assert_eq!(summary.total_companies, 2);
        // Both candidates eligible for both jobs
        assert_eq!(summary.total_candidates, 4);
        // Top match is 90 for each job
        assert_eq!(summary.avg_top_match, 90);
    }
}
