//! Domain records for a single matching run. Created once from external row
//! data, consumed read-only by the engine, discarded after results are built.

use serde::{Deserialize, Serialize};

/// One employer role listing. Immutable after load.
#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub company_name: String,
    pub role: String,
    /// Declaration order from the sheet is preserved.
    pub required_skills: Vec<String>,
    pub eligible_degrees: Vec<String>,
    /// Possibly empty; an empty country matches anyone.
    pub country: String,
    /// Open slots to fill. Always ≥ 1.
    pub requirement_count: u32,
}

/// One applicant profile. Immutable after load.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    pub country: String,
    pub degree: String,
    pub skills: Vec<String>,
    pub resume_link: String,
}

/// Outcome of evaluating one (job, candidate) pair. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    /// Subset of the job's required skills, in declaration order.
    pub matched_skills: Vec<String>,
    /// Rounded, 0–100.
    pub match_percentage: u32,
}

impl EligibilityVerdict {
    /// The zero verdict: not eligible, nothing matched.
    pub fn rejected() -> Self {
        EligibilityVerdict {
            eligible: false,
            matched_skills: Vec::new(),
            match_percentage: 0,
        }
    }
}

/// View of one eligible candidate, carried through ranking.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedCandidate {
    pub name: String,
    pub country: String,
    pub degree: String,
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
}

/// One output record per input job, in input order.
/// Field order here is also the CSV column order of the export contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub company_name: String,
    pub role: String,
    /// Required skills joined with ", ".
    pub required_skills: String,
    pub eligible_degrees: String,
    /// Top-N matched candidate names joined with ", ", N = requirement_count.
    pub eligible_students: String,
    pub requirement_count: u32,
    /// Total eligible candidates, before truncation to requirement_count.
    pub candidates_count: u32,
    pub country: String,
    /// Match percentage of the best-ranked candidate; 0 iff none eligible.
    pub top_candidate_match: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_result_serializes_with_camel_case_wire_names() {
        let result = JobResult {
            company_name: "Acme".to_string(),
            role: "Backend Engineer".to_string(),
            required_skills: "Rust, SQL".to_string(),
            eligible_degrees: "Any".to_string(),
            eligible_students: "Asha".to_string(),
            requirement_count: 1,
            candidates_count: 1,
            country: "India".to_string(),
            top_candidate_match: 80,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["eligibleStudents"], "Asha");
        assert_eq!(json["topCandidateMatch"], 80);
    }

    #[test]
    fn test_rejected_verdict_is_zeroed() {
        let verdict = EligibilityVerdict::rejected();
        assert!(!verdict.eligible);
        assert!(verdict.matched_skills.is_empty());
        assert_eq!(verdict.match_percentage, 0);
    }
}
