//! External row interface — flat key-value records produced by the
//! spreadsheet-parsing collaborator, keyed by the sheet column headers.
//! Missing cells resolve to defaults here; they never propagate a failure.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::matching::models::{Candidate, JobPosting};
use crate::matching::normalize::normalize_tokens;

/// One row of the employer sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRow {
    #[serde(rename = "Company Name", default)]
    pub company_name: String,
    #[serde(rename = "Role", default)]
    pub role: String,
    #[serde(rename = "Required Skills", default)]
    pub required_skills: String,
    #[serde(rename = "Eligible Degrees", default)]
    pub eligible_degrees: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(
        rename = "Requirement Count",
        default = "default_requirement_count",
        deserialize_with = "de_requirement_count"
    )]
    pub requirement_count: u32,
}

/// One row of the candidate sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRow {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Degree", default)]
    pub degree: String,
    #[serde(rename = "Skills", default)]
    pub skills: String,
    #[serde(rename = "Resume Link", default)]
    pub resume_link: String,
}

impl JobRow {
    /// Maps the raw row into an immutable `JobPosting` record.
    pub fn into_posting(self) -> JobPosting {
        JobPosting {
            company_name: self.company_name,
            role: self.role,
            required_skills: normalize_tokens(&self.required_skills),
            eligible_degrees: normalize_tokens(&self.eligible_degrees),
            country: self.country,
            requirement_count: self.requirement_count,
        }
    }
}

impl CandidateRow {
    /// Maps the raw row into an immutable `Candidate` record.
    pub fn into_candidate(self) -> Candidate {
        Candidate {
            name: self.name,
            country: self.country,
            degree: self.degree,
            skills: normalize_tokens(&self.skills),
            resume_link: self.resume_link,
        }
    }
}

fn default_requirement_count() -> u32 {
    1
}

/// Spreadsheet cells arrive as strings or numbers depending on the upstream
/// parser. Non-numeric, missing and zero values all fall back to 1.
fn de_requirement_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    Ok(if count >= 1 { count as u32 } else { 1 })
}
