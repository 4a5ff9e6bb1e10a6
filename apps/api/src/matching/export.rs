//! CSV projection of a matching run — the export contract for the
//! presentation layer. One header row, one row per `JobResult`, every field
//! quoted as a string; reading the output back yields identical values.

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::matching::models::JobResult;

/// Column order follows the `JobResult` field order.
pub const CSV_HEADERS: [&str; 9] = [
    "companyName",
    "role",
    "requiredSkills",
    "eligibleDegrees",
    "eligibleStudents",
    "requirementCount",
    "candidatesCount",
    "country",
    "topCandidateMatch",
];

pub fn to_csv(results: &[JobResult]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS).context("write csv header")?;
    for result in results {
        writer
            .write_record([
                result.company_name.as_str(),
                result.role.as_str(),
                result.required_skills.as_str(),
                result.eligible_degrees.as_str(),
                result.eligible_students.as_str(),
                &result.requirement_count.to_string(),
                &result.candidates_count.to_string(),
                result.country.as_str(),
                &result.top_candidate_match.to_string(),
            ])
            .context("write csv row")?;
    }

    let bytes = writer.into_inner().context("flush csv writer")?;
    String::from_utf8(bytes).context("csv output is not valid utf-8")
}
