//! CSV export of ranked results

use crate::engine::RankedResult;
use crate::error::Result;

/// Tabular column set, fixed for downstream spreadsheet consumers.
const CSV_HEADERS: [&str; 9] = [
    "uuid",
    "filename",
    "combined_score",
    "skill_score",
    "text_score",
    "experience_score",
    "skills_found",
    "experience_years",
    "contact_info",
];

/// Serialize ranked results to CSV with contact info flattened to a single
/// display string.
pub fn ranked_results_to_csv(results: &[RankedResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for result in results {
        writer.write_record([
            result.uuid.as_str(),
            result.filename.as_str(),
            &result.combined_score.to_string(),
            &result.skill_score.to_string(),
            &result.text_score.to_string(),
            &result.experience_score.to_string(),
            result.skills_found.as_str(),
            &result.experience_years.to_string(),
            &result.contact_info.flatten(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        crate::error::ResumeRankerError::OutputFormatting(format!("CSV buffer error: {}", e))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| crate::error::ResumeRankerError::OutputFormatting(e.to_string()))
}
