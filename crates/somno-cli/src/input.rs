use std::path::Path;

use somno_core::error::CoreError;
use somno_core::models::questionnaire::QuestionnaireRecord;

/// Parse a submission file: either one questionnaire object or an array of them.
pub fn parse_records(contents: &str) -> Result<Vec<QuestionnaireRecord>, CoreError> {
    match serde_json::from_str::<serde_json::Value>(contents)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(QuestionnaireRecord::from_value)
            .collect(),
        single => Ok(vec![QuestionnaireRecord::from_value(single)?]),
    }
}

pub fn read_records(path: &Path) -> eyre::Result<Vec<QuestionnaireRecord>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    let records = parse_records(&contents)?;
    tracing::debug!(path = %path.display(), count = records.len(), "questionnaires loaded");
    Ok(records)
}
