use crate::types::assessment::Assessment;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct AssessmentDocument<'a> {
    version: &'static str,
    generated_at: String,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

pub fn to_json(assessment: &Assessment) -> Result<String, serde_json::Error> {
    let document = AssessmentDocument {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        assessment,
    };
    serde_json::to_string_pretty(&document)
}
