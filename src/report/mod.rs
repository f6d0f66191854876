pub mod json;
pub mod md;

use crate::error::SupplysightError;
use crate::types::assessment::Assessment;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> Result<String, SupplysightError> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(SupplysightError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessment)),
    }
}
