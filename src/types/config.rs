use crate::error::SupplysightError;
use crate::types::factors::CANONICAL_COLUMNS;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplysightConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Maps alternate CSV header spellings onto canonical column names.
    pub aliases: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl SupplysightConfig {
    pub fn aliases(&self) -> HashMap<String, String> {
        self.input
            .as_ref()
            .and_then(|input| input.aliases.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), SupplysightError> {
        if let Some(aliases) = self.input.as_ref().and_then(|input| input.aliases.as_ref()) {
            for (alias, target) in aliases {
                if alias.trim().is_empty() {
                    return Err(SupplysightError::ConfigParse(
                        "input.aliases keys must be non-empty header names".to_string(),
                    ));
                }
                if !CANONICAL_COLUMNS
                    .iter()
                    .any(|column| column.eq_ignore_ascii_case(target))
                {
                    return Err(SupplysightError::ConfigParse(format!(
                        "input.aliases target is not a canonical column: {target}"
                    )));
                }
            }
        }

        if let Some(format) = self.default_format() {
            if !matches!(format, "json" | "md") {
                return Err(SupplysightError::ConfigParse(format!(
                    "output.format must be one of json, md (found {format})"
                )));
            }
        }

        Ok(())
    }
}
