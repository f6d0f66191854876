pub mod csv;
pub mod record;

use crate::error::SupplysightError;
use crate::types::assessment::Finding;
use crate::types::factors::{CANONICAL_COLUMNS, SCALE_MAX, SCALE_MIN};
use self::csv::CsvTable;
use self::record::resolve_header;
use std::collections::HashMap;

/// Validates an input table against the canonical schema without scoring
/// it. Blocking findings are the ones that would fail an evaluation;
/// warnings are tolerated but worth fixing.
pub fn lint_table(table: &CsvTable, aliases: &HashMap<String, String>) -> Vec<Finding> {
    let mut findings = Vec::new();

    let resolved = table
        .headers
        .iter()
        .map(|header| resolve_header(header, aliases))
        .collect::<Vec<_>>();

    for canonical in CANONICAL_COLUMNS {
        let matches = resolved
            .iter()
            .filter(|column| **column == Some(canonical))
            .count();
        if matches == 0 {
            findings.push(Finding {
                id: "schema.missing_column".to_string(),
                title: format!("Missing column {canonical}"),
                body: format!(
                    "No header resolves to {canonical}; scoring this file would fail."
                ),
                blocking: true,
                row: None,
            });
        } else if matches > 1 {
            findings.push(Finding {
                id: "schema.duplicate_column".to_string(),
                title: format!("Duplicate column {canonical}"),
                body: format!(
                    "More than one header resolves to {canonical}; the first match wins."
                ),
                blocking: false,
                row: None,
            });
        }
    }

    for (header, column) in table.headers.iter().zip(&resolved) {
        if column.is_none() {
            findings.push(Finding {
                id: "schema.unknown_column".to_string(),
                title: format!("Unknown column {header}"),
                body: format!("{header} matches no canonical column or configured alias."),
                blocking: false,
                row: None,
            });
        }
    }

    if table.rows.is_empty() {
        findings.push(Finding {
            id: "schema.no_data_rows".to_string(),
            title: "No data rows".to_string(),
            body: "The file contains only a header; there is nothing to score.".to_string(),
            blocking: true,
            row: None,
        });
    }

    let present = CANONICAL_COLUMNS
        .iter()
        .copied()
        .filter(|canonical| resolved.iter().flatten().any(|column| column == canonical))
        .collect::<Vec<_>>();

    for (index, row) in table.rows.iter().enumerate() {
        let row_number = index + 1;
        for canonical in &present {
            match row.value(canonical, aliases) {
                Ok(value) if !(SCALE_MIN..=SCALE_MAX).contains(&value) => {
                    findings.push(Finding {
                        id: "schema.out_of_range".to_string(),
                        title: format!("{canonical} out of range"),
                        body: format!("{canonical} is {value}, outside the 1-5 scale."),
                        blocking: true,
                        row: Some(row_number),
                    });
                }
                Ok(_) => {}
                Err(SupplysightError::MissingFactor(_)) => {
                    findings.push(Finding {
                        id: "schema.empty_cell".to_string(),
                        title: format!("Empty {canonical} cell"),
                        body: format!(
                            "{canonical} is blank in this row; blanks are never defaulted."
                        ),
                        blocking: true,
                        row: Some(row_number),
                    });
                }
                Err(SupplysightError::NonNumericFactor { value, .. }) => {
                    findings.push(Finding {
                        id: "schema.non_numeric".to_string(),
                        title: format!("Non-numeric {canonical} cell"),
                        body: format!("{canonical} is {value:?}, which does not parse."),
                        blocking: true,
                        row: Some(row_number),
                    });
                }
                Err(_) => {}
            }
        }
    }

    findings
}
