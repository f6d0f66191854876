use crate::error::{Result, SupplysightError};
use crate::types::factors::{
    ResilienceFactors, CANONICAL_COLUMNS, COL_ALT_SUPPLIER_OPTIONS, COL_COST_VOLATILITY,
    COL_GEO_SPREAD, COL_LEAD_TIME, COL_SUPPLIER_COUNT,
};
use std::collections::HashMap;

/// One data row as read from an input file: header/cell pairs in file
/// order.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    columns: Vec<(String, String)>,
}

/// Maps a header onto its canonical column, case-insensitively, going
/// through the configured aliases when the spelling differs.
pub fn resolve_header(header: &str, aliases: &HashMap<String, String>) -> Option<&'static str> {
    let header = header.trim();
    if let Some(canonical) = canonical_column(header) {
        return Some(canonical);
    }
    aliases
        .iter()
        .find(|(alias, _)| alias.trim().eq_ignore_ascii_case(header))
        .and_then(|(_, target)| canonical_column(target))
}

fn canonical_column(name: &str) -> Option<&'static str> {
    CANONICAL_COLUMNS
        .iter()
        .copied()
        .find(|column| column.eq_ignore_ascii_case(name))
}

impl RawRecord {
    pub fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    /// Looks up one canonical column and parses its cell as an integer.
    /// A blank cell counts as missing; nothing is substituted for it.
    pub fn value(&self, canonical: &str, aliases: &HashMap<String, String>) -> Result<i64> {
        let cell = self
            .columns
            .iter()
            .find(|(header, _)| resolve_header(header, aliases) == Some(canonical))
            .map(|(_, cell)| cell.trim());

        let cell = match cell {
            Some(cell) if !cell.is_empty() => cell,
            _ => return Err(SupplysightError::MissingFactor(canonical.to_string())),
        };

        cell.parse::<i64>()
            .map_err(|_| SupplysightError::NonNumericFactor {
                column: canonical.to_string(),
                value: cell.to_string(),
            })
    }

    /// The single conversion step between an input source and the
    /// calculator. Range membership is enforced by the factors
    /// constructor, so nothing out of scale gets past this point.
    pub fn to_factors(&self, aliases: &HashMap<String, String>) -> Result<ResilienceFactors> {
        ResilienceFactors::new(
            self.value(COL_SUPPLIER_COUNT, aliases)?,
            self.value(COL_GEO_SPREAD, aliases)?,
            self.value(COL_COST_VOLATILITY, aliases)?,
            self.value(COL_LEAD_TIME, aliases)?,
            self.value(COL_ALT_SUPPLIER_OPTIONS, aliases)?,
        )
    }
}
