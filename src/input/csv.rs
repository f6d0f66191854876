use super::record::RawRecord;
use crate::error::{Result, SupplysightError};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// A parsed input file: the header row plus every data row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

pub fn read_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let columns = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(RawRecord::new(columns));
    }

    debug!(rows = rows.len(), path = %path.display(), "read input table");
    Ok(CsvTable { headers, rows })
}

/// The first data row of an uploaded file, which is the row every
/// evaluation consumes. A header-only file is an error, not a zero
/// score.
pub fn read_first_record(path: &Path) -> Result<RawRecord> {
    let table = read_table(path)?;
    table
        .rows
        .into_iter()
        .next()
        .ok_or_else(|| SupplysightError::EmptyInput(path.display().to_string()))
}
