use crate::error::{Result, SupplysightError};
use crate::types::factors::CANONICAL_COLUMNS;
use std::path::Path;

/// Starter values written into the template, the same sample the
/// original dashboard shipped.
const SAMPLE_ROW: [i64; 5] = [3, 4, 2, 3, 1];

pub fn template_csv() -> String {
    let mut output = CANONICAL_COLUMNS.join(",");
    output.push('\n');
    output.push_str(&SAMPLE_ROW.map(|value| value.to_string()).join(","));
    output.push('\n');
    output
}

pub fn write_template(path: &Path, no_overwrite: bool) -> Result<()> {
    if no_overwrite && path.exists() {
        return Err(SupplysightError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("template destination already exists: {}", path.display()),
        )));
    }
    std::fs::write(path, template_csv())?;
    Ok(())
}
