//! Read statement exports as untyped text tables and stitch them together.
//!
//! No header is assumed and nothing is type-coerced: every cell stays the exact
//! text from the file, with the empty string standing in for "no value".

use tracing::info;

use crate::error::{CleanError, Result};
use crate::types::RawTable;

/// Most statement exports accepted in one run.
pub const MAX_INPUTS: usize = 2;

/// One uploaded export: a display label (usually the file name) and its bytes.
#[derive(Debug, Clone)]
pub struct StatementInput {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl StatementInput {
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

/// Parse a single comma-separated export.
pub fn load_table(input: &StatementInput) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(input.bytes.as_slice());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| CleanError::Malformed {
            input: input.label.clone(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(CleanError::EmptyInput {
            input: input.label.clone(),
        });
    }

    Ok(RawTable::new(rows))
}

/// Load every input in order and concatenate the rows.
pub fn load_and_combine(inputs: &[StatementInput]) -> Result<RawTable> {
    if inputs.is_empty() {
        return Err(CleanError::NoInput);
    }
    if inputs.len() > MAX_INPUTS {
        return Err(CleanError::TooManyInputs {
            count: inputs.len(),
        });
    }

    let mut combined = RawTable::default();
    for input in inputs {
        let table = load_table(input)?;
        info!(input = %input.label, rows = table.len(), "loaded statement");
        combined.extend(table);
    }

    Ok(combined)
}
