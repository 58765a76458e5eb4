//! Header row detection and column mapping.
//!
//! Statement exports bury the real header under banners and account details,
//! and the bank pads each header cell with extra text. A row counts as the
//! header once every required field name shows up, case-insensitively, as a
//! substring of some cell in that row.

use std::collections::HashMap;

use tracing::info;

use crate::error::{CleanError, Result};
use crate::types::{ColumnSource, Field, RawTable};

/// Zero-based column position of every required field, as found in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndexMap {
    indices: HashMap<Field, usize>,
}

impl ColumnIndexMap {
    /// Map each field to the first header cell (left to right) whose text contains
    /// the field name. Each field is scanned independently, so one cell may match
    /// more than one field.
    pub fn from_header_row(header: &[String]) -> Result<Self> {
        let folded: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();

        let mut indices = HashMap::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let needle = field.name().to_lowercase();
            let idx = folded
                .iter()
                .position(|c| c.contains(&needle))
                .ok_or(CleanError::MissingColumn { field })?;
            indices.insert(field, idx);
        }

        Ok(Self { indices })
    }

    /// Name-detected position of a field.
    pub fn matched(&self, field: Field) -> usize {
        // Every field is inserted by the only constructor.
        self.indices[&field]
    }

    /// Position the extractor reads for a field, after applying the field's
    /// column strategy.
    pub fn resolve(&self, field: Field) -> usize {
        match field.source() {
            ColumnSource::FixedPosition(idx) => idx,
            ColumnSource::NameMatched => self.matched(field),
        }
    }
}

/// True when every required field name appears in some cell of the row.
pub fn is_header_row(row: &[String]) -> bool {
    let folded: Vec<String> = row.iter().map(|c| c.trim().to_lowercase()).collect();
    Field::ALL.iter().all(|field| {
        let needle = field.name().to_lowercase();
        folded.iter().any(|c| c.contains(&needle))
    })
}

/// Index of the first row that qualifies as the header.
pub fn locate_header(table: &RawTable) -> Result<usize> {
    let idx = table
        .rows()
        .iter()
        .position(|row| is_header_row(row))
        .ok_or(CleanError::HeaderNotFound)?;
    info!(row = idx, "located header row");
    Ok(idx)
}

/// Locate the header and build its column map in one step.
pub fn map_columns(table: &RawTable) -> Result<(usize, ColumnIndexMap)> {
    let idx = locate_header(table)?;
    let header = table.row(idx).unwrap_or_default();
    let map = ColumnIndexMap::from_header_row(header)?;
    Ok((idx, map))
}
