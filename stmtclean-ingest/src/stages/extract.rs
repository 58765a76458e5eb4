//! Turn every row below the header into a fixed eight-field record.
//!
//! The DB/CR cell decides the shape: a numeric value marks a running-balance
//! (ledger) line, anything else is a full transaction line.

use tracing::info;

use crate::stages::header::ColumnIndexMap;
use crate::types::{Field, RawTable, TransactionRecord, cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Ledger,
    Full,
}

/// Whether a cell reads as a decimal number once thousands separators are removed.
pub fn is_decimal(raw: &str) -> bool {
    raw.replace(',', "").trim().parse::<f64>().is_ok()
}

pub fn classify(row: &[String], columns: &ColumnIndexMap) -> RowKind {
    if is_decimal(cell(row, columns.resolve(Field::DbCr))) {
        RowKind::Ledger
    } else {
        RowKind::Full
    }
}

/// Build the record for one data row.
pub fn extract_row(row: &[String], columns: &ColumnIndexMap) -> TransactionRecord {
    let db_cr = cell(row, columns.resolve(Field::DbCr));
    match classify(row, columns) {
        RowKind::Ledger => TransactionRecord::ledger(db_cr),
        RowKind::Full => {
            let mut record = TransactionRecord::default();
            for field in Field::ALL {
                *record.get_mut(field) = cell(row, columns.resolve(field)).to_string();
            }
            record
        }
    }
}

/// Extract one record per row strictly below the header, in row order.
pub fn extract_rows(
    table: &RawTable,
    header_idx: usize,
    columns: &ColumnIndexMap,
) -> Vec<TransactionRecord> {
    let records: Vec<TransactionRecord> = table
        .rows()
        .iter()
        .skip(header_idx + 1)
        .map(|row| extract_row(row, columns))
        .collect();
    info!(rows = records.len(), "extracted data rows");
    records
}
