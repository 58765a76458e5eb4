//! Re-attach wrapped text to the transaction it overflowed from.
//!
//! When a description or balance is too long for one printed line, the export
//! carries the remainder on an extra row with no dates and no DB/CR. Those rows
//! are folded into the most recent kept record instead of being emitted.

use tracing::debug;

use crate::types::{Field, TransactionRecord};

/// A row with no dates and no DB/CR, but some Branch, description or Balance text.
pub fn is_spillover(record: &TransactionRecord) -> bool {
    record.is_blank(Field::PostingDate)
        && record.is_blank(Field::EffectiveDate)
        && record.is_blank(Field::DbCr)
        && (!record.is_blank(Field::Branch)
            || !record.is_blank(Field::TransactionDescription)
            || !record.is_blank(Field::Balance))
}

/// Append a spillover row's text onto the record it continues.
///
/// Branch and description are joined with a space; balance digits are glued on
/// directly since a wrapped number has no separator.
pub fn absorb(target: &mut TransactionRecord, spill: &TransactionRecord) {
    if !spill.is_blank(Field::Branch) {
        target.branch.push(' ');
        target.branch.push_str(&spill.branch);
    }
    if !spill.is_blank(Field::TransactionDescription) {
        target.description.push(' ');
        target.description.push_str(&spill.description);
    }
    if !spill.is_blank(Field::Balance) {
        target.balance.push_str(&spill.balance);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCounts {
    /// Spillover rows folded into a previous record.
    pub merged: usize,
    /// Spillover rows with nothing before them to merge into.
    pub orphaned: usize,
}

/// Single forward pass folding spillover rows into the last kept record.
pub fn merge_spillover(records: Vec<TransactionRecord>) -> (Vec<TransactionRecord>, MergeCounts) {
    let mut out: Vec<TransactionRecord> = Vec::with_capacity(records.len());
    let mut counts = MergeCounts::default();

    for record in records {
        if !is_spillover(&record) {
            out.push(record);
            continue;
        }
        match out.last_mut() {
            Some(prev) => {
                absorb(prev, &record);
                counts.merged += 1;
            }
            None => counts.orphaned += 1,
        }
    }

    debug!(
        merged = counts.merged,
        orphaned = counts.orphaned,
        kept = out.len(),
        "merged spillover rows"
    );
    (out, counts)
}
