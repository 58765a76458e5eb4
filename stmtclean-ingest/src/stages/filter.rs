//! Drop rows that are not transactions: blank lines, statement banners and
//! header rows the bank reprints on every page.

use tracing::debug;

use crate::types::{Field, TransactionRecord};

const BANNER: &str = "account statement";

const HEADER_KEYWORDS: [&str; 8] = [
    "posting date",
    "effective date",
    "branch",
    "journal",
    "transaction description",
    "amount",
    "db/cr",
    "balance",
];

/// Fields inspected by the blank-row pass. DB/CR is left out.
const CONTENT_FIELDS: [Field; 7] = [
    Field::PostingDate,
    Field::EffectiveDate,
    Field::Branch,
    Field::Journal,
    Field::TransactionDescription,
    Field::Amount,
    Field::Balance,
];

pub fn is_blank_row(record: &TransactionRecord) -> bool {
    CONTENT_FIELDS.iter().all(|f| record.is_blank(*f))
}

pub fn is_banner_row(record: &TransactionRecord) -> bool {
    record
        .values()
        .iter()
        .any(|v| v.to_lowercase().contains(BANNER))
}

pub fn is_repeated_header(record: &TransactionRecord) -> bool {
    record.values().iter().any(|v| {
        let folded = v.to_lowercase();
        HEADER_KEYWORDS.iter().any(|k| folded.contains(k))
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub blank: usize,
    pub banner: usize,
    pub header: usize,
}

fn drop_where(
    records: &mut Vec<TransactionRecord>,
    pred: impl Fn(&TransactionRecord) -> bool,
) -> usize {
    let before = records.len();
    records.retain(|r| !pred(r));
    before - records.len()
}

/// Run the blank, banner and repeated-header passes in that order.
pub fn remove_noise(records: &mut Vec<TransactionRecord>) -> FilterCounts {
    let counts = FilterCounts {
        blank: drop_where(records, is_blank_row),
        banner: drop_where(records, is_banner_row),
        header: drop_where(records, is_repeated_header),
    };
    debug!(
        blank = counts.blank,
        banner = counts.banner,
        header = counts.header,
        kept = records.len(),
        "removed noise rows"
    );
    counts
}
