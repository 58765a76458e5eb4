use serde::{Deserialize, Serialize};

/// The eight fixed fields every cleaned statement row carries, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    PostingDate,
    EffectiveDate,
    Branch,
    Journal,
    TransactionDescription,
    Amount,
    DbCr,
    Balance,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::PostingDate,
        Field::EffectiveDate,
        Field::Branch,
        Field::Journal,
        Field::TransactionDescription,
        Field::Amount,
        Field::DbCr,
        Field::Balance,
    ];

    /// Column title as it appears in the statement header and in the cleaned output.
    pub fn name(self) -> &'static str {
        match self {
            Field::PostingDate => "Posting Date",
            Field::EffectiveDate => "Effective Date",
            Field::Branch => "Branch",
            Field::Journal => "Journal",
            Field::TransactionDescription => "Transaction Description",
            Field::Amount => "Amount",
            Field::DbCr => "DB/CR",
            Field::Balance => "Balance",
        }
    }

    /// How the source column for this field is resolved.
    ///
    /// The two dates and the branch sit at fixed positions in the bank's export;
    /// everything else follows the detected header.
    pub fn source(self) -> ColumnSource {
        match self {
            Field::PostingDate => ColumnSource::FixedPosition(POSTING_DATE_COL),
            Field::EffectiveDate => ColumnSource::FixedPosition(EFFECTIVE_DATE_COL),
            Field::Branch => ColumnSource::FixedPosition(BRANCH_COL),
            _ => ColumnSource::NameMatched,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const POSTING_DATE_COL: usize = 1;
pub const EFFECTIVE_DATE_COL: usize = 5;
pub const BRANCH_COL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Literal column position, independent of the header row.
    FixedPosition(usize),
    /// Position of the first header cell containing the field name.
    NameMatched,
}

/// Untyped rows of text cells, as read from one or more statement exports.
///
/// Rows may be ragged; a cell past the end of a row reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// Append another table's rows after this one's.
    pub fn extend(&mut self, other: RawTable) {
        self.rows.extend(other.rows);
    }
}

/// Read a cell, treating anything past the row's width as empty.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// One cleaned statement row. All values are kept as the raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Posting Date")]
    pub posting_date: String,
    #[serde(rename = "Effective Date")]
    pub effective_date: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Journal")]
    pub journal: String,
    #[serde(rename = "Transaction Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "DB/CR")]
    pub db_cr: String,
    #[serde(rename = "Balance")]
    pub balance: String,
}

impl TransactionRecord {
    /// A running-balance line: only DB/CR carries a value.
    pub fn ledger(db_cr: impl Into<String>) -> Self {
        Self {
            db_cr: db_cr.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PostingDate => &self.posting_date,
            Field::EffectiveDate => &self.effective_date,
            Field::Branch => &self.branch,
            Field::Journal => &self.journal,
            Field::TransactionDescription => &self.description,
            Field::Amount => &self.amount,
            Field::DbCr => &self.db_cr,
            Field::Balance => &self.balance,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::PostingDate => &mut self.posting_date,
            Field::EffectiveDate => &mut self.effective_date,
            Field::Branch => &mut self.branch,
            Field::Journal => &mut self.journal,
            Field::TransactionDescription => &mut self.description,
            Field::Amount => &mut self.amount,
            Field::DbCr => &mut self.db_cr,
            Field::Balance => &mut self.balance,
        }
    }

    /// Field values in output column order.
    pub fn values(&self) -> [&str; 8] {
        Field::ALL.map(|f| self.get(f))
    }

    /// True when the field is empty after trimming.
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_matched_sources() {
        assert_eq!(Field::PostingDate.source(), ColumnSource::FixedPosition(1));
        assert_eq!(Field::EffectiveDate.source(), ColumnSource::FixedPosition(5));
        assert_eq!(Field::Branch.source(), ColumnSource::FixedPosition(9));
        for f in [
            Field::Journal,
            Field::TransactionDescription,
            Field::Amount,
            Field::DbCr,
            Field::Balance,
        ] {
            assert_eq!(f.source(), ColumnSource::NameMatched);
        }
    }

    #[test]
    fn test_ledger_record_only_has_dbcr() {
        let r = TransactionRecord::ledger("1,234.56");
        assert_eq!(r.db_cr, "1,234.56");
        for f in Field::ALL.iter().filter(|f| **f != Field::DbCr) {
            assert_eq!(r.get(*f), "");
        }
    }

    #[test]
    fn test_cell_past_row_end_is_empty() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(cell(&row, 1), "b");
        assert_eq!(cell(&row, 9), "");
    }
}
