//! End-to-end cleaning run: load, locate header, extract, filter, merge.

use serde::Serialize;
use tracing::info;

use crate::error::{CleanError, Result};
use crate::loader::{StatementInput, load_and_combine};
use crate::output::{OutputArtifact, Preview};
use crate::session::Session;
use crate::stages::{extract, filter, header, spillover};
use crate::types::TransactionRecord;

/// Per-stage row counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub inputs: usize,
    pub raw_rows: usize,
    pub header_row: usize,
    pub extracted: usize,
    pub dropped_blank: usize,
    pub dropped_banner: usize,
    pub dropped_header: usize,
    pub merged_spillover: usize,
    pub dropped_orphan_spillover: usize,
    pub records: usize,
}

/// Cleaned records in statement order, with the counts that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedTable {
    pub records: Vec<TransactionRecord>,
    pub report: CleanReport,
}

impl CleanedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn preview(&self, limit: usize) -> Preview<'_> {
        Preview::new(&self.records, limit)
    }

    pub fn to_artifact(&self) -> Result<OutputArtifact> {
        OutputArtifact::from_records(&self.records)
    }
}

/// Run the whole pipeline over one or two statement exports.
///
/// Any error halts the run; nothing partial is returned.
pub fn clean(inputs: &[StatementInput]) -> Result<CleanedTable> {
    let table = load_and_combine(inputs)?;
    let (header_row, columns) = header::map_columns(&table)?;

    let mut records = extract::extract_rows(&table, header_row, &columns);
    let extracted = records.len();

    let noise = filter::remove_noise(&mut records);
    let (records, merge) = spillover::merge_spillover(records);

    let report = CleanReport {
        inputs: inputs.len(),
        raw_rows: table.len(),
        header_row,
        extracted,
        dropped_blank: noise.blank,
        dropped_banner: noise.banner,
        dropped_header: noise.header,
        merged_spillover: merge.merged,
        dropped_orphan_spillover: merge.orphaned,
        records: records.len(),
    };
    info!(records = report.records, "cleaning finished");

    Ok(CleanedTable { records, report })
}

/// [`clean`], but only for a session that has passed the access gate.
pub fn run_gated(session: &Session, inputs: &[StatementInput]) -> Result<CleanedTable> {
    if !session.is_authenticated() {
        return Err(CleanError::NotAuthenticated);
    }
    clean(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ",Posting Date,,,,Effective Date,,,,Branch,Journal,Transaction Description,Amount,DB/CR,Balance";

    fn statement(body: &str) -> StatementInput {
        StatementInput::new(
            "statement.csv",
            format!("Account Statement\nAccount No,0012345\n{HEADER}\n{body}"),
        )
    }

    #[test]
    fn test_clean_merges_and_filters() {
        let input = statement(concat!(
            ",01/02/2024,,,,01/02/2024,,,,0998,J1,Wire transfer,500.00,D,1000\n",
            ",,,,,,,,,,,to vendor X,,,00\n",
            ",,,,,,,,,,,,,,\n",
            ",03/02/2024,,,,03/02/2024,,,,0998,J2,Salary,900.00,C,100900\n",
        ));
        let cleaned = clean(&[input]).unwrap();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned.records[0].description, "Wire transfer to vendor X");
        assert_eq!(cleaned.records[0].balance, "100000");
        assert_eq!(cleaned.records[1].description, "Salary");

        let r = &cleaned.report;
        assert_eq!(r.raw_rows, 7);
        assert_eq!(r.header_row, 2);
        assert_eq!(r.extracted, 4);
        assert_eq!(r.dropped_blank, 1);
        assert_eq!(r.merged_spillover, 1);
        assert_eq!(r.records, 2);
    }

    #[test]
    fn test_missing_header_halts() {
        let input = StatementInput::new("noise.csv", "Account Statement\nfoo,bar\n");
        assert!(matches!(clean(&[input]), Err(CleanError::HeaderNotFound)));
    }

    #[test]
    fn test_gate_blocks_unauthenticated_session() {
        let input = statement(",01/02/2024,,,,01/02/2024,,,,0998,J1,Fee,1.00,D,5\n");
        let mut session = Session::new();
        assert!(matches!(
            run_gated(&session, std::slice::from_ref(&input)),
            Err(CleanError::NotAuthenticated)
        ));

        session.authenticate("pw", "pw");
        let cleaned = run_gated(&session, &[input]).unwrap();
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_output_is_deterministic() {
        let body = ",01/02/2024,,,,01/02/2024,,,,0998,J1,Fee,1.00,D,5\n";
        let a = clean(&[statement(body)]).unwrap().to_artifact().unwrap();
        let b = clean(&[statement(body)]).unwrap().to_artifact().unwrap();
        assert_eq!(a.bytes, b.bytes);
    }
}
