//! Serialize cleaned records for download and build the on-screen preview.

use serde::Serialize;

use crate::error::Result;
use crate::types::{Field, TransactionRecord};

pub const OUTPUT_FILE_NAME: &str = "Cleaned_Data.csv";
pub const OUTPUT_CONTENT_TYPE: &str = "text/csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 100;

/// Write the header line and one line per record as comma-separated UTF-8.
pub fn to_csv_bytes(records: &[TransactionRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(Field::ALL.map(Field::name))?;
    for record in records {
        wtr.write_record(record.values())?;
    }

    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// The cleaned CSV as a named download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl OutputArtifact {
    pub fn from_records(records: &[TransactionRecord]) -> Result<Self> {
        Ok(Self {
            file_name: OUTPUT_FILE_NAME.to_string(),
            content_type: OUTPUT_CONTENT_TYPE,
            bytes: to_csv_bytes(records)?,
        })
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }
}

/// Read-only view of the first rows plus the overall count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview<'a> {
    pub rows: &'a [TransactionRecord],
    pub total: usize,
}

impl<'a> Preview<'a> {
    pub fn new(records: &'a [TransactionRecord], limit: usize) -> Self {
        Self {
            rows: &records[..records.len().min(limit)],
            total: records.len(),
        }
    }

    /// Fixed-width text table for terminal display.
    pub fn render(&self) -> String {
        let mut widths = Field::ALL.map(|f| f.name().chars().count());
        for row in self.rows {
            for (w, v) in widths.iter_mut().zip(row.values()) {
                *w = (*w).max(v.chars().count());
            }
        }

        let line = |cells: [&str; 8]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect();
            padded.join(" | ").trim_end().to_string()
        };

        let mut s = String::new();
        s.push_str(&line(Field::ALL.map(Field::name)));
        s.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        s.push_str(&rule.join("-+-"));
        s.push('\n');
        for row in self.rows {
            s.push_str(&line(row.values()));
            s.push('\n');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(description: &str) -> TransactionRecord {
        TransactionRecord {
            posting_date: "01/02/2024".into(),
            description: description.into(),
            db_cr: "D".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_starts_with_literal_header() {
        let bytes = to_csv_bytes(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Posting Date,Effective Date,Branch,Journal,Transaction Description,Amount,DB/CR,Balance\n"
        );
    }

    #[test]
    fn test_csv_quotes_only_when_needed() {
        let mut r = rec("Wire, transfer");
        r.balance = "1,000.00".into();
        let text = String::from_utf8(to_csv_bytes(&[r]).unwrap()).unwrap();
        let second = text.lines().nth(1).unwrap();
        assert_eq!(second, "01/02/2024,,,,\"Wire, transfer\",,D,\"1,000.00\"");
    }

    #[test]
    fn test_artifact_metadata() {
        let a = OutputArtifact::from_records(&[rec("x")]).unwrap();
        assert_eq!(a.file_name, "Cleaned_Data.csv");
        assert_eq!(a.content_type, "text/csv");
        assert_eq!(a.with_file_name("out.csv").file_name, "out.csv");
    }

    #[test]
    fn test_preview_caps_rows_and_keeps_total() {
        let records: Vec<_> = (0..150).map(|i| rec(&format!("t{i}"))).collect();
        let p = Preview::new(&records, DEFAULT_PREVIEW_ROWS);
        assert_eq!(p.rows.len(), 100);
        assert_eq!(p.total, 150);
        assert_eq!(p.rows[99].description, "t99");

        let short = Preview::new(&records[..3], DEFAULT_PREVIEW_ROWS);
        assert_eq!(short.rows.len(), 3);
    }

    #[test]
    fn test_preview_serializes_with_column_titles() {
        let records = vec![rec("Coffee")];
        let json = serde_json::to_value(Preview::new(&records, 10)).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["rows"][0]["Transaction Description"], "Coffee");
        assert_eq!(json["rows"][0]["DB/CR"], "D");
    }

    #[test]
    fn test_render_has_header_rule_and_rows() {
        let records = vec![rec("Coffee")];
        let text = Preview::new(&records, 10).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Posting Date | Effective Date"));
        assert!(lines[1].starts_with("------------"));
        assert!(lines[2].contains("Coffee"));
    }
}
