//! stmtclean-ingest: clean noisy bank-statement CSV exports into an eight-column
//! transaction table (header detection, row extraction, noise filtering and
//! spillover-row merging).

pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod stages;
pub mod types;

pub use error::{CleanError, Result};
pub use loader::{StatementInput, MAX_INPUTS};
pub use output::{OutputArtifact, Preview, OUTPUT_FILE_NAME};
pub use pipeline::{clean, run_gated, CleanReport, CleanedTable};
pub use session::Session;
pub use stages::header::ColumnIndexMap;
pub use types::{ColumnSource, Field, RawTable, TransactionRecord};
