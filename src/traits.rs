//! Traits for record ingestion and report hand-off

use async_trait::async_trait;

use crate::pipeline::RunArtifacts;
use crate::types::*;

/// Supplier of the two raw record sets
///
/// The reconciliation core never reads files itself; the surrounding
/// application implements this trait over whatever actually holds the
/// exports (spreadsheet reader, database, HTTP download, in-memory fixture).
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch all raw bank statement rows
    async fn bank_rows(&self) -> ReconResult<Vec<RawBankRow>>;

    /// Fetch all raw accounting ledger rows
    async fn ledger_rows(&self) -> ReconResult<Vec<RawLedgerRow>>;
}

/// Consumer of finished reconciliation artifacts
///
/// Presentation and persistence (workbook writer, report mailer, archive)
/// live behind this trait; the core only hands the tables over.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Receive the artifacts of one reconciliation run
    async fn publish(&mut self, artifacts: &RunArtifacts) -> ReconResult<()>;
}
