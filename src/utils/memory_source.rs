//! In-memory source and sink implementations for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::pipeline::RunArtifacts;
use crate::traits::*;
use crate::types::*;

/// In-memory record source for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bank: Arc<RwLock<Vec<RawBankRow>>>,
    ledger: Arc<RwLock<Vec<RawLedgerRow>>>,
}

impl MemorySource {
    /// Create an empty memory source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory source pre-loaded with both record sets
    pub fn with_rows(bank: Vec<RawBankRow>, ledger: Vec<RawLedgerRow>) -> Self {
        Self {
            bank: Arc::new(RwLock::new(bank)),
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Append a bank row
    pub fn push_bank_row(&self, row: RawBankRow) {
        self.bank.write().unwrap().push(row);
    }

    /// Append a ledger row
    pub fn push_ledger_row(&self, row: RawLedgerRow) {
        self.ledger.write().unwrap().push(row);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.bank.write().unwrap().clear();
        self.ledger.write().unwrap().clear();
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn bank_rows(&self) -> ReconResult<Vec<RawBankRow>> {
        Ok(self.bank.read().unwrap().clone())
    }

    async fn ledger_rows(&self) -> ReconResult<Vec<RawLedgerRow>> {
        Ok(self.ledger.read().unwrap().clone())
    }
}

/// In-memory report sink that records every published run
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    published: Arc<RwLock<Vec<RunArtifacts>>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs published so far
    pub fn published_count(&self) -> usize {
        self.published.read().unwrap().len()
    }

    /// The most recently published artifacts, if any
    pub fn last_published(&self) -> Option<RunArtifacts> {
        self.published.read().unwrap().last().cloned()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn publish(&mut self, artifacts: &RunArtifacts) -> ReconResult<()> {
        self.published.write().unwrap().push(artifacts.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_memory_source_round_trips_rows() {
        let source = MemorySource::new();
        source.push_bank_row(RawBankRow::new(
            "2024.01.15",
            Some(BigDecimal::from(100)),
            None,
        ));
        source.push_ledger_row(RawLedgerRow::new(
            "2024-01-15",
            Some(BigDecimal::from(100)),
            None,
        ));

        let bank = source.bank_rows().await.unwrap();
        let ledger = source.ledger_rows().await.unwrap();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].posted_at, "2024.01.15");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].date, "2024-01-15");
    }

    #[tokio::test]
    async fn test_memory_source_clear() {
        let source = MemorySource::with_rows(
            vec![RawBankRow::new("2024.01.15", None, None)],
            vec![RawLedgerRow::new("2024-01-15", None, None)],
        );

        source.clear();

        assert!(source.bank_rows().await.unwrap().is_empty());
        assert!(source.ledger_rows().await.unwrap().is_empty());
    }
}
