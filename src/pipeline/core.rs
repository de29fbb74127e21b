//! Main reconciler that drives the pipeline stages over a record source

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::{aggregate, combine, normalize, report};
use crate::pipeline::{ErrorReport, ReportLabels};
use crate::traits::{RecordSource, ReportSink};
use crate::types::*;

/// Everything one reconciliation run produces
///
/// The combined table and both pivots are intermediate artifacts of the
/// pipeline but are handed back alongside the error report so a report
/// writer can present them for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub run_id: Uuid,
    pub created_at: NaiveDateTime,
    pub combined: Vec<CombinedRecord>,
    pub withdrawal_pivot: PivotTable,
    pub deposit_pivot: PivotTable,
    pub error_report: ErrorReport,
}

/// Reconciliation driver over a record source
///
/// Pulls raw bank and ledger rows from the source, runs the pipeline
/// (normalize, combine, pivot, extract errors), and returns the artifacts.
/// The engine itself never touches files; sources and sinks do.
pub struct Reconciler<S: RecordSource> {
    source: S,
    labels: ReportLabels,
}

impl<S: RecordSource> Reconciler<S> {
    /// Create a reconciler with the default report labels
    pub fn new(source: S) -> Self {
        Self {
            source,
            labels: ReportLabels::default(),
        }
    }

    /// Create a reconciler with custom report labels
    pub fn with_labels(source: S, labels: ReportLabels) -> Self {
        Self { source, labels }
    }

    /// The labels this reconciler tags reports with
    pub fn labels(&self) -> &ReportLabels {
        &self.labels
    }

    /// Run the full pipeline once
    pub async fn run(&self) -> ReconResult<RunArtifacts> {
        self.labels.validate()?;

        let bank_rows = self.source.bank_rows().await?;
        let ledger_rows = self.source.ledger_rows().await?;
        log::debug!(
            "fetched {} bank rows, {} ledger rows",
            bank_rows.len(),
            ledger_rows.len()
        );

        let bank = normalize::normalize_bank(bank_rows);
        let ledger = normalize::normalize_ledger(ledger_rows);

        let combined = combine::combine(bank, ledger);
        log::debug!("combined table holds {} records", combined.len());

        let (withdrawal_pivot, deposit_pivot) = aggregate::pivot_tables(&combined);
        let error_report =
            report::extract_errors(&withdrawal_pivot, &deposit_pivot, &self.labels)?;
        log::debug!(
            "{} of {} dates flagged for review",
            error_report.len(),
            withdrawal_pivot.rows.len()
        );

        Ok(RunArtifacts {
            run_id: Uuid::new_v4(),
            created_at: chrono::Utc::now().naive_utc(),
            combined,
            withdrawal_pivot,
            deposit_pivot,
            error_report,
        })
    }

    /// Run the full pipeline and publish the artifacts through a sink
    pub async fn run_into<K: ReportSink>(&self, sink: &mut K) -> ReconResult<RunArtifacts> {
        let artifacts = self.run().await?;
        sink.publish(&artifacts).await?;
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_source::MemorySource;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_reconciler_matches_hand_run_stages() {
        let bank_rows = vec![
            RawBankRow::new("2024.01.01 10:00:00", Some(BigDecimal::from(1000)), None),
            RawBankRow::new("2024.01.02 11:00:00", Some(BigDecimal::from(500)), None),
        ];
        let ledger_rows = vec![RawLedgerRow::new(
            "2024-01-01",
            Some(BigDecimal::from(1000)),
            None,
        )];

        let source = MemorySource::with_rows(bank_rows.clone(), ledger_rows.clone());
        let reconciler = Reconciler::new(source);
        let artifacts = reconciler.run().await.unwrap();

        let by_hand = combine::combine(
            normalize::normalize_bank(bank_rows),
            normalize::normalize_ledger(ledger_rows),
        );
        let (withdrawals, deposits) = aggregate::pivot_tables(&by_hand);
        let errors =
            report::extract_errors(&withdrawals, &deposits, &ReportLabels::default()).unwrap();

        assert_eq!(artifacts.combined, by_hand);
        assert_eq!(artifacts.withdrawal_pivot, withdrawals);
        assert_eq!(artifacts.deposit_pivot, deposits);
        assert_eq!(artifacts.error_report, errors);
    }

    #[tokio::test]
    async fn test_reconciler_rejects_invalid_labels() {
        let source = MemorySource::new();
        let labels = ReportLabels {
            bank: String::new(),
            ..ReportLabels::default()
        };

        let reconciler = Reconciler::with_labels(source, labels);
        let result = reconciler.run().await;

        assert!(matches!(result, Err(ReconError::Validation(_))));
    }
}
