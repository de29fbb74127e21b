//! Error report extraction and report labelling configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::utils::validation::validate_label;

/// Display labels for the tables a reconciliation run produces
///
/// Passed explicitly into report building instead of living as process-wide
/// state; a report writer uses these as sheet or section names. The bank
/// and ledger labels must be non-empty and distinct, since they double as
/// the human-readable source tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLabels {
    pub bank: String,
    pub ledger: String,
    pub combined: String,
    pub withdrawal_pivot: String,
    pub deposit_pivot: String,
    pub error_report: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            bank: "Bank Statement".to_string(),
            ledger: "Accounting Ledger".to_string(),
            combined: "Combined Records".to_string(),
            withdrawal_pivot: "Withdrawal Pivot".to_string(),
            deposit_pivot: "Deposit Pivot".to_string(),
            error_report: "Error Review".to_string(),
        }
    }
}

impl ReportLabels {
    /// Validate the label set
    pub fn validate(&self) -> ReconResult<()> {
        validate_label("bank", &self.bank)?;
        validate_label("ledger", &self.ledger)?;
        validate_label("combined", &self.combined)?;
        validate_label("withdrawal pivot", &self.withdrawal_pivot)?;
        validate_label("deposit pivot", &self.deposit_pivot)?;
        validate_label("error report", &self.error_report)?;

        if self.bank == self.ledger {
            return Err(ReconError::Validation(
                "Bank and ledger labels must be distinct".to_string(),
            ));
        }

        Ok(())
    }

    /// The display label for a pivot category
    pub fn category_label(&self, flow: Flow) -> &str {
        match flow {
            Flow::Withdrawal => &self.withdrawal_pivot,
            Flow::Deposit => &self.deposit_pivot,
        }
    }
}

/// One mismatched date in the final error report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReportRow {
    /// Which pivot the mismatch came from
    pub category: Flow,
    /// Display label for the category, taken from [`ReportLabels`]
    pub category_label: String,
    pub date_key: DateKey,
    pub bank_total: BigDecimal,
    pub ledger_total: BigDecimal,
    pub difference: BigDecimal,
    pub status: MatchStatus,
}

/// Final error report: the artifact a reviewer consults
///
/// Withdrawal mismatches come first, then deposit mismatches, each group in
/// ascending date-key order; the fresh sequential index is the row position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub rows: Vec<ErrorReportRow>,
}

impl ErrorReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mismatched date keys for one category
    pub fn dates_for(&self, category: Flow) -> Vec<&DateKey> {
        self.rows
            .iter()
            .filter(|row| row.category == category)
            .map(|row| &row.date_key)
            .collect()
    }
}

/// Extract the error report from both pivot tables
///
/// Filters each pivot to its `Error` rows, tags them with their category
/// label, and concatenates withdrawal errors followed by deposit errors.
pub fn extract_errors(
    withdrawal_pivot: &PivotTable,
    deposit_pivot: &PivotTable,
    labels: &ReportLabels,
) -> ReconResult<ErrorReport> {
    labels.validate()?;

    let mut rows = Vec::new();
    for pivot in [withdrawal_pivot, deposit_pivot] {
        rows.extend(pivot.error_rows().map(|aggregate| ErrorReportRow {
            category: pivot.flow,
            category_label: labels.category_label(pivot.flow).to_string(),
            date_key: aggregate.date_key.clone(),
            bank_total: aggregate.bank_total.clone(),
            ledger_total: aggregate.ledger_total.clone(),
            difference: aggregate.difference.clone(),
            status: aggregate.status,
        }));
    }

    Ok(ErrorReport { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(date: &str, bank: i64, ledger: i64) -> DailyAggregate {
        let difference = BigDecimal::from(bank - ledger);
        let status = MatchStatus::from_difference(&difference);
        DailyAggregate {
            date_key: DateKey::from_raw(date),
            bank_total: BigDecimal::from(bank),
            ledger_total: BigDecimal::from(ledger),
            difference,
            status,
        }
    }

    #[test]
    fn test_extract_errors_filters_and_orders() {
        let withdrawals = PivotTable {
            flow: Flow::Withdrawal,
            rows: vec![aggregate("20240101", 1000, 1000), aggregate("20240102", 500, 0)],
        };
        let deposits = PivotTable {
            flow: Flow::Deposit,
            rows: vec![aggregate("20240101", 300, 200)],
        };

        let report = extract_errors(&withdrawals, &deposits, &ReportLabels::default()).unwrap();

        assert_eq!(report.len(), 2);
        // Withdrawal mismatches first, then deposit mismatches
        assert_eq!(report.rows[0].category, Flow::Withdrawal);
        assert_eq!(report.rows[0].date_key.as_str(), "20240102");
        assert_eq!(report.rows[1].category, Flow::Deposit);
        assert_eq!(report.rows[1].date_key.as_str(), "20240101");
    }

    #[test]
    fn test_extract_errors_tags_category_labels() {
        let withdrawals = PivotTable {
            flow: Flow::Withdrawal,
            rows: vec![aggregate("20240102", 500, 0)],
        };
        let deposits = PivotTable {
            flow: Flow::Deposit,
            rows: vec![],
        };

        let labels = ReportLabels::default();
        let report = extract_errors(&withdrawals, &deposits, &labels).unwrap();

        assert_eq!(report.rows[0].category_label, labels.withdrawal_pivot);
        assert_eq!(report.rows[0].status, MatchStatus::Error);
    }

    #[test]
    fn test_matched_dates_stay_out_of_report() {
        let withdrawals = PivotTable {
            flow: Flow::Withdrawal,
            rows: vec![aggregate("20240101", 1000, 1000)],
        };
        let deposits = PivotTable {
            flow: Flow::Deposit,
            rows: vec![aggregate("20240101", 40, 40)],
        };

        let report = extract_errors(&withdrawals, &deposits, &ReportLabels::default()).unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn test_labels_validation_rejects_empty_label() {
        let labels = ReportLabels {
            combined: "".to_string(),
            ..ReportLabels::default()
        };

        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_labels_validation_rejects_colliding_source_labels() {
        let labels = ReportLabels {
            bank: "Records".to_string(),
            ledger: "Records".to_string(),
            ..ReportLabels::default()
        };

        assert!(labels.validate().is_err());
    }
}
