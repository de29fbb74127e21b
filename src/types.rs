//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized 8-character date key used to group and join records
///
/// Both record sets carry dates in export-specific text forms (dot- or
/// hyphen-separated, sometimes with a trailing time component). The date key
/// is the separator-stripped prefix of that text, truncated to 8 characters,
/// e.g. "2024.01.15 13:22:01" becomes "20240115".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Build a date key from raw export text
    ///
    /// Separator characters ('.' and '-') are stripped and the first 8
    /// remaining characters are kept. Malformed input is not rejected; a
    /// short or garbage key simply groups with nothing else.
    pub fn from_raw(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| *c != '.' && *c != '-')
            .take(8)
            .collect();
        Self(key)
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Origin of a combined record or aggregate column
///
/// Every record in the pipeline belongs to exactly one of these two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Bank statement export
    Bank,
    /// Accounting ledger export
    Ledger,
}

/// Which amount column an aggregate covers
///
/// Withdrawals and deposits are reconciled independently, so two pivot
/// tables exist per run, one per flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flow {
    Withdrawal,
    Deposit,
}

/// Match classification of a daily aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Daily totals agree exactly between the two sources
    Normal,
    /// Daily totals differ and the date needs manual review
    Error,
}

impl MatchStatus {
    /// Classify a signed difference; exact equality, no tolerance
    pub fn from_difference(difference: &BigDecimal) -> Self {
        if *difference == BigDecimal::from(0) {
            MatchStatus::Normal
        } else {
            MatchStatus::Error
        }
    }

    /// Whether the date is mismatched
    pub fn is_error(&self) -> bool {
        matches!(self, MatchStatus::Error)
    }
}

/// One row of a raw bank statement export
///
/// Carries everything the export produces; normalization keeps only the
/// date and the two amount columns. Empty amount cells are treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBankRow {
    /// Raw date-time text, e.g. "2024.01.15 13:22:01"
    pub posted_at: String,
    /// Withdrawal amount, empty for deposit rows
    pub withdrawal: Option<BigDecimal>,
    /// Deposit amount, empty for withdrawal rows
    pub deposit: Option<BigDecimal>,
    /// Running balance after the transaction
    pub balance: Option<BigDecimal>,
    /// Own-account display flag
    pub own_account_note: Option<String>,
    /// Free-text memo
    pub memo: Option<String>,
    /// Processing branch name
    pub branch: Option<String>,
    /// Transaction kind as labelled by the bank
    pub kind: Option<String>,
}

impl RawBankRow {
    /// Create a bank row carrying only the fields reconciliation uses
    pub fn new(
        posted_at: impl Into<String>,
        withdrawal: Option<BigDecimal>,
        deposit: Option<BigDecimal>,
    ) -> Self {
        Self {
            posted_at: posted_at.into(),
            withdrawal,
            deposit,
            balance: None,
            own_account_note: None,
            memo: None,
            branch: None,
            kind: None,
        }
    }
}

/// One row of a raw accounting ledger export
///
/// Ledger exports interleave real entries with summary rows (carry-forward,
/// monthly total, cumulative total, "total" memos); the normalizer screens
/// those out before any aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLedgerRow {
    /// Raw date text, e.g. "2024-01-15"
    pub date: String,
    /// Voucher number
    pub voucher_no: Option<String>,
    /// Account name
    pub account_name: Option<String>,
    /// Free-text memo; summary rows are detected here as well
    pub memo: Option<String>,
    /// Credit amount; maps to the withdrawal slot during combination
    pub credit: Option<BigDecimal>,
    /// Debit amount; maps to the deposit slot during combination
    pub debit: Option<BigDecimal>,
    /// Running balance
    pub balance: Option<BigDecimal>,
    /// Accounting unit name
    pub unit_name: Option<String>,
}

impl RawLedgerRow {
    /// Create a ledger row carrying only the fields reconciliation uses
    pub fn new(
        date: impl Into<String>,
        credit: Option<BigDecimal>,
        debit: Option<BigDecimal>,
    ) -> Self {
        Self {
            date: date.into(),
            voucher_no: None,
            account_name: None,
            memo: None,
            credit,
            debit,
            balance: None,
            unit_name: None,
        }
    }

    /// Set the memo text
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// Normalized bank record: date key plus the two amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub date_key: DateKey,
    pub withdrawal: BigDecimal,
    pub deposit: BigDecimal,
}

/// Normalized ledger record: date key plus credit/debit amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date_key: DateKey,
    pub credit: BigDecimal,
    pub debit: BigDecimal,
}

/// One row of the combined long-format table
///
/// Bank and ledger records meet here under a common schema; the ledger's
/// credit amount lands in the withdrawal slot and its debit amount in the
/// deposit slot. Rows are never deduplicated — repeated (source, date)
/// rows all survive and sum together during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub source: Source,
    pub date_key: DateKey,
    pub withdrawal: BigDecimal,
    pub deposit: BigDecimal,
}

impl CombinedRecord {
    /// The amount in the given flow's slot
    pub fn amount(&self, flow: Flow) -> &BigDecimal {
        match flow {
            Flow::Withdrawal => &self.withdrawal,
            Flow::Deposit => &self.deposit,
        }
    }
}

/// Per-source daily totals for one date key
///
/// Both totals start at zero, so a date missing from one source registers
/// as a full-amount discrepancy rather than disappearing from the pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTotals {
    pub bank: BigDecimal,
    pub ledger: BigDecimal,
}

impl Default for SourceTotals {
    fn default() -> Self {
        Self {
            bank: BigDecimal::from(0),
            ledger: BigDecimal::from(0),
        }
    }
}

/// One pivot row: daily totals, their signed difference, and the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date_key: DateKey,
    pub bank_total: BigDecimal,
    pub ledger_total: BigDecimal,
    /// bank_total − ledger_total
    pub difference: BigDecimal,
    pub status: MatchStatus,
}

/// Pivot table for one flow, rows in ascending date-key order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotTable {
    pub flow: Flow,
    pub rows: Vec<DailyAggregate>,
}

impl PivotTable {
    /// Look up the aggregate row for a date key
    pub fn row(&self, date_key: &DateKey) -> Option<&DailyAggregate> {
        self.rows.iter().find(|row| &row.date_key == date_key)
    }

    /// Rows whose status is `Error`
    pub fn error_rows(&self) -> impl Iterator<Item = &DailyAggregate> {
        self.rows.iter().filter(|row| row.status.is_error())
    }
}

/// Errors that can occur in the reconciliation system
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("Record source error: {0}")]
    Source(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
