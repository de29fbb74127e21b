//! Normalization of raw export rows into date-keyed records

use bigdecimal::BigDecimal;

use crate::types::*;

/// Date-field markers identifying non-transactional ledger summary rows
///
/// Ledger exports inject carry-forward, monthly-total, and cumulative-total
/// rows between real entries; their date field carries one of these phrases
/// instead of a date.
const SUMMARY_DATE_MARKERS: [&str; 3] = ["brought forward", "monthly total", "cumulative total"];

/// Memo marker identifying section-total ledger rows
const SUMMARY_MEMO_MARKER: &str = "total";

/// Normalize a raw bank statement export
///
/// Each row's date-time text is reduced to an 8-character date key, missing
/// amounts become zero, export noise columns are dropped, and the result is
/// sorted ascending by date key. Malformed dates are not rejected.
pub fn normalize_bank(rows: Vec<RawBankRow>) -> Vec<BankRecord> {
    let mut records: Vec<BankRecord> = rows
        .into_iter()
        .map(|row| BankRecord {
            date_key: DateKey::from_raw(&row.posted_at),
            withdrawal: row.withdrawal.unwrap_or_else(|| BigDecimal::from(0)),
            deposit: row.deposit.unwrap_or_else(|| BigDecimal::from(0)),
        })
        .collect();

    records.sort_by(|a, b| a.date_key.cmp(&b.date_key));
    records
}

/// Normalize a raw accounting ledger export
///
/// Summary rows (carry-forward, monthly total, cumulative total, "total"
/// memos) are excluded, dates are reduced to 8-character keys, missing
/// amounts become zero, and the result is sorted ascending by date key.
pub fn normalize_ledger(rows: Vec<RawLedgerRow>) -> Vec<LedgerRecord> {
    let total = rows.len();

    let mut records: Vec<LedgerRecord> = rows
        .into_iter()
        .filter(|row| !is_summary_row(row))
        .map(|row| LedgerRecord {
            date_key: DateKey::from_raw(&row.date),
            credit: row.credit.unwrap_or_else(|| BigDecimal::from(0)),
            debit: row.debit.unwrap_or_else(|| BigDecimal::from(0)),
        })
        .collect();

    let excluded = total - records.len();
    if excluded > 0 {
        log::debug!("excluded {} ledger summary rows", excluded);
    }

    records.sort_by(|a, b| a.date_key.cmp(&b.date_key));
    records
}

/// Whether a ledger row is a non-transactional summary row
///
/// Marker matching is a case-insensitive substring check; a missing memo
/// never matches.
fn is_summary_row(row: &RawLedgerRow) -> bool {
    let date = row.date.to_lowercase();
    if SUMMARY_DATE_MARKERS
        .iter()
        .any(|marker| date.contains(marker))
    {
        return true;
    }

    match &row.memo {
        Some(memo) => memo.to_lowercase().contains(SUMMARY_MEMO_MARKER),
        None => false,
    }
}
