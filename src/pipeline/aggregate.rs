//! Pivot aggregation of the combined table by date key and source

use std::collections::BTreeMap;

use crate::types::*;

/// Build the pivot table for one flow
///
/// Amounts are grouped by date key and source; both per-source totals
/// default to zero, which is what turns a missing matching entry into a
/// full-amount discrepancy instead of a silently absent row. Per date,
/// difference = bank total − ledger total and the status is `Normal` only
/// on an exact zero difference. Rows come out in ascending date-key order.
pub fn pivot(combined: &[CombinedRecord], flow: Flow) -> PivotTable {
    let mut totals: BTreeMap<DateKey, SourceTotals> = BTreeMap::new();

    for record in combined {
        let cell = totals.entry(record.date_key.clone()).or_default();
        match record.source {
            Source::Bank => cell.bank += record.amount(flow),
            Source::Ledger => cell.ledger += record.amount(flow),
        }
    }

    let rows = totals
        .into_iter()
        .map(|(date_key, cell)| {
            let difference = &cell.bank - &cell.ledger;
            let status = MatchStatus::from_difference(&difference);
            DailyAggregate {
                date_key,
                bank_total: cell.bank,
                ledger_total: cell.ledger,
                difference,
                status,
            }
        })
        .collect();

    PivotTable { flow, rows }
}

/// Build both pivot tables (withdrawal, deposit) over the combined table
pub fn pivot_tables(combined: &[CombinedRecord]) -> (PivotTable, PivotTable) {
    (
        pivot(combined, Flow::Withdrawal),
        pivot(combined, Flow::Deposit),
    )
}
