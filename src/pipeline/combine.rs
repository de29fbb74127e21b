//! Combination of normalized records into one long-format table

use crate::types::*;

/// Combine normalized bank and ledger records under the common schema
///
/// Bank rows come first, then ledger rows, both in their normalized order;
/// the fresh sequential index of the original workbook is the vector
/// position. Ledger credits land in the withdrawal slot and debits in the
/// deposit slot so the two sources become directly comparable. No
/// deduplication happens here.
pub fn combine(bank: Vec<BankRecord>, ledger: Vec<LedgerRecord>) -> Vec<CombinedRecord> {
    let mut combined: Vec<CombinedRecord> = Vec::with_capacity(bank.len() + ledger.len());

    combined.extend(bank.into_iter().map(|record| CombinedRecord {
        source: Source::Bank,
        date_key: record.date_key,
        withdrawal: record.withdrawal,
        deposit: record.deposit,
    }));

    combined.extend(ledger.into_iter().map(|record| CombinedRecord {
        source: Source::Ledger,
        date_key: record.date_key,
        withdrawal: record.credit,
        deposit: record.debit,
    }));

    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn bank_record(date: &str, withdrawal: i64, deposit: i64) -> BankRecord {
        BankRecord {
            date_key: DateKey::from_raw(date),
            withdrawal: BigDecimal::from(withdrawal),
            deposit: BigDecimal::from(deposit),
        }
    }

    fn ledger_record(date: &str, credit: i64, debit: i64) -> LedgerRecord {
        LedgerRecord {
            date_key: DateKey::from_raw(date),
            credit: BigDecimal::from(credit),
            debit: BigDecimal::from(debit),
        }
    }

    #[test]
    fn test_combine_keeps_bank_rows_first() {
        let combined = combine(
            vec![bank_record("20240115", 100, 0)],
            vec![ledger_record("20240110", 50, 0)],
        );

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].source, Source::Bank);
        assert_eq!(combined[1].source, Source::Ledger);
    }

    #[test]
    fn test_combine_maps_credit_to_withdrawal_slot() {
        let combined = combine(vec![], vec![ledger_record("20240115", 700, 300)]);

        assert_eq!(combined[0].withdrawal, BigDecimal::from(700));
        assert_eq!(combined[0].deposit, BigDecimal::from(300));
    }

    #[test]
    fn test_combine_keeps_duplicate_rows() {
        let combined = combine(
            vec![
                bank_record("20240115", 100, 0),
                bank_record("20240115", 100, 0),
            ],
            vec![],
        );

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0], combined[1]);
    }
}
