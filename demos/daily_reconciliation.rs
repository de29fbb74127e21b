//! Daily reconciliation example

use bigdecimal::BigDecimal;
use recon_core::utils::{MemorySink, MemorySource};
use recon_core::{RawBankRow, RawLedgerRow, Reconciler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Recon Core - Daily Reconciliation Example\n");

    // 1. Load the two record sets (normally read from exports by the host
    // application; here an in-memory source stands in)
    println!("📥 Loading record sets...");
    let source = MemorySource::with_rows(
        vec![
            RawBankRow::new("2024.01.01 09:15:00", Some(BigDecimal::from(120000)), None),
            RawBankRow::new("2024.01.01 14:30:00", None, Some(BigDecimal::from(250000))),
            RawBankRow::new("2024.01.02 10:05:00", Some(BigDecimal::from(50000)), None),
            RawBankRow::new("2024.01.03 16:45:00", None, Some(BigDecimal::from(80000))),
        ],
        vec![
            RawLedgerRow::new("2024-01-01", Some(BigDecimal::from(120000)), None)
                .with_memo("vendor payment"),
            RawLedgerRow::new("2024-01-01", None, Some(BigDecimal::from(250000)))
                .with_memo("client receipt"),
            RawLedgerRow::new("2024-01-03", None, Some(BigDecimal::from(30000))),
            RawLedgerRow::new("Monthly Total", Some(BigDecimal::from(170000)), None),
        ],
    );
    println!("  ✓ 4 bank rows, 4 ledger rows (1 summary row will be screened out)\n");

    // 2. Run the pipeline and publish through a sink
    println!("⚖️  Running reconciliation...");
    let mut sink = MemorySink::new();
    let artifacts = Reconciler::new(source).run_into(&mut sink).await?;
    println!("  ✓ Run {} completed at {}\n", artifacts.run_id, artifacts.created_at);

    // 3. Walk the pivots
    println!("📊 Withdrawal pivot:");
    for row in &artifacts.withdrawal_pivot.rows {
        println!(
            "  {}  bank {:>8}  ledger {:>8}  difference {:>8}  {:?}",
            row.date_key, row.bank_total, row.ledger_total, row.difference, row.status
        );
    }
    println!();

    println!("📊 Deposit pivot:");
    for row in &artifacts.deposit_pivot.rows {
        println!(
            "  {}  bank {:>8}  ledger {:>8}  difference {:>8}  {:?}",
            row.date_key, row.bank_total, row.ledger_total, row.difference, row.status
        );
    }
    println!();

    // 4. The error report is what a reviewer actually reads
    if artifacts.error_report.is_empty() {
        println!("✅ All dates reconcile — nothing to review");
    } else {
        println!(
            "❗ {} date(s) need manual review:",
            artifacts.error_report.len()
        );
        for row in &artifacts.error_report.rows {
            println!(
                "  [{}] {}  difference {}",
                row.category_label, row.date_key, row.difference
            );
        }
        println!(
            "\n  As JSON: {}",
            serde_json::to_string_pretty(&artifacts.error_report)?
        );
    }

    Ok(())
}
