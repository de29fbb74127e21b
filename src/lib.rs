//! # Recon Core
//!
//! A daily reconciliation library that matches bank statement exports
//! against accounting ledger exports and flags dates whose withdrawal or
//! deposit totals disagree.
//!
//! ## Features
//!
//! - **Date-key normalization**: export-specific date text reduced to a
//!   common 8-character grouping key
//! - **Summary-row screening**: carry-forward, monthly-total,
//!   cumulative-total, and "total" ledger rows excluded before aggregation
//! - **Per-day pivots**: withdrawal and deposit totals summed per date and
//!   source, with explicit zero-fill for dates one source is missing
//! - **Error reporting**: mismatched dates collected into a single review
//!   report, tagged by category
//! - **Source abstraction**: spreadsheet, database, or in-memory record
//!   sets behind a trait-based source/sink design
//!
//! ## Quick Start
//!
//! ```rust
//! use recon_core::{MemorySource, RawBankRow, RawLedgerRow, Reconciler};
//! use bigdecimal::BigDecimal;
//!
//! # async fn run() -> recon_core::ReconResult<()> {
//! let source = MemorySource::with_rows(
//!     vec![RawBankRow::new("2024.01.15 09:30:00", Some(BigDecimal::from(1000)), None)],
//!     vec![RawLedgerRow::new("2024-01-15", Some(BigDecimal::from(1000)), None)],
//! );
//!
//! let artifacts = Reconciler::new(source).run().await?;
//! assert!(artifacts.error_report.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use pipeline::*;
pub use traits::*;
pub use types::*;
pub use utils::*;
