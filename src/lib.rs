//! # Ledger Core
//!
//! A double-entry bookkeeping engine: an account registry, an append-only
//! transaction log, and reports (balance sheet, income statement) derived
//! by folding over the log.
//!
//! ## Features
//!
//! - **Double-entry bookkeeping**: every transaction is validated to
//!   balance before it is recorded, atomically, against a pluggable store
//! - **Account registry**: asset, liability, equity, revenue and expense
//!   accounts identified by unique codes
//! - **Derived reporting**: balance sheets as of a date and income
//!   statements over an inclusive date range, with retained earnings folded
//!   into equity
//! - **Storage abstraction**: database-agnostic design with trait-based
//!   storage; amounts are signed integers in minor currency units
//!
//! ## Quick start
//!
//! ```rust
//! use ledger_core::{AccountType, Ledger, MemoryStorage, Posting};
//! use chrono::NaiveDate;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ledger_core::LedgerResult<()> {
//! let mut ledger = Ledger::new(MemoryStorage::new());
//! ledger.create_account("101", "Cash", AccountType::Asset).await?;
//! ledger.create_account("301", "Share Capital", AccountType::Equity).await?;
//!
//! let tx_id = ledger
//!     .record_transaction(
//!         NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
//!         "Record the funder's investment",
//!         vec![Posting::new("101", 500_000), Posting::new("301", -500_000)],
//!     )
//!     .await?;
//! assert_eq!(tx_id, 1);
//! # Ok(())
//! # }
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_storage::MemoryStorage;
