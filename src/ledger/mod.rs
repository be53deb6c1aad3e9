//! Ledger module containing the account registry, transaction journal,
//! balance aggregation and report building

pub mod account;
pub mod balance;
pub mod core;
pub mod report;
pub mod transaction;

pub use account::*;
pub use balance::*;
pub use report::*;
pub use transaction::*;

pub use self::core::*;
