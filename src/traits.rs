//! Storage abstraction for the ledger

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::*;

/// Durable store behind the ledger.
///
/// This trait allows the ledger core to work with any transactional backend
/// (PostgreSQL, SQLite, in-memory, etc.). The persisted state is exactly
/// three relations: accounts, transactions and transaction items.
///
/// The store owns atomicity: [`LedgerStore::append_transaction`] must write
/// the transaction header and every posting in a single all-or-nothing unit
/// of work. The ledger contributes the validation ordering; it never issues
/// a partial write for the store to clean up beyond that one call.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Insert a new account. Fails with [`LedgerError::DuplicateAccount`]
    /// if the code is already taken. The account is durable before this
    /// returns.
    async fn insert_account(&mut self, account: &Account) -> LedgerResult<()>;

    /// Look up an account by code. Absence is not an error.
    async fn get_account(&self, code: &str) -> LedgerResult<Option<Account>>;

    /// List all accounts, optionally filtered by type.
    async fn list_accounts(&self, account_type: Option<AccountType>)
        -> LedgerResult<Vec<Account>>;

    /// Assign the next transaction id and append the header and all items
    /// atomically. On any failure nothing of the transaction is visible to
    /// readers, and the error is surfaced unchanged.
    ///
    /// Callers must have validated the items already; the store does not
    /// re-check the balance invariant.
    async fn append_transaction(
        &mut self,
        date: NaiveDate,
        description: &str,
        items: &[Posting],
    ) -> LedgerResult<TransactionId>;

    /// Look up a transaction by id. Absence is not an error.
    async fn get_transaction(&self, id: TransactionId) -> LedgerResult<Option<Transaction>>;

    /// All recorded transactions, in insertion order.
    async fn get_transactions(&self) -> LedgerResult<Vec<Transaction>>;

    /// Number of recorded transactions.
    async fn count_transactions(&self) -> LedgerResult<u64>;

    /// Number of recorded transaction items across all transactions.
    async fn count_transaction_items(&self) -> LedgerResult<u64>;
}
