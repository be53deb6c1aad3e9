//! Transaction log: the append-only journal of balanced postings

use chrono::NaiveDate;

use crate::traits::LedgerStore;
use crate::types::*;

/// Append-only log of recorded transactions.
///
/// The journal is the single source of truth: balances are always derived
/// by folding over it, never maintained as mutable per-account fields.
pub struct TransactionJournal<S: LedgerStore> {
    pub(crate) storage: S,
}

impl<S: LedgerStore> TransactionJournal<S> {
    /// Create a new journal over the given storage
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record a transaction and return its assigned id.
    ///
    /// All preconditions are checked, in order, before anything is written:
    ///
    /// 1. `items` is non-empty, else [`LedgerError::EmptyTransaction`];
    /// 2. the amounts sum to zero, else [`LedgerError::UnbalancedTransaction`];
    /// 3. every account code resolves, else [`LedgerError::UnknownAccount`]
    ///    naming the offending code.
    ///
    /// Only then is the transaction appended, as one atomic unit covering
    /// the header and every posting. A storage fault after validation
    /// surfaces as [`LedgerError::Storage`] and leaves no partial
    /// transaction visible.
    pub async fn record_transaction(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        items: Vec<Posting>,
    ) -> LedgerResult<TransactionId> {
        if items.is_empty() {
            return Err(LedgerError::EmptyTransaction);
        }

        let total: i64 = items.iter().map(|item| item.amount).sum();
        if total != 0 {
            tracing::warn!(total, "rejecting unbalanced transaction");
            return Err(LedgerError::UnbalancedTransaction);
        }

        for item in &items {
            if self.storage.get_account(&item.account_code).await?.is_none() {
                return Err(LedgerError::UnknownAccount(item.account_code.clone()));
            }
        }

        let description = description.into();
        let id = self
            .storage
            .append_transaction(date, &description, &items)
            .await?;
        tracing::debug!(id, %date, items = items.len(), "transaction recorded");

        Ok(id)
    }

    /// Look up a transaction by id. Returns `None` when it does not exist.
    pub async fn get_transaction(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.get_transaction(id).await
    }

    /// All recorded transactions, in insertion order.
    pub async fn get_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.get_transactions().await
    }

    /// Number of recorded transactions.
    pub async fn count_transactions(&self) -> LedgerResult<u64> {
        self.storage.count_transactions().await
    }

    /// Number of recorded transaction items.
    pub async fn count_transaction_items(&self) -> LedgerResult<u64> {
        self.storage.count_transaction_items().await
    }
}
