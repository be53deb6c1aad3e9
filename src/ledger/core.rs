//! Main ledger facade that coordinates the registry, journal and reports

use chrono::NaiveDate;

use crate::ledger::balance::{BalanceAggregator, DateFilter};
use crate::ledger::report::{self, BalanceSheet, IncomeStatement};
use crate::ledger::{AccountRegistry, TransactionJournal};
use crate::traits::LedgerStore;
use crate::types::*;

/// The double-entry ledger engine.
///
/// One instance is constructed per store connection and owns its registry
/// and journal collaborators; there is no global state. All operations run
/// to completion against the store before returning.
pub struct Ledger<S: LedgerStore> {
    registry: AccountRegistry<S>,
    journal: TransactionJournal<S>,
}

impl<S: LedgerStore + Clone> Ledger<S> {
    /// Create a new ledger over the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            registry: AccountRegistry::new(storage.clone()),
            journal: TransactionJournal::new(storage),
        }
    }

    // Account operations

    /// Create a new account. See [`AccountRegistry::create_account`].
    pub async fn create_account(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> LedgerResult<Account> {
        self.registry.create_account(code, name, account_type).await
    }

    /// Look up an account by code. Returns `None` when it does not exist.
    pub async fn get_account(&self, code: &str) -> LedgerResult<Option<Account>> {
        self.registry.get_account(code).await
    }

    /// List all accounts, sorted by code.
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.registry.list_accounts().await
    }

    /// List accounts of one type, sorted by code.
    pub async fn list_accounts_by_type(
        &self,
        account_type: AccountType,
    ) -> LedgerResult<Vec<Account>> {
        self.registry.list_accounts_by_type(account_type).await
    }

    // Transaction operations

    /// Record a balanced transaction and return its assigned id.
    /// See [`TransactionJournal::record_transaction`] for the validation
    /// order and atomicity contract.
    pub async fn record_transaction(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        items: Vec<Posting>,
    ) -> LedgerResult<TransactionId> {
        self.journal.record_transaction(date, description, items).await
    }

    /// Look up a transaction by id. Returns `None` when it does not exist.
    pub async fn get_transaction(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.journal.get_transaction(id).await
    }

    /// All recorded transactions, in insertion order.
    pub async fn get_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.journal.get_transactions().await
    }

    /// Number of recorded transactions.
    pub async fn count_transactions(&self) -> LedgerResult<u64> {
        self.journal.count_transactions().await
    }

    /// Number of recorded transaction items.
    pub async fn count_transaction_items(&self) -> LedgerResult<u64> {
        self.journal.count_transaction_items().await
    }

    // Balance and reporting operations

    /// Net position of one account under a date criterion, derived by
    /// folding the transaction log.
    pub async fn account_balance(&self, code: &str, filter: DateFilter) -> LedgerResult<i64> {
        BalanceAggregator::new(&self.journal.storage)
            .account_balance(code, filter)
            .await
    }

    /// Build a balance sheet as of `date`. Never mutates the ledger.
    pub async fn get_balance_sheet(&self, date: NaiveDate) -> LedgerResult<BalanceSheet> {
        report::build_balance_sheet(&self.journal.storage, date).await
    }

    /// Build an income statement over the inclusive range
    /// `[start_date, end_date]`. Fails with [`LedgerError::InvalidPeriod`]
    /// when the range is inverted.
    pub async fn get_income_statement(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> LedgerResult<IncomeStatement> {
        report::build_income_statement(&self.journal.storage, start_date, end_date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStorage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn basic_workflow() {
        let mut ledger = Ledger::new(MemoryStorage::new());

        ledger
            .create_account("101", "Cash", AccountType::Asset)
            .await
            .unwrap();
        ledger
            .create_account("301", "Share Capital", AccountType::Equity)
            .await
            .unwrap();

        let id = ledger
            .record_transaction(
                date(2016, 9, 1),
                "Record the funder's investment",
                vec![Posting::new("101", 500000), Posting::new("301", -500000)],
            )
            .await
            .unwrap();
        assert_eq!(id, 1);

        let cash = ledger
            .account_balance("101", DateFilter::AsOf(date(2016, 9, 1)))
            .await
            .unwrap();
        assert_eq!(cash, 500000);

        let sheet = ledger.get_balance_sheet(date(2016, 9, 1)).await.unwrap();
        assert_eq!(sheet.total_assets, 500000);
        assert_eq!(sheet.total_equity, 500000);
    }
}
