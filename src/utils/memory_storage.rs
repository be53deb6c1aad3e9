//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::LedgerStore;
use crate::types::*;

#[derive(Debug, Default)]
struct Book {
    accounts: HashMap<String, Account>,
    // Vec keeps insertion order, and a single push makes the append atomic.
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

/// In-memory [`LedgerStore`] for tests and examples.
///
/// Clones share the same underlying book, so a ledger handed a clone of a
/// storage observes the same state as the original.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    book: Arc<RwLock<Book>>,
}

impl MemoryStorage {
    /// Create a new empty storage instance
    pub fn new() -> Self {
        Self {
            book: Arc::new(RwLock::new(Book {
                accounts: HashMap::new(),
                transactions: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        let mut book = self.book.write().unwrap();
        book.accounts.clear();
        book.transactions.clear();
        book.next_id = 1;
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStorage {
    async fn insert_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut book = self.book.write().unwrap();
        if book.accounts.contains_key(&account.code) {
            return Err(LedgerError::DuplicateAccount(account.code.clone()));
        }
        book.accounts.insert(account.code.clone(), account.clone());
        Ok(())
    }

    async fn get_account(&self, code: &str) -> LedgerResult<Option<Account>> {
        Ok(self.book.read().unwrap().accounts.get(code).cloned())
    }

    async fn list_accounts(
        &self,
        account_type: Option<AccountType>,
    ) -> LedgerResult<Vec<Account>> {
        let book = self.book.read().unwrap();
        let mut accounts: Vec<Account> = book
            .accounts
            .values()
            .filter(|account| account_type.is_none_or(|t| account.account_type == t))
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(accounts)
    }

    async fn append_transaction(
        &mut self,
        date: NaiveDate,
        description: &str,
        items: &[Posting],
    ) -> LedgerResult<TransactionId> {
        let mut book = self.book.write().unwrap();
        let id = book.next_id;
        book.transactions.push(Transaction {
            id,
            date,
            description: description.to_string(),
            items: items.to_vec(),
        });
        book.next_id += 1;
        Ok(id)
    }

    async fn get_transaction(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        Ok(self
            .book
            .read()
            .unwrap()
            .transactions
            .iter()
            .find(|tx| tx.id == id)
            .cloned())
    }

    async fn get_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(self.book.read().unwrap().transactions.clone())
    }

    async fn count_transactions(&self) -> LedgerResult<u64> {
        Ok(self.book.read().unwrap().transactions.len() as u64)
    }

    async fn count_transaction_items(&self) -> LedgerResult<u64> {
        Ok(self
            .book
            .read()
            .unwrap()
            .transactions
            .iter()
            .map(|tx| tx.items.len() as u64)
            .sum())
    }
}
