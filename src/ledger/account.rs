//! Account registry: the chart of accounts

use crate::traits::LedgerStore;
use crate::types::*;
use crate::utils::validation::{validate_account_code, validate_account_name};

/// Registry of uniquely-coded accounts.
///
/// Accounts are created once and never updated or deleted; the registry is
/// the leaf dependency every other component validates against.
pub struct AccountRegistry<S: LedgerStore> {
    pub(crate) storage: S,
}

impl<S: LedgerStore> AccountRegistry<S> {
    /// Create a new registry over the given storage
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create an account with the given code, name and type.
    ///
    /// Fails with [`LedgerError::DuplicateAccount`] if the code is already
    /// taken. The account is durable before this returns.
    pub async fn create_account(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> LedgerResult<Account> {
        let account = Account::new(code, name, account_type);

        validate_account_code(&account.code)?;
        validate_account_name(&account.name)?;

        if self.storage.get_account(&account.code).await?.is_some() {
            return Err(LedgerError::DuplicateAccount(account.code));
        }

        self.storage.insert_account(&account).await?;
        tracing::debug!(code = %account.code, r#type = %account.account_type, "account created");

        Ok(account)
    }

    /// Look up an account by code. Returns `None` when it does not exist.
    pub async fn get_account(&self, code: &str) -> LedgerResult<Option<Account>> {
        self.storage.get_account(code).await
    }

    /// List all accounts, sorted by code.
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.storage.list_accounts(None).await
    }

    /// List accounts of one type, sorted by code.
    pub async fn list_accounts_by_type(
        &self,
        account_type: AccountType,
    ) -> LedgerResult<Vec<Account>> {
        self.storage.list_accounts(Some(account_type)).await
    }
}
