//! Core types and data structures for the ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account types following standard accounting principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Assets - what the business owns (Cash, Inventory, Equipment, etc.)
    Asset,
    /// Liabilities - what the business owes (Loans, Accounts Payable, etc.)
    Liability,
    /// Equity - owner's interest in the business (Share Capital, etc.)
    Equity,
    /// Revenue - money earned by the business
    Revenue,
    /// Expenses - costs incurred by the business
    Expense,
}

impl AccountType {
    /// All recognized account types, in report order.
    pub const ALL: [AccountType; 5] = [
        AccountType::Asset,
        AccountType::Liability,
        AccountType::Equity,
        AccountType::Revenue,
        AccountType::Expense,
    ];

    /// The lowercase name used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Asset => "asset",
            AccountType::Liability => "liability",
            AccountType::Equity => "equity",
            AccountType::Revenue => "revenue",
            AccountType::Expense => "expense",
        }
    }

    /// Nominal accounts (revenue and expense) are folded into retained
    /// earnings on the balance sheet rather than listed individually.
    pub fn is_nominal(&self) -> bool {
        matches!(self, AccountType::Revenue | AccountType::Expense)
    }

    /// Credit-normal accounts are stored negative and displayed with the
    /// sign flipped on reports.
    pub fn is_credit_normal(&self) -> bool {
        matches!(
            self,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue
        )
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asset" => Ok(AccountType::Asset),
            "liability" => Ok(AccountType::Liability),
            "equity" => Ok(AccountType::Equity),
            "revenue" => Ok(AccountType::Revenue),
            "expense" => Ok(AccountType::Expense),
            other => Err(LedgerError::UnknownAccountType(other.to_string())),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account in the chart of accounts.
///
/// The code is the account's identity; postings reference accounts by code
/// and never own them. Accounts are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique code identifying the account (e.g. "101")
    pub code: String,
    /// Human-readable account name
    pub name: String,
    /// Type of account (Asset, Liability, etc.)
    pub account_type: AccountType,
}

impl Account {
    /// Create a new account
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            account_type,
        }
    }
}

/// Identifier assigned to a transaction when it is recorded.
///
/// Ids are assigned by the store, start at 1 and increase in insertion
/// order.
pub type TransactionId = u64;

/// One line item of a transaction, tying a signed amount to an account.
///
/// Amounts are in minor currency units (cents). Positive is a debit,
/// negative a credit: assets and expenses increase with positive amounts,
/// liabilities, equity and revenue with negative ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Code of the account being affected
    pub account_code: String,
    /// Signed amount in minor currency units
    pub amount: i64,
}

impl Posting {
    /// Create a new posting
    pub fn new(account_code: impl Into<String>, amount: i64) -> Self {
        Self {
            account_code: account_code.into(),
            amount,
        }
    }
}

/// A recorded transaction: a dated, described, balanced set of postings.
///
/// Transactions are immutable once recorded; no update or delete operation
/// exists. The invariant that `items` is non-empty and sums to zero is
/// enforced before the transaction ever reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned at recording time
    pub id: TransactionId,
    /// Calendar date of the transaction (no time component)
    pub date: NaiveDate,
    /// Free-text description
    pub description: String,
    /// The balanced postings making up this transaction
    pub items: Vec<Posting>,
}

impl Transaction {
    /// Sum of the posting amounts. Zero for every recorded transaction.
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Check that the postings sum to zero.
    pub fn is_balanced(&self) -> bool {
        self.total() == 0
    }
}

/// Errors that can occur in the ledger system.
///
/// Everything except [`LedgerError::Storage`] is a local validation failure
/// detected before any durable mutation. `Storage` is the only class that
/// implies a rolled-back write.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("the account \"{0}\" already exists")]
    DuplicateAccount(String),
    #[error("unknown account type {0}")]
    UnknownAccountType(String),
    #[error("cannot record an empty transaction")]
    EmptyTransaction,
    #[error("unbalanced transaction items")]
    UnbalancedTransaction,
    #[error("unknown account code {0}")]
    UnknownAccount(String),
    #[error("invalid reporting period: {end} precedes {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_round_trips_through_str() {
        for account_type in AccountType::ALL {
            assert_eq!(
                account_type.as_str().parse::<AccountType>().unwrap(),
                account_type
            );
        }
    }

    #[test]
    fn nominal_and_credit_normal_classification() {
        assert!(AccountType::Revenue.is_nominal());
        assert!(AccountType::Expense.is_nominal());
        assert!(!AccountType::Asset.is_nominal());

        assert!(AccountType::Liability.is_credit_normal());
        assert!(AccountType::Equity.is_credit_normal());
        assert!(AccountType::Revenue.is_credit_normal());
        assert!(!AccountType::Asset.is_credit_normal());
        assert!(!AccountType::Expense.is_credit_normal());
    }

    #[test]
    fn account_type_rejects_unknown_names() {
        let err = "a".parse::<AccountType>().unwrap_err();
        assert!(matches!(err, LedgerError::UnknownAccountType(t) if t == "a"));
    }

    #[test]
    fn account_type_serializes_lowercase() {
        let json = serde_json::to_string(&AccountType::Liability).unwrap();
        assert_eq!(json, "\"liability\"");
    }

    #[test]
    fn transaction_balance_check() {
        let tx = Transaction {
            id: 1,
            date: NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            description: "Record the funder's investment".to_string(),
            items: vec![Posting::new("101", 500000), Posting::new("301", -500000)],
        };
        assert!(tx.is_balanced());
        assert_eq!(tx.total(), 0);
    }
}
