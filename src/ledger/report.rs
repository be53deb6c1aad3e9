//! Report builder: balance sheet and income statement views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::balance::{BalanceAggregator, DateFilter};
use crate::traits::LedgerStore;
use crate::types::*;

/// An account paired with its derived balance, display-ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account: Account,
    /// Balance in minor currency units, already adjusted to the report's
    /// sign convention (credit-normal accounts shown positive)
    pub balance: i64,
}

/// Point-in-time financial position, derived from the log and never stored.
///
/// Asset balances are reported as stored; liability and equity balances are
/// sign-flipped so credit-normal accounts read positive. Revenue and expense
/// accounts are not listed: their lifetime net effect appears once as
/// `retained_earnings`. For any valid ledger
/// `total_assets == total_liabilities + total_equity + retained_earnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub date: NaiveDate,
    pub assets: Vec<AccountBalance>,
    pub liabilities: Vec<AccountBalance>,
    pub equity: Vec<AccountBalance>,
    /// Accumulated net income since inception, folded into equity
    pub retained_earnings: i64,
    pub total_assets: i64,
    pub total_liabilities: i64,
    pub total_equity: i64,
}

/// Period performance over an inclusive date range, derived and not stored.
///
/// Revenue balances are sign-flipped to read positive; expense balances are
/// reported as stored. Exactly one of `net_income`/`net_loss` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub revenue: Vec<AccountBalance>,
    pub expenses: Vec<AccountBalance>,
    pub total_revenues: i64,
    pub total_expenses: i64,
    pub net_income: i64,
    pub net_loss: i64,
}

impl IncomeStatement {
    /// `total_revenues - total_expenses`, before the income/loss split.
    pub fn net_result(&self) -> i64 {
        self.total_revenues - self.total_expenses
    }
}

/// Build a balance sheet as of `date`.
pub(crate) async fn build_balance_sheet<S: LedgerStore>(
    storage: &S,
    date: NaiveDate,
) -> LedgerResult<BalanceSheet> {
    let aggregator = BalanceAggregator::new(storage);
    let accounts = storage.list_accounts(None).await?;

    let mut assets = Vec::new();
    let mut liabilities = Vec::new();
    let mut equity = Vec::new();
    let mut retained_earnings = 0;

    for account in accounts {
        let balance = aggregator
            .account_balance(&account.code, DateFilter::AsOf(date))
            .await?;

        match account.account_type {
            AccountType::Asset => assets.push(AccountBalance { account, balance }),
            AccountType::Liability => liabilities.push(AccountBalance {
                account,
                balance: -balance,
            }),
            AccountType::Equity => equity.push(AccountBalance {
                account,
                balance: -balance,
            }),
            // Lifetime net income folds into equity, once, not per account
            AccountType::Revenue | AccountType::Expense => retained_earnings -= balance,
        }
    }

    let total_assets = assets.iter().map(|ab| ab.balance).sum();
    let total_liabilities = liabilities.iter().map(|ab| ab.balance).sum();
    let total_equity = equity.iter().map(|ab| ab.balance).sum();

    Ok(BalanceSheet {
        date,
        assets,
        liabilities,
        equity,
        retained_earnings,
        total_assets,
        total_liabilities,
        total_equity,
    })
}

/// Build an income statement over the inclusive range `[start_date, end_date]`.
pub(crate) async fn build_income_statement<S: LedgerStore>(
    storage: &S,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> LedgerResult<IncomeStatement> {
    if end_date < start_date {
        return Err(LedgerError::InvalidPeriod {
            start: start_date,
            end: end_date,
        });
    }

    let aggregator = BalanceAggregator::new(storage);
    let filter = DateFilter::Between {
        start: start_date,
        end: end_date,
    };

    let mut revenue = Vec::new();
    for account in storage.list_accounts(Some(AccountType::Revenue)).await? {
        let balance = aggregator.account_balance(&account.code, filter).await?;
        revenue.push(AccountBalance {
            account,
            balance: -balance,
        });
    }

    let mut expenses = Vec::new();
    for account in storage.list_accounts(Some(AccountType::Expense)).await? {
        let balance = aggregator.account_balance(&account.code, filter).await?;
        expenses.push(AccountBalance { account, balance });
    }

    let total_revenues: i64 = revenue.iter().map(|ab| ab.balance).sum();
    let total_expenses: i64 = expenses.iter().map(|ab| ab.balance).sum();
    let net_result = total_revenues - total_expenses;

    Ok(IncomeStatement {
        start_date,
        end_date,
        revenue,
        expenses,
        total_revenues,
        total_expenses,
        net_income: net_result.max(0),
        net_loss: (-net_result).max(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::core::Ledger;
    use crate::utils::memory_storage::MemoryStorage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn sample_ledger() -> Ledger<MemoryStorage> {
        let mut ledger = Ledger::new(MemoryStorage::new());
        for (code, name, t) in [
            ("101", "Cash", AccountType::Asset),
            ("102", "Equipment", AccountType::Asset),
            ("201", "Bank Loan", AccountType::Liability),
            ("301", "Share Capital", AccountType::Equity),
            ("401", "Consulting Revenue", AccountType::Revenue),
            ("501", "Business Travel", AccountType::Expense),
        ] {
            ledger.create_account(code, name, t).await.unwrap();
        }

        ledger
            .record_transaction(
                date(2016, 9, 1),
                "Record the funder's investment",
                vec![Posting::new("101", 500000), Posting::new("301", -500000)],
            )
            .await
            .unwrap();
        ledger
            .record_transaction(
                date(2016, 9, 2),
                "Buy a laptop",
                vec![
                    Posting::new("101", -40000),
                    Posting::new("102", 100000),
                    Posting::new("201", -60000),
                ],
            )
            .await
            .unwrap();
        ledger
            .record_transaction(
                date(2016, 9, 4),
                "Consulting for Acme, Inc.",
                vec![Posting::new("101", 1000000), Posting::new("401", -1000000)],
            )
            .await
            .unwrap();
        ledger
            .record_transaction(
                date(2016, 9, 4),
                "Travel to Acme, Inc.",
                vec![Posting::new("101", -150000), Posting::new("501", 150000)],
            )
            .await
            .unwrap();
        ledger
            .record_transaction(
                date(2016, 9, 14),
                "Implementation for Acme, Inc.",
                vec![Posting::new("101", 2500000), Posting::new("401", -2500000)],
            )
            .await
            .unwrap();

        ledger
    }

    #[tokio::test]
    async fn balance_sheet_before_any_trading() {
        let ledger = sample_ledger().await;
        let sheet = ledger.get_balance_sheet(date(2016, 9, 1)).await.unwrap();

        assert_eq!(sheet.total_assets, 500000);
        assert_eq!(sheet.total_liabilities, 0);
        assert_eq!(sheet.total_equity, 500000);
        assert_eq!(sheet.retained_earnings, 0);

        let cash = sheet.assets.iter().find(|ab| ab.account.code == "101");
        assert_eq!(cash.unwrap().balance, 500000);
        // Accounts without postings yet still show up, at zero
        let equipment = sheet.assets.iter().find(|ab| ab.account.code == "102");
        assert_eq!(equipment.unwrap().balance, 0);
    }

    #[tokio::test]
    async fn balance_sheet_folds_trading_into_retained_earnings() {
        let ledger = sample_ledger().await;
        let sheet = ledger.get_balance_sheet(date(2016, 9, 30)).await.unwrap();

        // 500000 + 100000 equipment - 40000 - 150000 + 3500000 revenue cash
        assert_eq!(sheet.total_assets, 3910000);
        assert_eq!(sheet.total_liabilities, 60000);
        assert_eq!(sheet.total_equity, 500000);
        assert_eq!(sheet.retained_earnings, 3350000);
        assert_eq!(
            sheet.total_assets,
            sheet.total_liabilities + sheet.total_equity + sheet.retained_earnings
        );
    }

    #[tokio::test]
    async fn income_statement_respects_the_inclusive_range() {
        let ledger = sample_ledger().await;
        let statement = ledger
            .get_income_statement(date(2016, 9, 4), date(2016, 9, 13))
            .await
            .unwrap();

        assert_eq!(statement.revenue.len(), 1);
        assert_eq!(statement.revenue[0].balance, 1000000);
        assert_eq!(statement.expenses[0].balance, 150000);
        assert_eq!(statement.total_revenues, 1000000);
        assert_eq!(statement.total_expenses, 150000);
        assert_eq!(statement.net_income, 850000);
        assert_eq!(statement.net_loss, 0);
    }

    #[tokio::test]
    async fn income_statement_reports_a_loss_one_sided() {
        let mut ledger = sample_ledger().await;
        ledger
            .record_transaction(
                date(2016, 9, 20),
                "Travel to Acme, Inc. again",
                vec![Posting::new("101", -150000), Posting::new("501", 150000)],
            )
            .await
            .unwrap();

        // Only the second travel expense falls in this range
        let statement = ledger
            .get_income_statement(date(2016, 9, 15), date(2016, 9, 30))
            .await
            .unwrap();

        assert_eq!(statement.total_revenues, 0);
        assert_eq!(statement.total_expenses, 150000);
        assert_eq!(statement.net_result(), -150000);
        assert_eq!(statement.net_income, 0);
        assert_eq!(statement.net_loss, 150000);
    }

    #[tokio::test]
    async fn income_statement_rejects_inverted_range() {
        let ledger = sample_ledger().await;
        let err = ledger
            .get_income_statement(date(2016, 9, 13), date(2016, 9, 4))
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPeriod { .. }));
    }
}
