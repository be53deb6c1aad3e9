//! Balance aggregation over the transaction log

use chrono::NaiveDate;

use crate::traits::LedgerStore;
use crate::types::*;

/// Date criterion restricting which transactions a balance fold considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Cumulative balance up to and including a day
    AsOf(NaiveDate),
    /// Inclusive period sum between two days.
    ///
    /// This filters transactions by date directly rather than subtracting
    /// two cumulative balances, which keeps the result independent of
    /// transaction ordering and exact at the start boundary.
    Between { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    /// Whether a transaction dated `date` falls inside the filter.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DateFilter::AsOf(as_of) => date <= *as_of,
            DateFilter::Between { start, end } => *start <= date && date <= *end,
        }
    }
}

/// Derives account balances by folding over the transaction log.
///
/// Linear in the number of postings per query; an indexed store could do
/// better but must return identical results.
pub struct BalanceAggregator<'a, S: LedgerStore> {
    storage: &'a S,
}

impl<'a, S: LedgerStore> BalanceAggregator<'a, S> {
    /// Create an aggregator borrowing the given storage
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Net position of one account: the sum of its posting amounts over
    /// every transaction whose date satisfies the filter.
    pub async fn account_balance(&self, code: &str, filter: DateFilter) -> LedgerResult<i64> {
        let transactions = self.storage.get_transactions().await?;
        Ok(transactions
            .iter()
            .filter(|tx| filter.matches(tx.date))
            .flat_map(|tx| &tx.items)
            .filter(|item| item.account_code == code)
            .map(|item| item.amount)
            .sum())
    }
}
