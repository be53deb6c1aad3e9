//! Basic ledger usage example
//!
//! Walks a small consultancy through its first month of bookkeeping and
//! prints the resulting reports.

use chrono::NaiveDate;
use ledger_core::{AccountType, Ledger, MemoryStorage, Posting};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ledger Core - Basic Ledger Example\n");

    let mut ledger = Ledger::new(MemoryStorage::new());

    // 1. Set up the chart of accounts
    println!("Setting up chart of accounts...");
    for (code, name, account_type) in [
        ("101", "Cash", AccountType::Asset),
        ("102", "Equipment", AccountType::Asset),
        ("201", "Bank Loan", AccountType::Liability),
        ("301", "Share Capital", AccountType::Equity),
        ("401", "Consulting Revenue", AccountType::Revenue),
        ("501", "Business Travel", AccountType::Expense),
    ] {
        let account = ledger.create_account(code, name, account_type).await?;
        println!("  created {} - {} ({})", account.code, account.name, account.account_type);
    }
    println!();

    // 2. Record the month's transactions (amounts in cents)
    println!("Recording transactions...");
    let transactions = [
        (
            NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            "Record the funder's investment",
            vec![Posting::new("101", 500_000), Posting::new("301", -500_000)],
        ),
        (
            NaiveDate::from_ymd_opt(2016, 9, 2).unwrap(),
            "Buy a laptop",
            vec![
                Posting::new("101", -40_000),
                Posting::new("102", 100_000),
                Posting::new("201", -60_000),
            ],
        ),
        (
            NaiveDate::from_ymd_opt(2016, 9, 4).unwrap(),
            "Consulting for Acme, Inc.",
            vec![Posting::new("101", 1_000_000), Posting::new("401", -1_000_000)],
        ),
        (
            NaiveDate::from_ymd_opt(2016, 9, 4).unwrap(),
            "Travel to Acme, Inc.",
            vec![Posting::new("101", -150_000), Posting::new("501", 150_000)],
        ),
        (
            NaiveDate::from_ymd_opt(2016, 9, 14).unwrap(),
            "Implementation for Acme, Inc.",
            vec![Posting::new("101", 2_500_000), Posting::new("401", -2_500_000)],
        ),
    ];

    for (date, description, items) in transactions {
        let id = ledger.record_transaction(date, description, items).await?;
        println!("  #{id}: {description}");
    }
    println!();

    // 3. Balance sheet at the end of the month
    let sheet = ledger
        .get_balance_sheet(NaiveDate::from_ymd_opt(2016, 9, 30).unwrap())
        .await?;
    println!("Balance sheet as of {}", sheet.date);
    for ab in sheet.assets.iter().chain(&sheet.liabilities).chain(&sheet.equity) {
        println!(
            "  {:<12} {:<20} {:>12.2}",
            ab.account.account_type.to_string(),
            ab.account.name,
            ab.balance as f64 / 100.0
        );
    }
    println!("  retained earnings: {:.2}", sheet.retained_earnings as f64 / 100.0);
    println!(
        "  assets {:.2} = liabilities {:.2} + equity {:.2} + retained {:.2}\n",
        sheet.total_assets as f64 / 100.0,
        sheet.total_liabilities as f64 / 100.0,
        sheet.total_equity as f64 / 100.0,
        sheet.retained_earnings as f64 / 100.0
    );

    // 4. Income statement for the first half of the month
    let statement = ledger
        .get_income_statement(
            NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2016, 9, 13).unwrap(),
        )
        .await?;
    println!(
        "Income statement {} to {}",
        statement.start_date, statement.end_date
    );
    println!("  total revenues: {:.2}", statement.total_revenues as f64 / 100.0);
    println!("  total expenses: {:.2}", statement.total_expenses as f64 / 100.0);
    if statement.net_income > 0 {
        println!("  net income:     {:.2}", statement.net_income as f64 / 100.0);
    } else {
        println!("  net loss:       {:.2}", statement.net_loss as f64 / 100.0);
    }

    Ok(())
}
