//! Demo 1: Account Overview
//!
//! Showcases: server clock, credential check, primary account resolution
//!
//! Run: COINBASE_API_KEY=... COINBASE_API_SECRET=... cargo run --bin account_overview

use coinbase_rest::CoinbaseClient;
use colored::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINBASE ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = CoinbaseClient::from_env()?;
    println!("{} Connected\n", "✓".green());

    let epoch = client.get_server_time()?;
    println!("  Server time:     {}", epoch.to_string().yellow());
    println!("  Primary account: {}\n", client.account_id()?.green());

    println!(
        "  {:<38} {:<8} {:>20}",
        "ACCOUNT".white().bold(),
        "TYPE".white().bold(),
        "BALANCE".white().bold()
    );
    println!("  {}", "─".repeat(68));

    for account in client.get_accounts()? {
        let balance = account
            .balance
            .as_ref()
            .map(|b| format!("{} {}", b.amount, b.currency))
            .unwrap_or_else(|| "-".to_string());
        let marker = if account.primary { "*".green() } else { " ".normal() };

        println!(
            "{} {:<38} {:<8} {:>20}",
            marker,
            account.id,
            account.kind.as_deref().unwrap_or("-"),
            balance
        );
    }

    Ok(())
}
