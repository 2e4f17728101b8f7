//! Demo 2: Deposit Address
//!
//! Showcases: signed POST with a JSON body, address transaction listing
//!
//! Run:
//!   cargo run --bin deposit_address -- new "Invoice 1001"
//!   cargo run --bin deposit_address -- txs <address_id>

use coinbase_rest::{CoinbaseClient, RestError};
use colored::*;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("usage: deposit_address new [name] | txs <address_id>");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let client = CoinbaseClient::from_env()?;

    match args.first().map(String::as_str) {
        Some("new") => {
            let address = match args.get(1) {
                Some(name) => client.create_new_address(name)?,
                None => client.create_default_address()?,
            };
            println!("{} Created address {}", "✓".green(), address.id.cyan());
            println!("  Name:    {}", address.name.as_deref().unwrap_or("-"));
            println!("  Network: {}", address.network.as_deref().unwrap_or("-"));
            println!(
                "  Deposit: {}",
                address.address.as_deref().unwrap_or("-").yellow().bold()
            );
        }
        Some("txs") => {
            let address_id = args.get(1).unwrap_or_else(|| usage());
            match client.get_address_transactions(address_id) {
                Ok(txs) if txs.is_empty() => println!("No transactions yet"),
                Ok(txs) => {
                    for tx in txs {
                        let amount = tx
                            .amount
                            .as_ref()
                            .map(|m| format!("{} {}", m.amount, m.currency))
                            .unwrap_or_default();
                        let status = tx.status.as_deref().unwrap_or("-");
                        let status = if tx.is_completed() {
                            status.green()
                        } else {
                            status.yellow()
                        };
                        println!("  {:<38} {:>20} {}", tx.id, amount, status);
                    }
                }
                Err(RestError::NotFound(_)) => {
                    println!("{} Unknown address {}", "✗".red(), address_id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ => usage(),
    }

    Ok(())
}
