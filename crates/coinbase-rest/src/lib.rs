//! Blocking REST client for the Coinbase v2 wallet API
//!
//! This crate wraps the handful of private endpoints needed to accept crypto
//! deposits: list accounts, create deposit addresses on the primary account,
//! and list the transactions received on an address.
//!
//! # Authentication
//!
//! Every private request is signed with HMAC-SHA256 over
//! `timestamp + METHOD + request_path + body`, where the timestamp comes from
//! the exchange's own clock (`GET /v2/time`). Signing lives in the
//! `coinbase-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{CoinbaseClient, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = CoinbaseClient::connect(creds)?;
//!
//!     println!("Primary account: {}", client.account_id()?);
//!     let address = client.create_new_address("Invoice 1001")?;
//!     println!("Deposit to: {:?}", address.address);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! Calls are synchronous and never retried. Transport failures and exchange
//! rejections are reported as distinct [`RestError`] variants.

pub mod client;
pub mod config;
mod dispatch;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::CoinbaseClient;
pub use coinbase_auth::{Credentials, CredentialsError, HttpMethod, Operation};
pub use config::ClientConfig;
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub use types::{Account, Address, ApiResponse, Money, Pagination, ServerTime, Transaction};
