//! Credentials and request signing for the Coinbase v2 REST API
//!
//! Every private request carries an HMAC-SHA256 signature computed over
//! `timestamp + METHOD + request_path + body`, hex encoded, together with the
//! caller's API key. The secret itself never leaves the process.
//!
//! Signing is a pure function of its inputs so it can be tested without a
//! network connection. The operation being signed is named explicitly with an
//! [`Operation`] tag.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_auth::{Credentials, Operation, RequestContext};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let ctx = RequestContext::new(&creds, Operation::ListAccounts, "/v2/accounts", 1439160000, "");
//! println!("CB-ACCESS-SIGN: {}", ctx.signature());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod signing;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{CredentialsError, CredentialsResult};
pub use signing::{sign, HttpMethod, Operation, RequestContext};
