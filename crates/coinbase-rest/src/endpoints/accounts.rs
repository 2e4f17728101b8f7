//! Account endpoints
//!
//! These endpoints require authentication.

use coinbase_auth::Operation;
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::Account;

/// Endpoint listing the accounts of the credential owner
pub const ACCOUNTS_ENDPOINT: &str = "accounts";

/// Account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// List accounts in the order the exchange returns them
    ///
    /// Only the first page is returned.
    #[instrument(skip(self))]
    pub fn list(&self) -> RestResult<Vec<Account>> {
        let accounts: Vec<Account> =
            self.dispatcher
                .signed(Operation::ListAccounts, ACCOUNTS_ENDPOINT, "")?;
        debug!("Received {} accounts", accounts.len());
        Ok(accounts)
    }
}
