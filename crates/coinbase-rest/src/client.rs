//! Main REST client implementation

use coinbase_auth::Credentials;
use std::sync::{Arc, OnceLock};
use tracing::{info, instrument};

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::endpoints::addresses::DEFAULT_ADDRESS_NAME;
use crate::endpoints::{AccountEndpoints, AddressEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Account, Address, Transaction};

/// Coinbase REST API client
///
/// Construction resolves and caches the primary account id, so a client that
/// exists is ready to create addresses and list their transactions. All calls
/// block until the exchange answers or the timeout expires.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::{CoinbaseClient, Credentials};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let creds = Credentials::from_env()?;
/// let client = CoinbaseClient::connect(creds)?;
///
/// let address = client.create_new_address("Customer 42")?;
/// let txs = client.get_address_transactions(&address.id)?;
/// println!("{} transactions", txs.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CoinbaseClient {
    dispatcher: Dispatcher,
    account_id: OnceLock<String>,
}

impl CoinbaseClient {
    /// Connect with the default configuration
    pub fn connect(credentials: Credentials) -> RestResult<Self> {
        Self::connect_with_config(credentials, ClientConfig::default())
    }

    /// Connect using credentials from `COINBASE_API_KEY` and `COINBASE_API_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::connect(Credentials::from_env()?)
    }

    /// Connect with custom configuration
    pub fn connect_with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, config, Arc::new(transport))
    }

    /// Connect through a custom transport
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> RestResult<Self> {
        let client = Self::unresolved(credentials, config, transport);
        client.resolve_primary_account()?;

        info!(base_url = %client.config().base_url, "Created Coinbase REST client");
        Ok(client)
    }

    fn unresolved(credentials: Credentials, config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher {
                config,
                credentials,
                transport,
            },
            account_id: OnceLock::new(),
        }
    }

    fn resolve_primary_account(&self) -> RestResult<&str> {
        let accounts = self.get_accounts()?;
        if accounts.is_empty() {
            return Err(RestError::Auth(
                "No accounts found for these credentials".to_string(),
            ));
        }

        let primary = accounts
            .iter()
            .find(|account| account.primary)
            .ok_or(RestError::NoPrimaryAccount)?;

        info!(account_id = %primary.id, "Resolved primary account");
        Ok(self.account_id.get_or_init(|| primary.id.clone()).as_str())
    }

    /// Configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.dispatcher.config
    }

    /// Credentials in use
    pub fn credentials(&self) -> &Credentials {
        &self.dispatcher.credentials
    }

    /// Current exchange time in epoch seconds (unauthenticated)
    #[instrument(skip(self))]
    pub fn get_server_time(&self) -> RestResult<u64> {
        self.dispatcher.server_time()
    }

    /// Cached primary account id
    pub fn account_id(&self) -> RestResult<&str> {
        self.account_id
            .get()
            .map(String::as_str)
            .ok_or(RestError::NoPrimaryAccount)
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Get account endpoints
    pub fn accounts(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.dispatcher)
    }

    /// List all accounts owned by the credentials
    pub fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.accounts().list()
    }

    // ========================================================================
    // Addresses
    // ========================================================================

    /// Get address endpoints for the primary account
    pub fn addresses(&self) -> RestResult<AddressEndpoints<'_>> {
        Ok(AddressEndpoints::new(&self.dispatcher, self.account_id()?))
    }

    /// Create a deposit address on the primary account
    pub fn create_new_address(&self, name: &str) -> RestResult<Address> {
        self.addresses()?.create(name)
    }

    /// Create a deposit address named "New deposit address"
    pub fn create_default_address(&self) -> RestResult<Address> {
        self.create_new_address(DEFAULT_ADDRESS_NAME)
    }

    /// List transactions received on an address of the primary account
    pub fn get_address_transactions(&self, address_id: &str) -> RestResult<Vec<Transaction>> {
        self.addresses()?.transactions(address_id)
    }
}

impl std::fmt::Debug for CoinbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseClient")
            .field("base_url", &self.dispatcher.config.base_url)
            .field("credentials", &self.dispatcher.credentials)
            .field("account_id", &self.account_id.get())
            .finish()
    }
}
