//! Deposit address endpoints
//!
//! These endpoints require authentication and operate on the primary account.

use coinbase_auth::Operation;
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{Address, Transaction};

/// Name used when the caller does not supply one
pub const DEFAULT_ADDRESS_NAME: &str = "New deposit address";

/// `accounts/{account_id}/addresses`
pub fn addresses_endpoint(account_id: &str) -> String {
    format!("accounts/{}/addresses", account_id)
}

/// `accounts/{account_id}/addresses/{address_id}/transactions`
pub fn address_transactions_endpoint(account_id: &str, address_id: &str) -> String {
    format!("accounts/{}/addresses/{}/transactions", account_id, address_id)
}

/// Check that an id can be used as a single path segment
///
/// The signature covers the path as written, so anything the URL parser
/// would re-encode or reinterpret is rejected: separators, query and
/// fragment markers, percent escapes, dot segments, and any character
/// outside printable ASCII.
pub fn validate_path_segment(kind: &str, value: &str) -> RestResult<()> {
    if value.is_empty() {
        return Err(RestError::Config(format!("{} must not be empty", kind)));
    }
    let bad_char = value.chars().find(|&c| {
        !c.is_ascii_graphic()
            || matches!(c, '/' | '?' | '#' | '%' | '\\' | '"' | '<' | '>' | '`' | '{' | '}')
    });
    if let Some(c) = bad_char {
        return Err(RestError::Config(format!(
            "{} contains invalid character {:?}",
            kind, c
        )));
    }
    if value == "." || value.contains("..") {
        return Err(RestError::Config(format!("{} must not be a dot segment", kind)));
    }
    Ok(())
}

/// Body for address creation: exactly `{"name": "<name>"}`
///
/// The exchange recomputes the signature over the literal body, so this
/// string is signed and sent byte for byte.
pub fn create_address_body(name: &str) -> RestResult<String> {
    let quoted = serde_json::to_string(name)
        .map_err(|e| RestError::Config(format!("Unencodable address name: {}", e)))?;
    Ok(format!("{{\"name\": {}}}", quoted))
}

/// Address endpoints bound to one account
pub struct AddressEndpoints<'a> {
    dispatcher: &'a Dispatcher,
    account_id: &'a str,
}

impl<'a> AddressEndpoints<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher, account_id: &'a str) -> Self {
        Self {
            dispatcher,
            account_id,
        }
    }

    /// Account these endpoints act on
    pub fn account_id(&self) -> &str {
        self.account_id
    }

    /// Create a new deposit address
    #[instrument(skip(self), fields(account_id = %self.account_id))]
    pub fn create(&self, name: &str) -> RestResult<Address> {
        validate_path_segment("account id", self.account_id)?;
        let body = create_address_body(name)?;
        let endpoint = addresses_endpoint(self.account_id);

        let address: Address = self
            .dispatcher
            .signed(Operation::CreateAddress, &endpoint, &body)?;
        debug!(address_id = %address.id, "Created deposit address");
        Ok(address)
    }

    /// List transactions received on an address
    #[instrument(skip(self), fields(account_id = %self.account_id))]
    pub fn transactions(&self, address_id: &str) -> RestResult<Vec<Transaction>> {
        validate_path_segment("account id", self.account_id)?;
        validate_path_segment("address id", address_id)?;
        let endpoint = address_transactions_endpoint(self.account_id, address_id);

        let transactions: Vec<Transaction> =
            self.dispatcher
                .signed(Operation::ListAddressTransactions, &endpoint, "")?;
        debug!("Received {} transactions", transactions.len());
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_address_body_is_exact() {
        assert_eq!(create_address_body("X").unwrap(), r#"{"name": "X"}"#);
        assert_eq!(
            create_address_body(DEFAULT_ADDRESS_NAME).unwrap(),
            r#"{"name": "New deposit address"}"#
        );
    }

    #[test]
    fn test_create_address_body_escapes() {
        assert_eq!(
            create_address_body(r#"my "cold" wallet"#).unwrap(),
            r#"{"name": "my \"cold\" wallet"}"#
        );
    }

    #[test]
    fn test_validate_path_segment_accepts_ids() {
        assert!(validate_path_segment("address id", "addr1").is_ok());
        assert!(validate_path_segment("address id", "dd3183eb-af1d-5f5d-a90d-cbff946435ff").is_ok());
        assert!(validate_path_segment("address id", "v1.2").is_ok());
    }

    #[test]
    fn test_validate_path_segment_rejects_unsafe_ids() {
        for id in [
            "",
            "addr 1",
            "addr\t1",
            "x/../../../time",
            "x/y",
            "x?limit=1",
            "x#frag",
            "addr%201",
            ".",
            "..",
            "a..b",
            "x\\y",
            "addr\u{e9}",
            "a{b}",
        ] {
            let err = validate_path_segment("address id", id).unwrap_err();
            assert!(matches!(err, RestError::Config(_)), "{:?} accepted", id);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(addresses_endpoint("abc123"), "accounts/abc123/addresses");
        assert_eq!(
            address_transactions_endpoint("abc123", "addr1"),
            "accounts/abc123/addresses/addr1/transactions"
        );
    }
}
