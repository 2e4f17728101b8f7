//! Request signing for Coinbase private endpoints
//!
//! Coinbase signature algorithm:
//! 1. message = timestamp + METHOD + request_path + body
//! 2. HMAC-SHA256(api_secret, message)
//! 3. Hex encode result

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use tracing::trace;

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// HTTP method of a signed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET (empty body)
    Get,
    /// POST (JSON body)
    Post,
}

impl HttpMethod {
    /// Canonical upper-case form used in the signed message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Private operation being signed
///
/// Each public client operation passes its own tag, which fixes the HTTP
/// method used both in the signed message and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET accounts`
    ListAccounts,
    /// `POST accounts/{id}/addresses`
    CreateAddress,
    /// `GET accounts/{id}/addresses/{address_id}/transactions`
    ListAddressTransactions,
}

impl Operation {
    /// HTTP method for this operation
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::ListAccounts | Self::ListAddressTransactions => HttpMethod::Get,
            Self::CreateAddress => HttpMethod::Post,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListAccounts => "list_accounts",
            Self::CreateAddress => "create_address",
            Self::ListAddressTransactions => "list_address_transactions",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the hex-encoded HMAC-SHA256 signature of a request
///
/// # Arguments
/// * `secret` - API secret (HMAC key)
/// * `timestamp` - Exchange epoch seconds, as sent in `CB-ACCESS-TIMESTAMP`
/// * `method` - HTTP method
/// * `request_path` - Path including the version prefix (e.g. `/v2/accounts`)
/// * `body` - Literal request body, empty for GET
pub fn sign(secret: &str, timestamp: u64, method: HttpMethod, request_path: &str, body: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(method.as_str().as_bytes());
    mac.update(request_path.as_bytes());
    mac.update(body.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

/// Everything needed to send one signed request
///
/// Built fresh for every call and never reused. The body stored here is the
/// exact body that was signed and is the one that must be transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    operation: Operation,
    request_path: String,
    timestamp: u64,
    body: String,
    signature: String,
}

impl RequestContext {
    /// Build and sign a request context
    ///
    /// GET operations always sign and carry an empty body; any `body` given
    /// for them is dropped.
    pub fn new(
        credentials: &Credentials,
        operation: Operation,
        request_path: impl Into<String>,
        timestamp: u64,
        body: impl Into<String>,
    ) -> Self {
        let request_path = request_path.into();
        let body = match operation.method() {
            HttpMethod::Get => String::new(),
            HttpMethod::Post => body.into(),
        };

        let signature = credentials.sign(timestamp, operation.method(), &request_path, &body);
        trace!(%operation, %request_path, timestamp, "Signed request");

        Self {
            operation,
            request_path,
            timestamp,
            body,
            signature,
        }
    }

    /// Operation tag
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// HTTP method
    pub fn method(&self) -> HttpMethod {
        self.operation.method()
    }

    /// Signed request path
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    /// Exchange timestamp used for signing
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Signed body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Hex signature (`CB-ACCESS-SIGN`)
    pub fn signature(&self) -> &str {
        &self.signature
    }
}
