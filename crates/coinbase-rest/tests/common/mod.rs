//! Common test utilities: a scripted exchange behind the `Transport` trait
//!
//! Sample payloads follow the shapes documented for the Coinbase v2 API.

#![allow(dead_code)]

use coinbase_rest::{
    ClientConfig, CoinbaseClient, Credentials, HttpMethod, HttpRequest, HttpResponse, RestError,
    RestResult, Transport,
};
use parking_lot::Mutex;
use std::sync::Arc;

pub const BASE_URL: &str = "http://mock.exchange";
pub const API_KEY: &str = "test_api_key";
pub const API_SECRET: &str = "test_api_secret";
pub const EPOCH: u64 = 1439160000;
pub const ACCOUNT_ID: &str = "abc123";

pub const TIME_RESPONSE: &str = r#"{"data":{"iso":"2015-08-09T22:40:00Z","epoch":1439160000}}"#;

pub const TIME_WITHOUT_EPOCH: &str = r#"{"data":{"iso":"2015-08-09T22:40:00Z"}}"#;

pub const ACCOUNTS_RESPONSE: &str = r#"{
    "pagination": {"ending_before": null, "starting_after": null, "limit": 25, "order": "desc", "previous_uri": null, "next_uri": null},
    "data": [
        {
            "id": "vault1",
            "name": "My Vault",
            "primary": false,
            "type": "vault",
            "currency": "BTC",
            "balance": {"amount": "4.00000000", "currency": "BTC"},
            "resource": "account"
        },
        {
            "id": "abc123",
            "name": "My Wallet",
            "primary": true,
            "type": "wallet",
            "currency": "BTC",
            "balance": {"amount": "39.59000000", "currency": "BTC"},
            "resource": "account"
        }
    ]
}"#;

pub const NO_PRIMARY_RESPONSE: &str = r#"{"data": [
    {"id": "vault1", "primary": false, "type": "vault"},
    {"id": "vault2", "primary": false, "type": "vault"}
]}"#;

pub const EMPTY_ACCOUNTS_RESPONSE: &str = r#"{"data": []}"#;

pub const ADDRESS_RESPONSE: &str = r#"{"data": {
    "id": "addr1",
    "address": "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa",
    "name": "X",
    "network": "bitcoin",
    "created_at": "2015-01-31T20:49:02Z",
    "updated_at": "2015-03-31T17:25:29-07:00",
    "resource": "address",
    "resource_path": "/v2/accounts/abc123/addresses/addr1"
}}"#;

pub const TRANSACTIONS_RESPONSE: &str = r#"{"data": [
    {
        "id": "tx1",
        "type": "send",
        "status": "completed",
        "amount": {"amount": "0.00100000", "currency": "BTC"},
        "native_amount": {"amount": "0.01", "currency": "USD"},
        "description": null,
        "created_at": "2015-03-11T13:13:35-07:00",
        "resource": "transaction"
    }
]}"#;

pub const NOT_FOUND_RESPONSE: &str =
    r#"{"errors":[{"id":"not_found","message":"Not found"}]}"#;

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

struct Route {
    method: HttpMethod,
    path: String,
    reply: Reply,
}

/// Scripted exchange recording every request it receives
///
/// Unrouted requests get a 404 `not_found` payload.
pub struct MockExchange {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Exchange with a working clock and the default account list
    pub fn standard() -> Self {
        Self::new()
            .route(HttpMethod::Get, "/v2/time", 200, TIME_RESPONSE)
            .route(HttpMethod::Get, "/v2/accounts", 200, ACCOUNTS_RESPONSE)
    }

    pub fn route(self, method: HttpMethod, path: &str, status: u16, body: &str) -> Self {
        self.routes.lock().push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Respond(HttpResponse::new(status, body)),
        });
        self
    }

    pub fn fail(self, method: HttpMethod, path: &str, message: &str) -> Self {
        self.routes.lock().push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Fail(message.to_string()),
        });
        self
    }

    /// Replace every route for a path
    pub fn reroute(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        let mut routes = self.routes.lock();
        routes.retain(|r| !(r.method == method && r.path == path));
        routes.push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Respond(HttpResponse::new(status, body)),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Requests other than the unauthenticated clock reads
    pub fn signed_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.header("CB-ACCESS-SIGN").is_some())
            .collect()
    }

    pub fn last_signed(&self) -> HttpRequest {
        self.signed_requests()
            .pop()
            .expect("no signed request was sent")
    }
}

impl Transport for MockExchange {
    fn send(&self, request: &HttpRequest) -> RestResult<HttpResponse> {
        self.requests.lock().push(request.clone());

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();

        let routes = self.routes.lock();
        match routes
            .iter()
            .find(|r| r.method == request.method && r.path == path)
        {
            Some(Route {
                reply: Reply::Respond(response),
                ..
            }) => Ok(response.clone()),
            Some(Route {
                reply: Reply::Fail(message),
                ..
            }) => Err(RestError::Transport(message.clone())),
            None => Ok(HttpResponse::new(404, NOT_FOUND_RESPONSE)),
        }
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

pub fn config() -> ClientConfig {
    ClientConfig::new().with_base_url(BASE_URL)
}

pub fn connect(exchange: &Arc<MockExchange>) -> RestResult<CoinbaseClient> {
    CoinbaseClient::with_transport(credentials(), config(), exchange.clone())
}
