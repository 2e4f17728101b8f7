//! Request signing and dispatch shared by all endpoints

use coinbase_auth::{Credentials, HttpMethod, Operation, RequestContext};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::types::{ApiResponse, ErrorBody, ServerTime};

/// Longest body excerpt quoted in an error message
const MAX_BODY_EXCERPT: usize = 256;

/// Signs requests and sends them through the transport
#[derive(Clone)]
pub(crate) struct Dispatcher {
    pub(crate) config: ClientConfig,
    pub(crate) credentials: Credentials,
    pub(crate) transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Fetch the exchange clock (unauthenticated)
    pub(crate) fn server_time(&self) -> RestResult<u64> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.config.url(&self.config.request_path("time")),
            headers: vec![("CB-VERSION", self.config.api_version.clone())],
            body: None,
        };

        let response = self.transport.send(&request)?;
        let parsed: ApiResponse<ServerTime> = serde_json::from_str(&response.body).map_err(|e| {
            RestError::TimeSync(format!(
                "Unreadable time response (status {}): {}",
                response.status, e
            ))
        })?;

        parsed
            .data
            .and_then(|time| time.epoch)
            .ok_or_else(|| {
                RestError::TimeSync(format!(
                    "Response (status {}) has no data.epoch field",
                    response.status
                ))
            })
    }

    /// Sign and send a private request, returning the `data` payload
    pub(crate) fn signed<T: DeserializeOwned>(
        &self,
        operation: Operation,
        endpoint: &str,
        body: &str,
    ) -> RestResult<T> {
        let timestamp = self.server_time()?;
        let ctx = RequestContext::new(
            &self.credentials,
            operation,
            self.config.request_path(endpoint),
            timestamp,
            body,
        );

        debug!(%operation, path = ctx.request_path(), "Making authenticated request");

        let request = self.build_request(&ctx);
        let response = self.transport.send(&request)?;
        decode(response)
    }

    /// Attach the signed headers and, for POST, the signed body
    pub(crate) fn build_request(&self, ctx: &RequestContext) -> HttpRequest {
        let headers = vec![
            ("Cache-Control", "no-cache".to_string()),
            ("Content-Type", "application/json".to_string()),
            ("CB-VERSION", self.config.api_version.clone()),
            ("CB-ACCESS-TIMESTAMP", ctx.timestamp().to_string()),
            ("CB-ACCESS-SIGN", ctx.signature().to_string()),
            ("CB-ACCESS-KEY", self.credentials.api_key().to_string()),
        ];

        let body = match ctx.method() {
            HttpMethod::Get => None,
            HttpMethod::Post => Some(ctx.body().to_string()),
        };

        HttpRequest {
            method: ctx.method(),
            url: self.config.url(ctx.request_path()),
            headers,
            body,
        }
    }
}

/// Turn a raw response into a payload or an error
pub(crate) fn decode<T: DeserializeOwned>(response: HttpResponse) -> RestResult<T> {
    let status = response.status;

    if !response.is_success() {
        let error_body = serde_json::from_str::<ErrorBody>(&response.body).ok();
        let message = error_body
            .as_ref()
            .and_then(ErrorBody::message)
            .unwrap_or_else(|| excerpt(&response.body));

        let not_found = status == 404
            || error_body
                .as_ref()
                .map(|b| b.has_id("not_found"))
                .unwrap_or(false);
        if not_found {
            return Err(RestError::NotFound(message));
        }

        warn!(status, %message, "Request rejected by exchange");
        return Err(RestError::Api { status, message });
    }

    let parsed: ApiResponse<T> = serde_json::from_str(&response.body).map_err(|e| RestError::Api {
        status,
        message: format!("Malformed response: {}", e),
    })?;

    if let Some(next) = parsed.pagination.as_ref().and_then(|p| p.next_uri.as_deref()) {
        debug!(next_uri = next, "More results available");
    }
    for warning in parsed.warnings.iter().flatten() {
        warn!(id = %warning.id, message = ?warning.message, "Exchange warning");
    }

    parsed.data.ok_or_else(|| RestError::Api {
        status,
        message: "No data in response".to_string(),
    })
}

fn excerpt(body: &str) -> String {
    if body.trim().is_empty() {
        return "Empty response body".to_string();
    }
    body.chars().take(MAX_BODY_EXCERPT).collect()
}
