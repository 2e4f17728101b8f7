//! HTTP transport abstraction
//!
//! The client talks to the exchange through the [`Transport`] trait so that
//! request building and signing can be exercised against a scripted exchange
//! in tests. [`ReqwestTransport`] is the real implementation.

use coinbase_auth::HttpMethod;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{RestError, RestResult};

/// Outbound HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(&'static str, String)>,
    /// Literal body (POST only)
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations perform exactly one blocking round trip per call and
/// report failures to reach the server as [`RestError::Transport`].
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response
    fn send(&self, request: &HttpRequest) -> RestResult<HttpResponse>;
}

/// Real HTTP transport using a blocking reqwest client
///
/// Certificate verification is always on.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| RestError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: &HttpRequest) -> RestResult<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|e| RestError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RestError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(status, bytes = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "https://api.coinbase.com/v2/time".to_string(),
            headers: vec![("CB-ACCESS-KEY", "key".to_string())],
            body: None,
        };
        assert_eq!(request.header("cb-access-key"), Some("key"));
        assert_eq!(request.header("CB-ACCESS-SIGN"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(201, "{}").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(&ClientConfig::default()).is_ok());
    }

    /// Local server answering every connection with a redirect to itself
    fn redirect_loop() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                counter.fetch_add(1, Ordering::SeqCst);

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = stream.write_all(
                    b"HTTP/1.1 302 Found\r\nLocation: /next\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                );
            }
        });

        (format!("http://{}", addr), hits)
    }

    fn get(url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn test_redirect_limit_applied() {
        let (base_url, hits) = redirect_loop();
        let transport = ReqwestTransport::new(&ClientConfig::new().with_max_redirects(2)).unwrap();

        let err = transport.send(&get(format!("{}/start", base_url))).unwrap_err();
        assert!(err.is_transport(), "got {:?}", err);
        // The default policy would keep following for ten hops
        let hits = hits.load(Ordering::SeqCst);
        assert!((1..=3).contains(&hits), "{} requests reached the server", hits);
    }

    #[test]
    fn test_timeout_applied() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            // Accept and never answer
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        let transport = ReqwestTransport::new(&ClientConfig::new().with_timeout(1)).unwrap();
        let started = Instant::now();
        let err = transport.send(&get(format!("http://{}/time", addr))).unwrap_err();

        assert!(err.is_transport(), "got {:?}", err);
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
