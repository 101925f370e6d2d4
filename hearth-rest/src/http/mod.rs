// hearth-rest/src/http/mod.rs
use async_trait::async_trait;

/// HTTP method for a request. The device API is GET/PUT only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

/// Transport-level failure: DNS, connection, TLS, timeout. No response
/// arrived, so there is no status code to report.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// An HTTP response as plain data.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Value of the `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("location"))
            .map(|(_, value)| value.as_str())
    }
}

/// Generic HTTP transport trait - users can implement their own.
///
/// Implementations must not follow redirects themselves: 3xx responses come
/// back as-is so `RestClient` can surface or follow them.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a single request. A `Some` body is sent as JSON.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, TransportError>;
}

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use reqwest::ReqwestTransport;
