// hearth-rest/src/http/reqwest.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect;

use super::{HttpTransport, Method, RawResponse, TransportError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        // Redirect handling lives in RestClient; the wire client must hand
        // 3xx responses back untouched.
        let inner = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError {
                message: e.to_string(),
            })?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, TransportError> {
        let mut req = match method {
            Method::Get => self.inner.get(url),
            Method::Put => self.inner.put(url),
        };

        if let Some(bytes) = body {
            req = req.header("content-type", "application/json").body(bytes);
        }

        let resp = req.send().await.map_err(|e| TransportError {
            message: e.to_string(),
        })?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError {
                message: e.to_string(),
            })?
            .to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
