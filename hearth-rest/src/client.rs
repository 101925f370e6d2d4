// hearth-rest/src/client.rs
//! REST client for the device API.
//!
//! # Design
//! `RestClient` is an explicit value owning its transport and root
//! endpoint; callers share it by reference and each call returns a
//! `Result<Outcome, RestError>`, so exactly one outcome fires per call.
//! The full request URL is built at the top of each call, which means
//! `set_root_endpoint` never affects a request that has already started.

use crate::error::RestError;
use crate::http::{HttpTransport, Method, RawResponse};
use crate::outcome::{JsonMap, Outcome, Redirect};

/// Default cap on hops for the `*_following_redirects` variants.
pub const DEFAULT_MAX_REDIRECT_HOPS: u32 = 10;

pub struct RestClient<T: HttpTransport> {
    transport: T,
    root_endpoint: String,
    max_redirect_hops: u32,
}

impl<T: HttpTransport> RestClient<T> {
    pub fn new(transport: T, root_endpoint: &str) -> Self {
        Self {
            transport,
            root_endpoint: root_endpoint.trim_end_matches('/').to_string(),
            max_redirect_hops: DEFAULT_MAX_REDIRECT_HOPS,
        }
    }

    /// Override the redirect hop limit.
    pub fn max_redirect_hops(mut self, hops: u32) -> Self {
        self.max_redirect_hops = hops;
        self
    }

    /// The URL prefix prepended to every request path.
    pub fn root_endpoint(&self) -> &str {
        &self.root_endpoint
    }

    /// Replace the root endpoint. Subsequent calls use the new value; a call
    /// that has already built its URL is unaffected.
    pub fn set_root_endpoint(&mut self, root: &str) {
        self.root_endpoint = root.trim_end_matches('/').to_string();
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.root_endpoint, endpoint)
        } else {
            format!("{}/{}", self.root_endpoint, endpoint)
        }
    }

    /// HTTP GET at `{root}{endpoint}`. A 3xx response is surfaced as
    /// `Outcome::Redirect`, never followed.
    pub async fn get(&self, endpoint: &str) -> Result<Outcome, RestError> {
        let url = self.url_for(endpoint);
        let response = self.transport.execute(Method::Get, &url, None).await?;
        resolve_outcome(response)
    }

    /// HTTP PUT of `values` as a JSON object body at `{root}{endpoint}`.
    /// Same outcome contract as [`get`](Self::get).
    pub async fn set(&self, endpoint: &str, values: &JsonMap) -> Result<Outcome, RestError> {
        let url = self.url_for(endpoint);
        let body = serde_json::to_vec(values).map_err(RestError::Serialize)?;
        let response = self.transport.execute(Method::Put, &url, Some(body)).await?;
        resolve_outcome(response)
    }

    /// GET that re-issues the request against each redirect target until a
    /// terminal body or failure, up to the hop limit.
    pub async fn get_following_redirects(&self, endpoint: &str) -> Result<JsonMap, RestError> {
        self.follow(Method::Get, endpoint, None).await
    }

    /// Redirect-following PUT, analogous to
    /// [`get_following_redirects`](Self::get_following_redirects).
    pub async fn set_following_redirects(
        &self,
        endpoint: &str,
        values: &JsonMap,
    ) -> Result<JsonMap, RestError> {
        let body = serde_json::to_vec(values).map_err(RestError::Serialize)?;
        self.follow(Method::Put, endpoint, Some(body)).await
    }

    async fn follow(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<JsonMap, RestError> {
        let mut url = self.url_for(endpoint);
        // One initial request plus at most max_redirect_hops follow-ups.
        for _ in 0..=self.max_redirect_hops {
            let response = self.transport.execute(method, &url, body.clone()).await?;
            match resolve_outcome(response)? {
                Outcome::Body(map) => return Ok(map),
                Outcome::Redirect(redirect) => {
                    url = resolve_location(&url, &redirect.location);
                }
            }
        }
        Err(RestError::TooManyRedirects {
            hops: self.max_redirect_hops,
        })
    }
}

/// Map a raw response to the call's terminal outcome.
fn resolve_outcome(response: RawResponse) -> Result<Outcome, RestError> {
    if response.is_redirect() {
        let location = response
            .location()
            .ok_or(RestError::MissingLocation {
                status: response.status,
            })?
            .to_string();
        return Ok(Outcome::Redirect(Redirect {
            status: response.status,
            location,
        }));
    }

    if !response.is_success() {
        return Err(RestError::Status {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).to_string(),
        });
    }

    if response.body.is_empty() {
        return Ok(Outcome::Body(JsonMap::new()));
    }
    serde_json::from_slice(&response.body)
        .map(Outcome::Body)
        .map_err(RestError::BodyParse)
}

/// Resolve a `Location` value against the URL that produced it. Absolute
/// URLs pass through; `/`-rooted paths keep the scheme and authority;
/// anything else replaces the last path segment.
fn resolve_location(current: &str, location: &str) -> String {
    if location.contains("://") {
        return location.to_string();
    }
    if location.starts_with('/') {
        return format!("{}{}", origin_of(current), location);
    }
    let after_scheme = current.find("://").map(|i| i + 3).unwrap_or(0);
    match current[after_scheme..].rfind('/') {
        Some(i) => format!("{}/{}", &current[..after_scheme + i], location),
        None => format!("{current}/{location}"),
    }
}

/// `scheme://host[:port]` of a URL, or the whole string if it has no path.
fn origin_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(i) => &url[..after_scheme + i],
        None => url,
    }
}
