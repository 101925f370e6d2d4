// hearth-rest/src/lib.rs
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod outcome;

pub use client::{RestClient, DEFAULT_MAX_REDIRECT_HOPS};
pub use config::Config;
pub use error::RestError;
pub use http::{HttpTransport, Method, RawResponse, TransportError};
pub use outcome::{JsonMap, Outcome, Redirect};

// Re-export reqwest transport when the feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
