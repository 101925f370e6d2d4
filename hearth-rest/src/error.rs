// hearth-rest/src/error.rs
use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `RestClient` calls.
///
/// Every failure is terminal for the call that produced it and is reported
/// exactly once; there is no automatic retry. Redirects are not errors: the
/// non-following variants report them through `Outcome::Redirect`.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request never completed: DNS, connection, TLS or timeout failure.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx, non-3xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a JSON object mapping.
    #[error("response body is not a JSON object: {0}")]
    BodyParse(#[source] serde_json::Error),

    /// The PUT payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A redirect-following call exceeded the configured hop limit.
    #[error("redirect chain exceeded {hops} hops")]
    TooManyRedirects { hops: u32 },

    /// A 3xx response carried no `Location` header to report or follow.
    #[error("HTTP {status} redirect without a Location header")]
    MissingLocation { status: u16 },
}
