// hearth-rest/src/outcome.rs
use serde_json::{Map, Value};

/// A parsed JSON object body: field names mapped to values.
pub type JsonMap = Map<String, Value>;

/// Terminal result of a non-following `get`/`set` call.
///
/// A call either produced a body or stopped at a redirect. Failures travel
/// through `RestError`, so exactly one of the three channels fires per call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx response with its parsed JSON body. An empty body counts as an
    /// empty mapping.
    Body(JsonMap),
    /// 3xx response, surfaced rather than followed.
    Redirect(Redirect),
}

/// Where a 3xx response pointed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: u16,
    /// The `Location` header value, as sent by the server.
    pub location: String,
}
