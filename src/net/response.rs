//! Cached HTTP response model.
//!
//! A [`Response`] is what the repository client keeps around for a fetched
//! resource: the decoded JSON body, the normalized response headers, and the
//! status code. It is built once and never updated; a fresher response
//! replaces it.
//!
//! ## Cache record
//! Only the body and the normalized headers are persisted:
//!
//! ```json
//! { "body": <any JSON value>, "headers": { "content-type": ["application/json"] } }
//! ```
//!
//! The status code and the raw header lines are **not** part of the record,
//! so a response read back from the cache always reports `200`.
//!
//! ## Example
//! ```rust
//! use flex_response::net::Response;
//! use serde_json::json;
//!
//! let resp = Response::new(json!({"recipes": []}), ["HTTP/1.1 200 OK", "ETag: \"abc\""], 200);
//! assert_eq!(resp.header("etag"), "\"abc\"");
//!
//! let cached = Response::from_json(resp.to_json()).unwrap();
//! assert_eq!(cached.body(), resp.body());
//! ```
use serde::Serialize;
use serde_json::Value;

use crate::config::CacheConfig;
use crate::errors::ResponseError;
use crate::net::headers::{self, Headers};

/// Status code reported when none was given, including for every response
/// read back from the cache.
pub const DEFAULT_STATUS_CODE: u16 = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Decoded response body.
    body: Value,

    /// Raw header lines as supplied by the caller.
    #[serde(skip)]
    original_headers: Vec<String>,

    /// Lowercase header name to values, parsed from `original_headers`.
    headers: Headers,

    #[serde(skip)]
    status: u16,
}

impl Response {
    /// Creates a response from a body, a raw header-line transcript and a status code.
    ///
    /// Header lines are parsed right away (see [`headers::parse_header_lines`]);
    /// lines that do not parse are dropped, never rejected.
    pub fn new<I, S>(body: Value, headers: I, code: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let original_headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let headers = headers::parse_header_lines(&original_headers);

        Self {
            body,
            original_headers,
            headers,
            status: code,
        }
    }

    /// Creates a response without headers and with the default status code.
    pub fn from_body(body: Value) -> Self {
        Self::new(body, Vec::<String>::new(), DEFAULT_STATUS_CODE)
    }

    /// Creates a response from an `http` crate response whose body is already decoded.
    pub fn from_http(response: http::Response<Value>) -> Self {
        let (parts, body) = response.into_parts();
        let lines = headers::transcript(parts.version, parts.status, &parts.headers);

        Self::new(body, lines, parts.status.as_u16())
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Returns the first value of header `name`, or an empty string when absent.
    pub fn header(&self, name: &str) -> &str {
        self.headers(name)
            .and_then(|values| values.first())
            .map_or("", String::as_str)
    }

    /// Returns all values of header `name`, or `None` when absent.
    pub fn headers(&self, name: &str) -> Option<&[String]> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    pub fn header_map(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn original_headers(&self) -> &[String] {
        &self.original_headers
    }

    /// Returns the cache record for this response.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "body": self.body,
            "headers": self.headers,
        })
    }

    /// Returns the cache record as pretty-printed JSON text.
    pub fn to_json_string(&self) -> Result<String, ResponseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds a response from a cache record.
    ///
    /// # Errors
    /// [`ResponseError::StaleCacheFormat`] when the record does not have the
    /// `{body, headers}` layout.
    pub fn from_json(json: Value) -> Result<Self, ResponseError> {
        Self::from_json_with(json, &CacheConfig::default())
    }

    /// Like [`from_json`](Self::from_json), naming `config.cache_dir` in the error.
    pub fn from_json_with(json: Value, config: &CacheConfig) -> Result<Self, ResponseError> {
        let stale = || {
            log::warn!("Stale cache record found in {}", config.cache_dir.display());
            ResponseError::StaleCacheFormat {
                cache_dir: config.cache_dir.clone(),
            }
        };

        let Value::Object(mut record) = json else {
            return Err(stale());
        };

        let (Some(body), Some(headers)) = (record.remove("body"), record.remove("headers")) else {
            return Err(stale());
        };

        let headers = decode_headers(headers).ok_or_else(stale)?;
        log::debug!("Decoded cache record with {} header name(s)", headers.len());

        let mut response = Self::from_body(body);
        response.headers = headers;

        Ok(response)
    }

    /// Parses cache record text and rebuilds the response from it.
    pub fn from_json_str(json: &str) -> Result<Self, ResponseError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }
}

impl TryFrom<Value> for Response {
    type Error = ResponseError;

    fn try_from(json: Value) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

/// Decodes the stored header map. An empty JSON array counts as an empty
/// map, since that is how older writers stored a response without headers.
fn decode_headers(headers: Value) -> Option<Headers> {
    match headers {
        Value::Array(items) if items.is_empty() => Some(Headers::new()),
        other => serde_json::from_value(other).ok(),
    }
}
