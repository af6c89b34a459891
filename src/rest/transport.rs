//! HTTP transport primitives: authentication headers, header merging and
//! the normalized response handed back to endpoint operations.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use crate::error::P2bError;

/// HTTP header carrying the account API key.
pub const HEADER_API_KEY: &str = "X-TXC-APIKEY";
/// HTTP header carrying the base64-encoded request body.
pub const HEADER_PAYLOAD: &str = "X-TXC-PAYLOAD";
/// HTTP header carrying the hex HMAC-SHA256 of the request body.
pub const HEADER_SIGNATURE: &str = "X-TXC-SIGNATURE";

/// A response as returned by the transport, before any decoding.
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self {
            status: inner.status(),
            headers: inner.headers().clone(),
            inner,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The status line, e.g. `"200 OK"`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Read the full body.
    pub async fn body(self) -> Result<Vec<u8>, P2bError> {
        Ok(self.inner.bytes().await?.to_vec())
    }
}

/// Merge `second` into `first`, keeping any header `first` already holds.
///
/// Header names compare case-insensitively, so a caller-supplied
/// `content-type` shadows the default `Content-Type`.
pub fn merge_headers(mut first: HeaderMap, second: HeaderMap) -> HeaderMap {
    let mut current = None;
    for (name, value) in second {
        // `None` names continue the previous header's values.
        if let Some(name) = name {
            current = if first.contains_key(&name) {
                None
            } else {
                Some(name)
            };
        }
        if let Some(name) = &current {
            first.append(name.clone(), value);
        }
    }
    first
}

/// Fail unless `status` is one of `expected`.
pub fn check_http_status(
    status: StatusCode,
    expected: &[StatusCode],
    body: &[u8],
) -> Result<(), P2bError> {
    if expected.contains(&status) {
        return Ok(());
    }
    tracing::warn!(
        status = status.as_u16(),
        expected = ?expected,
        "unexpected HTTP status from P2PB2B"
    );
    Err(P2bError::unexpected_status(expected, status, body))
}
