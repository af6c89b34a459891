//! The nonce/path envelope merged into every authenticated request body.

use serde::{Deserialize, Serialize};

/// Replay-protection fields added to every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Nanoseconds since the Unix epoch at call time
    pub nonce: i64,
    /// The endpoint path, identical to the path of the request URL
    pub request: String,
}

impl Envelope {
    /// Create an envelope for `path` with the given nonce.
    pub fn new(nonce: i64, path: impl Into<String>) -> Self {
        Self {
            nonce,
            request: path.into(),
        }
    }
}

/// An endpoint request with its [`Envelope`] flattened into the same JSON object.
///
/// ```rust
/// use p2pb2b_api_client::types::{Envelope, Enveloped};
/// use p2pb2b_api_client::rest::account::CurrencyBalanceRequest;
///
/// let request = CurrencyBalanceRequest::new("ETH");
/// let body = Enveloped::new(&request, Envelope::new(42, "/api/v1/account/balance"));
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["currency"], "ETH");
/// assert_eq!(json["nonce"], 42);
/// assert_eq!(json["request"], "/api/v1/account/balance");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enveloped<T> {
    /// Endpoint-specific fields
    #[serde(flatten)]
    pub params: T,
    /// Nonce and path
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl<T> Enveloped<T> {
    /// Wrap `params` with an envelope.
    pub fn new(params: T, envelope: Envelope) -> Self {
        Self { params, envelope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Params {
        market: String,
    }

    #[test]
    fn test_envelope_is_flattened() {
        let params = Params {
            market: "ETH_BTC".into(),
        };
        let body = Enveloped::new(&params, Envelope::new(7, "/api/v1/orders"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"market": "ETH_BTC", "nonce": 7, "request": "/api/v1/orders"})
        );
    }

    #[test]
    fn test_envelope_parses_back() {
        let json = r#"{"market":"ETH_BTC","nonce":7,"request":"/api/v1/orders"}"#;
        let parsed: Enveloped<Params> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.params.market, "ETH_BTC");
        assert_eq!(parsed.envelope, Envelope::new(7, "/api/v1/orders"));
    }

    #[test]
    fn test_empty_params() {
        #[derive(Serialize)]
        struct Empty {}
        let body = Enveloped::new(Empty {}, Envelope::new(1, "/api/v1/account/balances"));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"nonce":1,"request":"/api/v1/account/balances"}"#
        );
    }
}
