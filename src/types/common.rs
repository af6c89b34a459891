//! Common domain types for the P2PB2B API.

use serde::{Deserialize, Deserializer, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order type as reported by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

/// The `message` field of a response.
///
/// Successful responses carry an empty string; failures carry either a
/// string or nested arrays of strings (`[["Key not provided."]]`). Any other
/// JSON value, including `null` and per-field maps, is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    /// A plain message
    Text(String),
    /// A (possibly nested) list of messages
    List(Vec<serde_json::Value>),
    /// Any other shape
    Other(serde_json::Value),
}

impl Default for ApiMessage {
    fn default() -> Self {
        ApiMessage::Text(String::new())
    }
}

impl ApiMessage {
    /// Collect every non-empty string in the message, depth first.
    pub fn flatten(&self) -> Vec<String> {
        fn walk(value: &serde_json::Value, out: &mut Vec<String>) {
            match value {
                serde_json::Value::String(s) if !s.is_empty() => out.push(s.clone()),
                serde_json::Value::Array(items) => items.iter().for_each(|v| walk(v, out)),
                serde_json::Value::Object(fields) => {
                    for (key, v) in fields {
                        let mut inner = Vec::new();
                        walk(v, &mut inner);
                        out.extend(inner.into_iter().map(|m| format!("{key}: {m}")));
                    }
                }
                serde_json::Value::Null | serde_json::Value::String(_) => {}
                other => out.push(other.to_string()),
            }
        }

        let mut out = Vec::new();
        match self {
            ApiMessage::Text(s) if !s.is_empty() => out.push(s.clone()),
            ApiMessage::Text(_) => {}
            ApiMessage::List(items) => items.iter().for_each(|v| walk(v, &mut out)),
            ApiMessage::Other(value) => walk(value, &mut out),
        }
        out
    }

    /// Whether the message carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.flatten().is_empty()
    }
}

/// Response envelope shared by every P2PB2B endpoint.
///
/// List endpoints additionally report `cache_time` and `current_time`; they
/// are omitted on re-encode when the server did not send them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Server message, empty on success; `None` when the field was absent
    #[serde(
        default,
        deserialize_with = "present_message",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<ApiMessage>,
    /// Endpoint-specific payload
    pub result: T,
    /// Server-side cache timestamp (list endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<f64>,
    /// Server clock at response time (list endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<f64>,
}

// A present `null` stays `Some(Other(Null))` so it re-encodes unchanged.
fn present_message<'de, D>(deserializer: D) -> Result<Option<ApiMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    ApiMessage::deserialize(deserializer).map(Some)
}

/// The status part of a response, decoded before the payload.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResponseStatus {
    pub success: bool,
    #[serde(default)]
    pub message: ApiMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), r#""buy""#);
        let side: Side = serde_json::from_str(r#""sell""#).unwrap();
        assert_eq!(side, Side::Sell);
        assert_eq!(Side::Sell.to_string(), "sell");
    }

    #[test]
    fn test_order_type_serialization() {
        let kind: OrderType = serde_json::from_str(r#""market""#).unwrap();
        assert_eq!(kind, OrderType::Market);
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), r#""limit""#);
    }

    #[test]
    fn test_message_shapes() {
        let text: ApiMessage = serde_json::from_str(r#""""#).unwrap();
        assert!(text.is_empty());
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""""#);

        let nested: ApiMessage = serde_json::from_str(r#"[["Key not provided."]]"#).unwrap();
        assert_eq!(nested.flatten(), vec!["Key not provided.".to_string()]);
    }

    #[test]
    fn test_response_without_list_timestamps() {
        let json = r#"{"success":true,"message":"","result":["ETH_BTC"]}"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert!(response.cache_time.is_none());
        assert_eq!(serde_json::to_string(&response).unwrap(), json);
    }

    #[test]
    fn test_response_missing_message_defaults() {
        let json = r#"{"success":true,"result":[]}"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert!(response.message.is_none());
        assert_eq!(serde_json::to_string(&response).unwrap(), json);
    }

    #[test]
    fn test_null_and_object_messages() {
        let json = r#"{"success":true,"message":null,"result":[]}"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        let message = response.message.as_ref().unwrap();
        assert!(message.is_empty());
        assert_eq!(serde_json::to_string(&response).unwrap(), json);

        let fields: ApiMessage =
            serde_json::from_str(r#"{"amount":["Amount too small"],"price":"Invalid"}"#).unwrap();
        assert_eq!(
            fields.flatten(),
            vec!["amount: Amount too small".to_string(), "price: Invalid".to_string()]
        );
    }
}
