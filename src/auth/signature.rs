//! HMAC-SHA256 payload signing for P2PB2B API authentication.
//!
//! Authenticated requests carry two headers derived from the raw JSON body:
//! ```text
//! X-TXC-PAYLOAD   = base64(body)
//! X-TXC-SIGNATURE = hex(HMAC-SHA256(body, api_secret))
//! ```
//!
//! Both are computed over the exact bytes sent, so the server can recompute
//! them over what it received.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::P2bError;

type HmacSha256 = Hmac<Sha256>;

/// Encode a request body for the `X-TXC-PAYLOAD` header.
pub fn encode_payload(body: &[u8]) -> String {
    BASE64.encode(body)
}

/// Sign a request body for the `X-TXC-SIGNATURE` header.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `body` - The raw JSON body, before base64 encoding
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 of `body`, keyed by the API secret.
///
/// # Example
///
/// ```rust
/// use p2pb2b_api_client::auth::{Credentials, sign_payload};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_payload(&credentials, br#"{"nonce":1,"request":"/api/v1/orders"}"#)?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_payload(credentials: &Credentials, body: &[u8]) -> Result<String, P2bError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| P2bError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(body);
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_known_vector() {
        // RFC 4231 test case 2.
        let credentials = Credentials::new("key", "Jefe");
        let signature = sign_payload(&credentials, b"what do ya want for nothing?").unwrap();
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_signature_changes_with_body() {
        let credentials = Credentials::new("key", "my_secret");

        let sig1 = sign_payload(&credentials, br#"{"nonce":1}"#).unwrap();
        let sig2 = sign_payload(&credentials, br#"{"nonce":2}"#).unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let body = br#"{"nonce":1,"request":"/api/v1/account/balances"}"#;

        let sig1 = sign_payload(&Credentials::new("key", "secret_a"), body).unwrap();
        let sig2 = sign_payload(&Credentials::new("key", "secret_b"), body).unwrap();

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_payload_is_standard_base64() {
        assert_eq!(encode_payload(b"{}"), "e30=");
        assert_eq!(BASE64.decode(encode_payload(b"hello")).unwrap(), b"hello");
    }
}
