//! Authentication module for the P2PB2B API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Clock-based nonce generation for replay protection
//! - Payload encoding and HMAC-SHA256 signing for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use nonce::{ClockNonce, NonceProvider};
pub use signature::{encode_payload, sign_payload};
