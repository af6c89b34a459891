//! Nonce generation for P2PB2B API authentication.
//!
//! Every authenticated request carries a nonce derived from the wall clock in
//! nanoseconds. The exchange rejects replays of an already seen nonce.

use time::OffsetDateTime;

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next request.
    fn next_nonce(&self) -> i64;
}

/// A nonce provider reading the current time in nanoseconds since the Unix epoch.
///
/// Holds no state: two clients, or two tasks sharing one client, never
/// contend on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockNonce;

impl ClockNonce {
    /// Create a new clock nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for ClockNonce {
    fn next_nonce(&self) -> i64 {
        // i64 nanoseconds cover dates up to the year 2262.
        i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_nonce_is_nanoseconds() {
        let nonce = ClockNonce::new().next_nonce();
        // 2020-01-01T00:00:00Z in nanoseconds.
        assert!(nonce > 1_577_836_800_000_000_000);
    }

    #[test]
    fn test_clock_nonce_does_not_go_backwards() {
        let provider = ClockNonce::new();
        let first = provider.next_nonce();
        let second = provider.next_nonce();
        assert!(second >= first);
    }
}
