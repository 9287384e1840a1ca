//! Probe fingerprints.

use std::fmt;

use rand::Rng;

/// Length of a probe fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 32;

/// Random correlation token embedded in a probe frame's payload so the
/// sender can recognize its own frame coming back.
///
/// Not a secret and not globally unique: 32 random bytes make a collision
/// between concurrently running detectors negligible, which is all the
/// matching predicate needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Generate a fresh fingerprint from thread-local randomness.
    /// Never blocks.
    pub fn generate() -> Self {
        let mut bytes = [0u8; FINGERPRINT_LEN];
        rand::thread_rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Exact byte-for-byte comparison against a received payload.
    ///
    /// The payload may carry trailing padding; the first
    /// [`FINGERPRINT_LEN`] bytes are significant and all must match.
    pub fn matches(&self, payload: &[u8]) -> bool {
        payload.len() >= FINGERPRINT_LEN && payload[..FINGERPRINT_LEN] == self.0
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
