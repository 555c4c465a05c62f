use std::fmt;

use sha2::{Digest, Sha256};

use super::SummaryLength;

/// Cache key derived from the upload bytes and the requested summary length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// SHA-256 over `bytes` followed by the selector's string form.
    pub fn compute(bytes: &[u8], summary_length: SummaryLength) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hasher.update(summary_length.as_str().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn cache_key(&self) -> String {
        format!("summary:{}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short content hash used in storage keys.
pub fn short_content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(&digest[..4])
}
