//! # Terms Digests
//!
//! A contract's off-chain terms (the statement of work, rate agreement,
//! deliverable list) never enter the engine. What enters is a fixed-size
//! digest of them, stored verbatim on the contract record so either party
//! can later prove which terms the escrow was opened against.
//!
//! ## Invariant
//!
//! The engine stores and returns [`TermsHash`] bytes unmodified and never
//! interprets them. Hashing is offered as a convenience for hosting
//! layers; a digest produced elsewhere is equally acceptable via
//! [`TermsHash::from_bytes`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ValidationError;

/// A 32-byte digest of a contract's off-chain terms document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermsHash([u8; 32]);

impl TermsHash {
    /// Digest a terms document with SHA-256.
    pub fn of(terms: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(terms);
        Self(hasher.finalize().into())
    }

    /// Wrap an externally produced 32-byte digest.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a digest from a 64-character lowercase or uppercase hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTermsHash`] if the string is not
    /// exactly 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTermsHash(hex.to_string());
        if hex.len() != 64 {
            return Err(invalid());
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks_exact(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| invalid())?;
            bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Self(bytes))
    }

    /// The raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for TermsHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
