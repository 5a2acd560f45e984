//! # Validation Errors
//!
//! Construction-time validation failures for the domain primitives in this
//! crate. Built with `thiserror`; each variant carries the rejected input
//! so misconfiguration is diagnosable without log spelunking.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Fee rate exceeds the 10000 bps (100%) denominator.
    #[error("invalid fee rate: {bps} bps exceeds the 10000 bps denominator")]
    FeeAboveDenominator {
        /// The rejected rate.
        bps: u32,
    },

    /// Terms digest string is not 64 hex characters.
    #[error("invalid terms hash: \"{0}\" (expected 64 hex characters)")]
    InvalidTermsHash(String),
}
