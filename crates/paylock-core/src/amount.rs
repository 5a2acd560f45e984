//! # Monetary Amounts and Fee Rates
//!
//! [`TokenAmount`] is the single monetary type of the engine: a `u128`
//! count of token base units (the smallest indivisible denomination of
//! the payment token, e.g. 10^-18 of a whole token). Floats are never
//! used for money; all arithmetic is checked.
//!
//! [`BasisPoints`] is the fee-rate type, validated at construction so a
//! rate above 100% cannot exist anywhere downstream.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The basis-point denominator: 10000 bps = 100%.
pub const FEE_DENOMINATOR: u32 = 10_000;

/// A quantity of payment-token base units.
///
/// Base units are the smallest indivisible denomination of the external
/// token. A "whole" token is `10^decimals` base units; the engine itself
/// never needs the decimal count except when hosting layers build
/// human-denominated amounts via [`TokenAmount::from_whole`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    /// The zero amount.
    pub const ZERO: TokenAmount = TokenAmount(0);

    /// Create an amount from a raw count of base units.
    pub const fn new(base_units: u128) -> Self {
        Self(base_units)
    }

    /// Build an amount from whole tokens under the given decimal count.
    ///
    /// Returns `None` if `10^decimals` or the product overflows `u128`.
    pub fn from_whole(whole: u64, decimals: u8) -> Option<Self> {
        let unit = 10u128.checked_pow(u32::from(decimals))?;
        u128::from(whole).checked_mul(unit).map(Self)
    }

    /// The raw count of base units.
    pub const fn base_units(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` if `other` exceeds `self`.
    pub fn checked_sub(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<u128> for TokenAmount {
    fn from(base_units: u128) -> Self {
        Self(base_units)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fee rate in basis points (10000 bps = 100%).
///
/// Validated at construction: rates above [`FEE_DENOMINATOR`] are
/// rejected, so settlement math can rely on `fee <= amount` without
/// re-checking the rate. Deserialization routes through
/// [`BasisPoints::new`] so invalid rates are rejected at the boundary,
/// not silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BasisPoints(u32);

impl<'de> Deserialize<'de> for BasisPoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl BasisPoints {
    /// Create a fee rate, rejecting values above the denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FeeAboveDenominator`] if `bps > 10000`.
    pub fn new(bps: u32) -> Result<Self, ValidationError> {
        if bps > FEE_DENOMINATOR {
            return Err(ValidationError::FeeAboveDenominator { bps });
        }
        Ok(Self(bps))
    }

    /// Create a fee rate from a literal known to be in range.
    ///
    /// Intended for constants, where the range check surfaces at compile
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `bps > 10000`.
    pub const fn from_literal(bps: u32) -> Self {
        assert!(bps <= FEE_DENOMINATOR, "fee rate exceeds the 10000 bps denominator");
        Self(bps)
    }

    /// The rate as a raw basis-point count.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bps", self.0)
    }
}
