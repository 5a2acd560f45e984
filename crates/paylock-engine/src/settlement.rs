//! # Settlement and Fee Math
//!
//! Pure split computation for the two fund-moving transitions. The fee is
//! basis-points based with a 10000 denominator and truncates toward zero;
//! the truncation remainder accrues to whichever party receives the
//! remainder share — the client refund in dispute resolution, nobody in
//! the direct-claim path (the freelancer receives exactly
//! `amount - fee`).
//!
//! ## Invariant
//!
//! Every split sums back to the contract amount exactly:
//! `fee + freelancer + refund == amount`, with no rounding leakage.

use paylock_core::{BasisPoints, TokenAmount, FEE_DENOMINATOR};

use crate::error::EscrowError;

/// The platform fee for a contract amount: `floor(amount * bps / 10000)`.
///
/// Computed by splitting the amount at the denominator radix
/// (`q * bps + (r * bps) / 10000` for `amount = q * 10000 + r`), which
/// equals the widened floor division for every `u128` amount and cannot
/// overflow because the rate never exceeds the denominator.
pub fn fee_amount(amount: TokenAmount, rate: BasisPoints) -> TokenAmount {
    let denominator = u128::from(FEE_DENOMINATOR);
    let bps = u128::from(rate.value());
    let quotient = amount.base_units() / denominator;
    let remainder = amount.base_units() % denominator;
    TokenAmount::new(quotient * bps + remainder * bps / denominator)
}

/// The fund split of a direct freelancer claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimSplit {
    /// The platform fee, paid to the dev wallet.
    pub fee: TokenAmount,
    /// The remainder, paid to the freelancer.
    pub freelancer: TokenAmount,
}

/// Compute the claim-path split for a contract amount under its frozen
/// fee rate.
pub fn claim_split(amount: TokenAmount, rate: BasisPoints) -> ClaimSplit {
    let fee = fee_amount(amount, rate);
    // rate <= denominator bounds fee <= amount.
    let freelancer = TokenAmount::new(amount.base_units() - fee.base_units());
    ClaimSplit { fee, freelancer }
}

/// The three-way fund split of a dispute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisputeSplit {
    /// The platform fee, paid to the dev wallet. Extracted even on
    /// dispute resolution.
    pub fee: TokenAmount,
    /// The share awarded to the freelancer by the resolver.
    pub freelancer: TokenAmount,
    /// The remainder refunded to the client, including any truncation
    /// remainder from the fee division.
    pub client_refund: TokenAmount,
}

/// Compute the dispute-path split for a resolver-chosen freelancer share.
///
/// # Errors
///
/// Returns [`EscrowError::FreelancerAmountTooMuch`] if
/// `freelancer_amount + fee` exceeds the contract amount.
pub fn dispute_split(
    amount: TokenAmount,
    rate: BasisPoints,
    freelancer_amount: TokenAmount,
) -> Result<DisputeSplit, EscrowError> {
    let fee = fee_amount(amount, rate);
    let available = TokenAmount::new(amount.base_units() - fee.base_units());
    let client_refund =
        available
            .checked_sub(freelancer_amount)
            .ok_or(EscrowError::FreelancerAmountTooMuch {
                requested: freelancer_amount,
                available,
            })?;
    Ok(DisputeSplit {
        fee,
        freelancer: freelancer_amount,
        client_refund,
    })
}
