//! Error taxonomy for loan calculations
//!
//! All input validation failures surface synchronously through `LoanError`;
//! nothing is silently corrected. Zero-rate inputs are handled by an
//! alternate formula branch in the engine, not treated as errors.

use thiserror::Error;

/// Validation and calculation errors for the amortization and comparison engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// Principal must be strictly positive
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(f64),

    /// Annual rate below zero is rejected (0% is valid and handled explicitly)
    #[error("annual rate must be non-negative, got {0}%")]
    NegativeRate(f64),

    /// Term must yield at least one monthly period after rounding
    #[error("loan term of {0} years yields no monthly periods")]
    TermTooShort(f64),

    /// The supplied payment does not cover first-month interest, so the
    /// balance would grow without bound (negative amortization)
    #[error("monthly payment {payment:.2} does not cover monthly interest {interest:.2}")]
    PaymentBelowInterest { payment: f64, interest: f64 },

    /// A comparison requires at least one refinance offer
    #[error("at least one refinance offer is required")]
    NoOffers,
}
