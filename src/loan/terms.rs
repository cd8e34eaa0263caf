//! Loan terms and refinance offer data structures

use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// Immutable terms of a single loan
///
/// `annual_rate_pct` is expressed in percent units (5.0 = 5% APR), matching
/// how rates are quoted by lenders and entered by borrowers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Outstanding principal in currency units
    pub principal: f64,

    /// Nominal annual interest rate, percent (0-100 meaningful range)
    pub annual_rate_pct: f64,

    /// Term in years; fractional values allowed (e.g. 10.5)
    pub term_years: f64,
}

impl LoanTerms {
    /// Create new loan terms, failing validation up front
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: f64) -> Result<Self, LoanError> {
        let terms = Self {
            principal,
            annual_rate_pct,
            term_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Check the input constraints: positive principal, non-negative rate,
    /// positive term
    pub fn validate(&self) -> Result<(), LoanError> {
        if self.principal <= 0.0 || !self.principal.is_finite() {
            return Err(LoanError::NonPositivePrincipal(self.principal));
        }
        if self.annual_rate_pct < 0.0 || !self.annual_rate_pct.is_finite() {
            return Err(LoanError::NegativeRate(self.annual_rate_pct));
        }
        if self.term_years <= 0.0 || !self.term_years.is_finite() {
            return Err(LoanError::TermTooShort(self.term_years));
        }
        Ok(())
    }

    /// Monthly periodic rate: annual percent / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Terms for refinancing this loan under the given offer
    ///
    /// Refinance offers carry no principal of their own: the new loan always
    /// reuses the current outstanding principal; only rate and term change.
    pub fn refinanced(&self, offer: &RefinanceOffer) -> Self {
        Self {
            principal: self.principal,
            annual_rate_pct: offer.annual_rate_pct,
            term_years: offer.term_years,
        }
    }
}

/// A refinance offer: a new rate and term applied to the current principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceOffer {
    /// Originating lender, when known
    pub lender: Option<String>,

    /// Offered annual rate, percent
    pub annual_rate_pct: f64,

    /// Offered term in years
    pub term_years: f64,
}

impl RefinanceOffer {
    /// An anonymous offer (no lender attribution)
    pub fn new(annual_rate_pct: f64, term_years: f64) -> Self {
        Self {
            lender: None,
            annual_rate_pct,
            term_years,
        }
    }

    /// An offer attributed to a named lender
    pub fn from_lender(lender: impl Into<String>, annual_rate_pct: f64, term_years: f64) -> Self {
        Self {
            lender: Some(lender.into()),
            annual_rate_pct,
            term_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        assert_eq!(terms.principal, 20_000.0);
        assert!((terms.monthly_rate() - 0.05 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(LoanTerms::new(10_000.0, 0.0, 5.0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        assert_eq!(
            LoanTerms::new(0.0, 5.0, 10.0),
            Err(LoanError::NonPositivePrincipal(0.0))
        );
        assert!(matches!(
            LoanTerms::new(-500.0, 5.0, 10.0),
            Err(LoanError::NonPositivePrincipal(_))
        ));
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert!(matches!(
            LoanTerms::new(10_000.0, -0.5, 10.0),
            Err(LoanError::NegativeRate(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_term() {
        assert!(matches!(
            LoanTerms::new(10_000.0, 5.0, 0.0),
            Err(LoanError::TermTooShort(_))
        ));
    }

    #[test]
    fn test_refinanced_keeps_principal() {
        let current = LoanTerms::new(20_000.0, 7.0, 10.0).unwrap();
        let offer = RefinanceOffer::from_lender("SoFi", 4.0, 15.0);
        let refi = current.refinanced(&offer);

        assert_eq!(refi.principal, 20_000.0);
        assert_eq!(refi.annual_rate_pct, 4.0);
        assert_eq!(refi.term_years, 15.0);
    }
}
