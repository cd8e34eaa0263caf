//! Lender refinance programs and eligibility-gated offer recommendation

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::loan::RefinanceOffer;

/// Minimum credit score for refinance eligibility
pub const MIN_CREDIT_SCORE: u32 = 600;

/// Minimum annual income for refinance eligibility
pub const MIN_ANNUAL_INCOME: f64 = 20_000.0;

/// A lender's refinance program: a spread over the prevailing market rate
/// and a fixed term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderProgram {
    /// Lender name
    pub lender: String,

    /// Lender's refinancing page
    pub url: String,

    /// Spread over the market rate, in percentage points (may be negative)
    pub rate_adjustment_pct: f64,

    /// Term offered by the program, in years
    pub term_years: f64,
}

impl LenderProgram {
    pub fn new(
        lender: impl Into<String>,
        url: impl Into<String>,
        rate_adjustment_pct: f64,
        term_years: f64,
    ) -> Self {
        Self {
            lender: lender.into(),
            url: url.into(),
            rate_adjustment_pct,
            term_years,
        }
    }
}

/// Built-in lender program catalog
pub fn default_programs() -> Vec<LenderProgram> {
    vec![
        LenderProgram::new(
            "SoFi",
            "https://www.sofi.com/refinance-student-loan/",
            0.0,
            10.0,
        ),
        LenderProgram::new(
            "Earnest",
            "https://www.earnest.com/student-loan-refinancing",
            0.2,
            15.0,
        ),
        LenderProgram::new(
            "LendKey",
            "https://www.lendkey.com/student-loan-refinancing/",
            -0.2,
            7.0,
        ),
    ]
}

/// Borrower attributes used for the eligibility screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Gross annual income in currency units
    pub annual_income: f64,

    /// FICO-style credit score
    pub credit_score: u32,
}

impl BorrowerProfile {
    pub fn new(annual_income: f64, credit_score: u32) -> Self {
        Self {
            annual_income,
            credit_score,
        }
    }

    /// Simple eligibility screen for refinancing
    pub fn is_eligible(&self) -> bool {
        self.credit_score >= MIN_CREDIT_SCORE && self.annual_income > MIN_ANNUAL_INCOME
    }
}

/// Build refinance offers for an eligible borrower from the lender catalog
///
/// Each program's spread is applied to `market_rate_pct` and rounded to two
/// decimals, floored at 0%. An ineligible borrower gets no offers.
pub fn recommend_offers(
    profile: &BorrowerProfile,
    market_rate_pct: f64,
    programs: &[LenderProgram],
) -> Vec<RefinanceOffer> {
    if !profile.is_eligible() {
        log::debug!(
            "borrower ineligible for refinancing (income {:.0}, score {})",
            profile.annual_income,
            profile.credit_score
        );
        return Vec::new();
    }

    programs
        .iter()
        .map(|program| {
            let rate = (market_rate_pct + program.rate_adjustment_pct).max(0.0);
            let rate = (rate * 100.0).round() / 100.0;
            RefinanceOffer::from_lender(program.lender.clone(), rate, program.term_years)
        })
        .collect()
}
