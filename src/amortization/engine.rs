//! Core amortization engine for monthly payment and schedule calculations

use serde::{Deserialize, Serialize};

use super::schedule::{round_cents, AmortizationSchedule, PaymentRow};
use crate::error::LoanError;
use crate::loan::LoanTerms;

/// Policy for converting a fractional term in years to whole monthly periods
///
/// One policy applies uniformly everywhere periods are computed, so the
/// payment formula and the schedule loop always agree on the period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodRounding {
    /// Drop any partial month: 10.5 years -> 126 periods, 10.99 -> 131.
    /// This is the default.
    Truncate,
    /// Round to the nearest whole month
    Nearest,
    /// Count any partial month as a full period
    Ceil,
}

impl PeriodRounding {
    /// Number of whole monthly periods for a term in years
    pub fn periods(&self, term_years: f64) -> u32 {
        let months = term_years * 12.0;
        let months = match self {
            PeriodRounding::Truncate => months.trunc(),
            PeriodRounding::Nearest => months.round(),
            PeriodRounding::Ceil => months.ceil(),
        };
        months.max(0.0) as u32
    }
}

impl Default for PeriodRounding {
    fn default() -> Self {
        PeriodRounding::Truncate
    }
}

/// Configuration for an amortization run
#[derive(Debug, Clone, Default)]
pub struct AmortizationConfig {
    /// How fractional years convert to monthly periods
    pub period_rounding: PeriodRounding,
}

/// Main amortization engine
///
/// Pure and deterministic: identical inputs always produce identical
/// schedules. The engine owns nothing beyond its configuration, so one
/// instance can serve any number of calculations.
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: AmortizationConfig,
}

impl AmortizationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: AmortizationConfig) -> Self {
        Self { config }
    }

    /// Number of monthly periods for the given terms
    pub fn periods(&self, terms: &LoanTerms) -> u32 {
        self.config.period_rounding.periods(terms.term_years)
    }

    /// Fixed monthly payment for the given terms
    ///
    /// Uses the standard amortization formula
    /// `P * r * (1+r)^n / ((1+r)^n - 1)`; a zero rate falls back to simple
    /// division to avoid the zero denominator.
    pub fn monthly_payment(&self, terms: &LoanTerms) -> Result<f64, LoanError> {
        terms.validate()?;

        let n = self.periods(terms);
        if n == 0 {
            return Err(LoanError::TermTooShort(terms.term_years));
        }

        let r = terms.monthly_rate();
        if r == 0.0 {
            return Ok(terms.principal / n as f64);
        }

        let growth = (1.0 + r).powi(n as i32);
        Ok(terms.principal * r * growth / (growth - 1.0))
    }

    /// Full amortization schedule with the payment computed from the terms
    pub fn schedule(&self, terms: &LoanTerms) -> Result<AmortizationSchedule, LoanError> {
        let payment = self.monthly_payment(terms)?;
        self.schedule_with_payment(terms, payment)
    }

    /// Full amortization schedule using an explicit monthly payment
    ///
    /// The payment must at least cover one month of interest on the full
    /// principal; anything less would grow the balance every month instead of
    /// retiring it, so it is rejected before any row is produced.
    pub fn schedule_with_payment(
        &self,
        terms: &LoanTerms,
        monthly_payment: f64,
    ) -> Result<AmortizationSchedule, LoanError> {
        terms.validate()?;

        let n = self.periods(terms);
        if n == 0 {
            return Err(LoanError::TermTooShort(terms.term_years));
        }

        let r = terms.monthly_rate();
        let first_interest = terms.principal * r;
        if monthly_payment <= first_interest || !monthly_payment.is_finite() {
            return Err(LoanError::PaymentBelowInterest {
                payment: monthly_payment,
                interest: first_interest,
            });
        }

        let mut schedule = AmortizationSchedule::new(monthly_payment);
        // Balance iterates unrounded; only the stored rows are rounded
        let mut balance = terms.principal;

        for month in 1..=n {
            let interest = balance * r;
            let principal_paid = monthly_payment - interest;
            balance = (balance - principal_paid).max(0.0);

            schedule.add_row(PaymentRow {
                month,
                payment: round_cents(monthly_payment),
                principal_paid: round_cents(principal_paid),
                interest_paid: round_cents(interest),
                remaining_balance: round_cents(balance),
            });

            // Final partial payment retires the loan before period n
            if balance == 0.0 {
                break;
            }
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn engine() -> AmortizationEngine {
        AmortizationEngine::default()
    }

    #[test]
    fn test_period_rounding_truncates_partial_months() {
        let truncate = PeriodRounding::Truncate;
        assert_eq!(truncate.periods(10.0), 120);
        assert_eq!(truncate.periods(10.5), 126);
        assert_eq!(truncate.periods(10.99), 131);

        assert_eq!(PeriodRounding::Nearest.periods(10.99), 132);
        assert_eq!(PeriodRounding::Ceil.periods(10.51), 127);
    }

    #[test]
    fn test_monthly_payment_reference_case() {
        // 20k at 5% over 10 years
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        let payment = engine().monthly_payment(&terms).unwrap();

        assert_abs_diff_eq!(payment, 212.13, epsilon = 0.01);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        let terms = LoanTerms::new(10_000.0, 0.0, 5.0).unwrap();
        let payment = engine().monthly_payment(&terms).unwrap();

        assert_relative_eq!(payment, 10_000.0 / 60.0, epsilon = 1e-9);
        assert_eq!(round_cents(payment), 166.67);
    }

    #[test]
    fn test_monthly_payment_rejects_sub_month_term() {
        let terms = LoanTerms {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            term_years: 0.05,
        };
        assert!(matches!(
            engine().monthly_payment(&terms),
            Err(LoanError::TermTooShort(_))
        ));
    }

    #[test]
    fn test_schedule_reference_case() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        let schedule = engine().schedule(&terms).unwrap();

        assert_eq!(schedule.len(), 120);
        assert_eq!(schedule.final_balance(), 0.0);

        let summary = schedule.summary();
        // Per-row rounding drift tolerance: 0.01 per row
        assert_abs_diff_eq!(summary.total_interest, 5_455.56, epsilon = 1.20);
        assert_abs_diff_eq!(summary.total_principal, 20_000.0, epsilon = 1.20);
    }

    #[test]
    fn test_schedule_zero_rate() {
        let terms = LoanTerms::new(10_000.0, 0.0, 5.0).unwrap();
        let schedule = engine().schedule(&terms).unwrap();

        assert_eq!(schedule.len(), 60);
        for row in &schedule.rows {
            assert_eq!(row.interest_paid, 0.0);
            assert_eq!(row.principal_paid, row.payment);
        }
        assert_eq!(schedule.final_balance(), 0.0);
    }

    #[test]
    fn test_balance_non_increasing() {
        let terms = LoanTerms::new(35_000.0, 6.8, 10.0).unwrap();
        let schedule = engine().schedule(&terms).unwrap();

        for pair in schedule.rows.windows(2) {
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_months_are_contiguous() {
        let terms = LoanTerms::new(15_000.0, 4.5, 7.0).unwrap();
        let schedule = engine().schedule(&terms).unwrap();

        for (i, row) in schedule.rows.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let terms = LoanTerms::new(27_500.0, 5.9, 12.0).unwrap();
        let first = engine().schedule(&terms).unwrap();
        let second = engine().schedule(&terms).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overpayment_terminates_early() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        // Roughly double the required payment retires the loan in under half
        // the term, with a final partial payment
        let schedule = engine().schedule_with_payment(&terms, 425.0).unwrap();

        assert!(schedule.len() < 120);
        assert_eq!(schedule.final_balance(), 0.0);

        let summary = schedule.summary();
        let expected_rows = schedule.len() as f64;
        assert_abs_diff_eq!(
            summary.total_principal,
            20_000.0,
            // Last row records the full payment even though less was owed
            epsilon = 425.0 + 0.01 * expected_rows
        );
    }

    #[test]
    fn test_rejects_payment_below_interest() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        // First month interest is 83.33; 50 would negatively amortize
        let result = engine().schedule_with_payment(&terms, 50.0);

        assert!(matches!(
            result,
            Err(LoanError::PaymentBelowInterest { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_payment_at_zero_rate() {
        let terms = LoanTerms::new(10_000.0, 0.0, 5.0).unwrap();
        let result = engine().schedule_with_payment(&terms, 0.0);

        assert!(matches!(
            result,
            Err(LoanError::PaymentBelowInterest { .. })
        ));
    }

    #[test]
    fn test_fractional_term_schedule_length() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.5).unwrap();
        let schedule = engine().schedule(&terms).unwrap();

        // Truncation policy: exactly 126 periods, never 127
        assert!(schedule.len() <= 126);
        assert!(schedule.len() >= 125);
        assert_eq!(schedule.final_balance(), 0.0);
    }
}
