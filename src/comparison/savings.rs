//! Savings timelines and closed-form payoff quotes

use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, AmortizationSchedule};
use crate::error::LoanError;
use crate::loan::LoanTerms;

/// Cumulative savings at one point in the repayment timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    /// Payment number, 1-based
    pub month: u32,

    /// Current cumulative paid minus alternative cumulative paid through this
    /// month (positive = alternative is cheaper to date)
    pub cumulative_savings: f64,
}

/// Month-by-month cumulative savings of `alternative` versus `current`
///
/// Schedules of different lengths are aligned by period index and truncated
/// to the shorter of the two; months past the shorter schedule's end carry no
/// like-for-like comparison and are omitted.
pub fn savings_timeline(
    current: &AmortizationSchedule,
    alternative: &AmortizationSchedule,
) -> Vec<SavingsPoint> {
    let horizon = current.len().min(alternative.len());
    let current_cumulative = current.cumulative_paid();
    let alternative_cumulative = alternative.cumulative_paid();

    (0..horizon)
        .map(|i| SavingsPoint {
            month: i as u32 + 1,
            cumulative_savings: current_cumulative[i] - alternative_cumulative[i],
        })
        .collect()
}

/// Closed-form payoff estimate against a borrower's existing monthly payment
///
/// Totals come straight from `payment * n` rather than a schedule iteration,
/// so this is a quick quote, not a row-accurate schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffQuote {
    /// Computed fixed monthly payment for the quoted terms
    pub monthly_payment: f64,

    /// Total paid over the full term
    pub total_payment: f64,

    /// Interest component of the total
    pub total_interest: f64,

    /// The borrower's existing monthly payment
    pub current_payment: f64,

    /// What the borrower would save versus keeping the existing payment for
    /// the same number of months
    pub potential_savings: f64,
}

/// Quote a payoff under `terms` for a borrower currently paying
/// `current_payment` per month
pub fn payoff_quote(terms: &LoanTerms, current_payment: f64) -> Result<PayoffQuote, LoanError> {
    let engine = AmortizationEngine::default();
    let monthly_payment = engine.monthly_payment(terms)?;
    let n = engine.periods(terms) as f64;

    let total_payment = monthly_payment * n;
    let total_interest = total_payment - terms.principal;
    let potential_savings = current_payment * n - total_payment;

    Ok(PayoffQuote {
        monthly_payment,
        total_payment,
        total_interest,
        current_payment,
        potential_savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn schedule_for(principal: f64, rate: f64, years: f64) -> AmortizationSchedule {
        let engine = AmortizationEngine::default();
        let terms = LoanTerms::new(principal, rate, years).unwrap();
        engine.schedule(&terms).unwrap()
    }

    #[test]
    fn test_timeline_truncates_to_shorter_schedule() {
        let current = schedule_for(20_000.0, 7.0, 10.0); // 120 rows
        let alternative = schedule_for(20_000.0, 5.5, 7.0); // 84 rows

        let timeline = savings_timeline(&current, &alternative);

        assert_eq!(timeline.len(), 84);
        assert_eq!(timeline[0].month, 1);
        assert_eq!(timeline.last().unwrap().month, 84);
    }

    #[test]
    fn test_timeline_negative_when_alternative_pays_more_per_month() {
        // Shorter term means a larger monthly payment, so cumulative savings
        // run negative while both loans are active
        let current = schedule_for(20_000.0, 7.0, 10.0);
        let alternative = schedule_for(20_000.0, 5.5, 7.0);

        let timeline = savings_timeline(&current, &alternative);
        assert!(timeline.iter().all(|p| p.cumulative_savings < 0.0));
    }

    #[test]
    fn test_timeline_positive_for_lower_rate_same_term() {
        let current = schedule_for(20_000.0, 7.0, 10.0);
        let alternative = schedule_for(20_000.0, 4.0, 10.0);

        let timeline = savings_timeline(&current, &alternative);
        assert_eq!(timeline.len(), 120);
        assert!(timeline.iter().all(|p| p.cumulative_savings > 0.0));

        // Savings accumulate monotonically when the current payment is larger
        for pair in timeline.windows(2) {
            assert!(pair[1].cumulative_savings >= pair[0].cumulative_savings);
        }
    }

    #[test]
    fn test_payoff_quote_reference_case() {
        let terms = LoanTerms::new(20_000.0, 5.0, 10.0).unwrap();
        let quote = payoff_quote(&terms, 250.0).unwrap();

        assert_abs_diff_eq!(quote.monthly_payment, 212.13, epsilon = 0.01);
        assert_abs_diff_eq!(quote.total_payment, 25_455.57, epsilon = 1.0);
        assert_abs_diff_eq!(quote.total_interest, 5_455.57, epsilon = 1.0);
        // 250 * 120 - total
        assert_abs_diff_eq!(quote.potential_savings, 4_544.43, epsilon = 1.0);
    }

    #[test]
    fn test_payoff_quote_zero_rate() {
        let terms = LoanTerms::new(10_000.0, 0.0, 5.0).unwrap();
        let quote = payoff_quote(&terms, 200.0).unwrap();

        assert_abs_diff_eq!(quote.total_payment, 10_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(quote.total_interest, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(quote.potential_savings, 2_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_payoff_quote_validates_terms() {
        let terms = LoanTerms {
            principal: -5.0,
            annual_rate_pct: 5.0,
            term_years: 10.0,
        };
        assert!(payoff_quote(&terms, 100.0).is_err());
    }
}
