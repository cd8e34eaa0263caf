//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

/// Round a currency amount to whole cents
///
/// Applied to every figure stored in a `PaymentRow`. Summaries are computed
/// from the rounded rows, so aggregate totals may drift from the unrounded
/// values by a few cents over a long schedule; that drift is accepted rather
/// than retroactively adjusted.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A single row of the amortization schedule for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// Payment number, 1-based and contiguous
    pub month: u32,

    /// Total payment for the month
    pub payment: f64,

    /// Portion of the payment applied to principal
    pub principal_paid: f64,

    /// Portion of the payment covering accrued interest
    pub interest_paid: f64,

    /// Balance outstanding after this payment, floored at zero
    pub remaining_balance: f64,
}

/// Complete amortization schedule for a single loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Fixed monthly payment (unrounded; rows store the rounded figure)
    pub monthly_payment: f64,

    /// Monthly payment rows in chronological order
    pub rows: Vec<PaymentRow>,
}

impl AmortizationSchedule {
    pub fn new(monthly_payment: f64) -> Self {
        Self {
            monthly_payment,
            rows: Vec::new(),
        }
    }

    /// Add a payment row
    pub fn add_row(&mut self, row: PaymentRow) {
        self.rows.push(row);
    }

    /// Number of payments in the schedule
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance remaining after the final payment
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.remaining_balance).unwrap_or(0.0)
    }

    /// Aggregate totals over the rounded rows
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.payment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest_paid).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal_paid).sum();

        ScheduleSummary {
            months: self.rows.len() as u32,
            monthly_payment: self.monthly_payment,
            total_paid,
            total_interest,
            total_principal,
        }
    }

    /// Cumulative amount paid through each month, aligned with `rows`
    pub fn cumulative_paid(&self) -> Vec<f64> {
        let mut running = 0.0;
        self.rows
            .iter()
            .map(|r| {
                running += r.payment;
                running
            })
            .collect()
    }
}

/// Summary statistics for one schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_schedule() -> AmortizationSchedule {
        let mut schedule = AmortizationSchedule::new(100.0);
        schedule.add_row(PaymentRow {
            month: 1,
            payment: 100.0,
            principal_paid: 90.0,
            interest_paid: 10.0,
            remaining_balance: 110.0,
        });
        schedule.add_row(PaymentRow {
            month: 2,
            payment: 100.0,
            principal_paid: 95.0,
            interest_paid: 5.0,
            remaining_balance: 0.0,
        });
        schedule
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(212.13196), 212.13);
        assert_eq!(round_cents(166.66666), 166.67);
        assert_eq!(round_cents(0.005), 0.01);
        assert_eq!(round_cents(-0.004), -0.0);
    }

    #[test]
    fn test_summary_sums_rows() {
        let summary = sample_schedule().summary();

        assert_eq!(summary.months, 2);
        assert_relative_eq!(summary.total_paid, 200.0);
        assert_relative_eq!(summary.total_interest, 15.0);
        assert_relative_eq!(summary.total_principal, 185.0);
    }

    #[test]
    fn test_cumulative_paid() {
        let cumulative = sample_schedule().cumulative_paid();
        assert_eq!(cumulative, vec![100.0, 200.0]);
    }

    #[test]
    fn test_final_balance_empty() {
        assert_eq!(AmortizationSchedule::new(0.0).final_balance(), 0.0);
    }
}
