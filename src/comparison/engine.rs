//! Comparison engine: runs the amortization engine per scenario and derives
//! savings deltas against the current loan

use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, AmortizationSchedule, ScheduleSummary};
use crate::error::LoanError;
use crate::loan::{LoanTerms, RefinanceOffer};

use super::savings::{savings_timeline, SavingsPoint};

/// One fully amortized scenario: terms, schedule, and aggregate totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSchedule {
    pub terms: LoanTerms,
    pub schedule: AmortizationSchedule,
    pub summary: ScheduleSummary,
}

/// Outcome of applying one refinance offer to the current loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceOutcome {
    /// Lender the offer came from, when known
    pub lender: Option<String>,

    pub scenario: ScenarioSchedule,

    /// Current total paid minus this offer's total paid (positive = cheaper)
    pub payment_savings: f64,

    /// Current total interest minus this offer's total interest
    pub interest_savings: f64,
}

/// Result of comparing the current loan against one or more refinance offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub current: ScenarioSchedule,
    pub alternatives: Vec<RefinanceOutcome>,
}

impl ComparisonResult {
    /// Cumulative month-by-month savings of the given alternative versus the
    /// current loan, truncated to the shorter schedule
    pub fn savings_timeline(&self, alternative_index: usize) -> Option<Vec<SavingsPoint>> {
        self.alternatives.get(alternative_index).map(|outcome| {
            savings_timeline(&self.current.schedule, &outcome.scenario.schedule)
        })
    }

    /// Alternative with the largest interest savings
    pub fn best_by_interest(&self) -> Option<&RefinanceOutcome> {
        self.alternatives.iter().max_by(|a, b| {
            a.interest_savings
                .partial_cmp(&b.interest_savings)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// Comparison engine wrapping a shared amortization engine
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    engine: AmortizationEngine,
}

impl ComparisonEngine {
    /// Create a comparison engine over the given amortization engine, so both
    /// share one period-rounding policy
    pub fn new(engine: AmortizationEngine) -> Self {
        Self { engine }
    }

    /// Compare the current loan against each refinance offer
    ///
    /// Every offer is applied to the current loan's principal; only rate and
    /// term change. Fails if `offers` is empty or any scenario fails input
    /// validation.
    pub fn compare(
        &self,
        current: &LoanTerms,
        offers: &[RefinanceOffer],
    ) -> Result<ComparisonResult, LoanError> {
        if offers.is_empty() {
            return Err(LoanError::NoOffers);
        }

        log::debug!(
            "comparing current loan ({:.2} @ {}% / {}y) against {} offer(s)",
            current.principal,
            current.annual_rate_pct,
            current.term_years,
            offers.len()
        );

        let current_scenario = self.run_scenario(current)?;

        let mut alternatives = Vec::with_capacity(offers.len());
        for offer in offers {
            let scenario = self.run_scenario(&current.refinanced(offer))?;
            let payment_savings =
                current_scenario.summary.total_paid - scenario.summary.total_paid;
            let interest_savings =
                current_scenario.summary.total_interest - scenario.summary.total_interest;

            alternatives.push(RefinanceOutcome {
                lender: offer.lender.clone(),
                scenario,
                payment_savings,
                interest_savings,
            });
        }

        Ok(ComparisonResult {
            current: current_scenario,
            alternatives,
        })
    }

    fn run_scenario(&self, terms: &LoanTerms) -> Result<ScenarioSchedule, LoanError> {
        let schedule = self.engine.schedule(terms)?;
        let summary = schedule.summary();
        Ok(ScenarioSchedule {
            terms: terms.clone(),
            schedule,
            summary,
        })
    }
}
