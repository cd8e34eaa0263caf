//! Loan Navigator - Student loan amortization and refinance comparison engine
//!
//! This library provides:
//! - Fixed monthly payment calculation and month-by-month amortization schedules
//! - Refinance comparison with aggregate totals and savings deltas
//! - Month-by-month cumulative savings timelines for scenario charting
//! - Lender program catalogs with eligibility-gated offer recommendation
//! - Closed-form payoff quotes against an existing monthly payment

pub mod amortization;
pub mod comparison;
pub mod error;
pub mod loan;
pub mod offers;

// Re-export commonly used types
pub use amortization::{AmortizationEngine, AmortizationSchedule, PaymentRow, ScheduleSummary};
pub use comparison::{ComparisonEngine, ComparisonResult, RefinanceOutcome};
pub use error::LoanError;
pub use loan::{LoanTerms, RefinanceOffer};
pub use offers::{BorrowerProfile, LenderProgram};
