//! Comparison engine for current-loan versus refinance scenarios

mod engine;
mod savings;

pub use engine::{ComparisonEngine, ComparisonResult, RefinanceOutcome, ScenarioSchedule};
pub use savings::{payoff_quote, savings_timeline, PayoffQuote, SavingsPoint};
