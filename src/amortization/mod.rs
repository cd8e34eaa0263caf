//! Amortization engine for month-by-month loan schedules

mod engine;
mod schedule;

pub use engine::{AmortizationConfig, AmortizationEngine, PeriodRounding};
pub use schedule::{round_cents, AmortizationSchedule, PaymentRow, ScheduleSummary};
