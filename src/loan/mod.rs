//! Loan input data structures and validation

mod terms;

pub use terms::{LoanTerms, RefinanceOffer};
