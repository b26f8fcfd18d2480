//! Command implementations

pub mod audit;
pub mod guess;
pub mod simple;

pub use audit::{AuditResult, run_audit};
pub use guess::{GuessOutcome, submit_guess};
pub use simple::run_simple;
