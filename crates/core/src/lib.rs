//! Daybudget Core - the daily budget allocation engine and its domain types.
//!
//! This crate turns a monthly budget into a per-day available amount,
//! carrying surplus and deficit from day to day. It is storage-agnostic:
//! budgets and expenses are supplied through the traits defined here.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod utils;

pub use budget::*;
pub use expenses::{Expense, NewExpense};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
