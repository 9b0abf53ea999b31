use chrono::NaiveDate;

use crate::errors::Result;
use crate::expenses::expenses_model::Expense;

/// Read access to recorded expenses, owned by the storage layer.
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses whose calendar day lies in `[start, end]`.
    fn get_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>>;
}
