use crate::budget::budget_model::{
    AvailableBudget, Budget, BudgetPeriodSummary, BudgetValidation, DailyAllocation, NewBudget,
};
use crate::errors::Result;
use crate::expenses::Expense;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, budget_id: &str) -> Result<Budget>;
    fn list_budgets(&self) -> Result<Vec<Budget>>;
    async fn insert_budget(&self, budget: Budget) -> Result<Budget>;
    /// Swaps `old_budget_id` for `budget` in one step.
    async fn replace_budget(&self, old_budget_id: &str, budget: Budget) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn get_available_budget(&self, budget_id: &str, date: NaiveDate) -> Result<AvailableBudget>;
    fn get_daily_allocations(&self, budget_id: &str) -> Result<Vec<DailyAllocation>>;
    fn get_period_summary(&self, budget_id: &str, as_of: NaiveDate)
        -> Result<BudgetPeriodSummary>;
    /// Validates the budget against the expenses stored for its period.
    ///
    /// The expense repository only returns expenses inside the period, so
    /// the out-of-period rule cannot fire here; use
    /// [`validate_expenses`](Self::validate_expenses) to check expenses that
    /// have not been stored yet.
    fn validate_budget(&self, budget_id: &str) -> Result<BudgetValidation>;
    /// Validates caller-supplied expenses against a stored budget.
    fn validate_expenses(&self, budget_id: &str, expenses: &[Expense]) -> Result<BudgetValidation>;
    async fn reallocate_budget(
        &self,
        budget_id: &str,
        new_monthly_amount: Decimal,
        from_date: NaiveDate,
    ) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: &str) -> Result<usize>;
}
