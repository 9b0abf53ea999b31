use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;

use crate::budget::allocation_engine::{
    calculate_available_breakdown, calculate_daily_base_budget, generate_daily_allocations,
    summarize_period, validate_budget_allocation,
};
use crate::budget::budget_model::{
    AvailableBudget, Budget, BudgetPeriodSummary, BudgetRuleViolation, BudgetValidation,
    DailyAllocation, NewBudget,
};
use crate::budget::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::{Expense, ExpenseRepositoryTrait};

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            expense_repository,
        }
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    /// Loads a budget together with the expenses recorded inside its period.
    fn load(&self, budget_id: &str) -> Result<(Budget, Vec<Expense>)> {
        let budget = self.budget_repository.get_budget(budget_id)?;
        let expenses = self
            .expense_repository
            .get_expenses_between(budget.start_date, budget.end_date)?;
        Ok((budget, expenses))
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        let mut budget = new_budget.into_budget(Self::now());
        validate_budget_allocation(&budget, &[]).into_result()?;

        let daily_base = calculate_daily_base_budget(&budget, budget.start_date);
        budget.daily_allocation =
            generate_daily_allocations(budget.start_date, budget.end_date, daily_base, &budget, &[]);

        info!(
            "Creating budget {} of {} for {}..{}",
            budget.id, budget.monthly_amount, budget.start_date, budget.end_date
        );
        self.budget_repository.insert_budget(budget).await
    }

    fn get_available_budget(&self, budget_id: &str, date: NaiveDate) -> Result<AvailableBudget> {
        let (budget, expenses) = self.load(budget_id)?;
        Ok(calculate_available_breakdown(date, &budget, &expenses))
    }

    fn get_daily_allocations(&self, budget_id: &str) -> Result<Vec<DailyAllocation>> {
        let (budget, expenses) = self.load(budget_id)?;
        let daily_base = calculate_daily_base_budget(&budget, budget.start_date);
        Ok(generate_daily_allocations(
            budget.start_date,
            budget.end_date,
            daily_base,
            &budget,
            &expenses,
        ))
    }

    fn get_period_summary(
        &self,
        budget_id: &str,
        as_of: NaiveDate,
    ) -> Result<BudgetPeriodSummary> {
        let (budget, expenses) = self.load(budget_id)?;
        Ok(summarize_period(&budget, &expenses, as_of))
    }

    fn validate_budget(&self, budget_id: &str) -> Result<BudgetValidation> {
        let (budget, expenses) = self.load(budget_id)?;
        Ok(validate_budget_allocation(&budget, &expenses))
    }

    fn validate_expenses(&self, budget_id: &str, expenses: &[Expense]) -> Result<BudgetValidation> {
        let budget = self.budget_repository.get_budget(budget_id)?;
        Ok(validate_budget_allocation(&budget, expenses))
    }

    async fn reallocate_budget(
        &self,
        budget_id: &str,
        new_monthly_amount: Decimal,
        from_date: NaiveDate,
    ) -> Result<Budget> {
        if new_monthly_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidBudget(
                BudgetRuleViolation::NonPositiveAmount.to_string(),
            )));
        }

        let (budget, expenses) = self.load(budget_id)?;
        let replacement = budget.reallocated(new_monthly_amount, from_date, &expenses, Self::now());

        debug!(
            "Replacing budget {} with {} ({} -> {} from {})",
            budget.id, replacement.id, budget.monthly_amount, new_monthly_amount, from_date
        );
        self.budget_repository
            .replace_budget(&budget.id, replacement)
            .await
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<usize> {
        self.budget_repository.delete_budget(budget_id).await
    }
}
