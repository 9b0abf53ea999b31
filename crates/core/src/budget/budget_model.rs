//! Budget domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::expenses::Expense;
use crate::utils::time_utils::inclusive_day_count;

use super::allocation_engine::{reallocate_budget, remaining_budget_from};

/// A monthly amount spread across an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub monthly_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub daily_allocation: Vec<DailyAllocation>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Budget {
    /// Inclusive number of days in the period. May be zero or negative for a
    /// malformed period.
    pub fn period_days(&self) -> i64 {
        inclusive_day_count(self.start_date, self.end_date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Builds the budget that replaces this one after the monthly amount
    /// changes on `from_date`.
    ///
    /// The replacement covers `[from_date, end_date]` and holds only what is
    /// left of the new amount after the spend before `from_date`, so running
    /// the engine over it yields the same days as [`reallocate_budget`]. It
    /// gets a fresh id and keeps the original creation time.
    pub fn reallocated(
        &self,
        new_monthly_amount: Decimal,
        from_date: NaiveDate,
        expenses: &[Expense],
        now: NaiveDateTime,
    ) -> Budget {
        Budget {
            id: Uuid::new_v4().to_string(),
            monthly_amount: remaining_budget_from(new_monthly_amount, from_date, self, expenses),
            start_date: from_date,
            end_date: self.end_date,
            daily_allocation: reallocate_budget(new_monthly_amount, from_date, self, expenses),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Input model for creating a budget
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub id: Option<String>,
    pub monthly_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewBudget {
    /// Builds an unvalidated budget with no allocations yet.
    pub fn into_budget(self, now: NaiveDateTime) -> Budget {
        Budget {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            monthly_amount: self.monthly_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            daily_allocation: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Breakdown of a single day in a budget period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyAllocation {
    pub date: NaiveDate,
    pub base_amount: Decimal,
    pub spent_amount: Decimal,
    /// Signed surplus or deficit rolled in from all earlier days.
    pub carry_over_amount: Decimal,
    /// `base_amount + carry_over_amount`, not floored.
    pub available_amount: Decimal,
    pub remaining_amount: Decimal,
}

impl DailyAllocation {
    /// Copy with every amount rounded to `dp` decimal places, for display.
    pub fn rounded(&self, dp: u32) -> DailyAllocation {
        DailyAllocation {
            date: self.date,
            base_amount: self.base_amount.round_dp(dp),
            spent_amount: self.spent_amount.round_dp(dp),
            carry_over_amount: self.carry_over_amount.round_dp(dp),
            available_amount: self.available_amount.round_dp(dp),
            remaining_amount: self.remaining_amount.round_dp(dp),
        }
    }
}

/// What can be spent on a given day, keeping the signed carry that produced
/// it next to the floored figure shown to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBudget {
    pub date: NaiveDate,
    pub daily_base: Decimal,
    pub raw_carry: Decimal,
    pub reported_available: Decimal,
}

/// Outcome of checking a budget and its expenses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl BudgetValidation {
    pub fn from_errors(errors: Vec<String>) -> Self {
        BudgetValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Turns a failed validation into an error for call sites that must not
    /// proceed with an invalid budget.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::InvalidBudget(
                self.errors.join("; "),
            )))
        }
    }
}

/// A rule a budget or one of its expenses can break.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRuleViolation {
    #[error("monthly budget amount must be greater than 0")]
    NonPositiveAmount,

    #[error("start date must be before end date")]
    InvertedPeriod,

    #[error("expense date is outside the budget period")]
    ExpenseOutsidePeriod,

    #[error("expense amount is invalid")]
    InvalidExpenseAmount,
}

/// Period-to-date view of a budget as of one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPeriodSummary {
    pub budget_id: String,
    pub as_of: NaiveDate,
    pub daily_base: Decimal,
    pub total_spent: Decimal,
    pub remaining_in_period: Decimal,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub available_today: Decimal,
}
