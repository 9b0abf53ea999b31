//! Daily budget allocation engine.
//!
//! Turns a monthly amount into a per-day available figure. Every day of the
//! period gets the same base share; whatever is left over (or overspent) on a
//! day rolls into the next one as a signed carry. The carry is never capped,
//! so savings keep accumulating and debt keeps weighing on the rest of the
//! period. Only the figure reported for "today" is floored at zero.
//!
//! All functions here are pure. They never fail: malformed periods fall back
//! to a one-day length, sums saturate at the `Decimal` range instead of
//! overflowing, and negative results are floored or reported through
//! [`validate_budget_allocation`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::MIN_PERIOD_DAYS;
use crate::expenses::Expense;
use crate::utils::time_utils::{get_days_between, inclusive_day_count};

use super::budget_model::{
    AvailableBudget, Budget, BudgetPeriodSummary, BudgetRuleViolation, BudgetValidation,
    DailyAllocation,
};

/// Per-day expense totals keyed by calendar day.
pub type DailySpendMap = BTreeMap<NaiveDate, Decimal>;

/// Sums expense amounts per calendar day, ignoring time-of-day.
pub fn spending_by_day(expenses: &[Expense]) -> DailySpendMap {
    let mut by_day = DailySpendMap::new();
    for expense in expenses {
        let total = by_day.entry(expense.day()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(expense.amount);
    }
    by_day
}

fn saturating_sum<'a>(amounts: impl Iterator<Item = &'a Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}

fn spent_on(spending: &DailySpendMap, day: NaiveDate) -> Decimal {
    spending.get(&day).copied().unwrap_or(Decimal::ZERO)
}

fn divisor_days(days: i64) -> Decimal {
    Decimal::from(days.max(MIN_PERIOD_DAYS))
}

/// Uniform daily share of the budget: `monthly_amount / days in period`.
///
/// `reference_date` does not have to fall inside the period. No rounding is
/// applied.
pub fn calculate_daily_base_budget(budget: &Budget, reference_date: NaiveDate) -> Decimal {
    if !budget.contains(reference_date) {
        debug!(
            "Reference date {} is outside budget {} period {}..{}",
            reference_date, budget.id, budget.start_date, budget.end_date
        );
    }
    budget.monthly_amount / divisor_days(budget.period_days())
}

/// Signed carry accumulated over `[start, target)`.
fn carry_into(
    start: NaiveDate,
    target: NaiveDate,
    daily_base: Decimal,
    spending: &DailySpendMap,
) -> Decimal {
    start
        .iter_days()
        .take_while(|day| *day < target)
        .fold(Decimal::ZERO, |carry, day| {
            daily_base
                .saturating_add(carry)
                .saturating_sub(spent_on(spending, day))
        })
}

/// Both the signed carry entering `target_date` and the floored amount
/// available on it.
pub fn calculate_available_breakdown(
    target_date: NaiveDate,
    budget: &Budget,
    expenses: &[Expense],
) -> AvailableBudget {
    let daily_base = calculate_daily_base_budget(budget, target_date);
    let spending = spending_by_day(expenses);
    let raw_carry = carry_into(budget.start_date, target_date, daily_base, &spending);

    AvailableBudget {
        date: target_date,
        daily_base,
        raw_carry,
        reported_available: daily_base.saturating_add(raw_carry).max(Decimal::ZERO),
    }
}

/// Amount the user can spend on `target_date`, never negative.
pub fn calculate_available_budget(
    target_date: NaiveDate,
    budget: &Budget,
    expenses: &[Expense],
) -> Decimal {
    calculate_available_breakdown(target_date, budget, expenses).reported_available
}

/// One allocation per day in `[start_date, end_date]`, starting from zero
/// carry. Empty when `start_date` is after `end_date`.
///
/// The range may extend past `budget`'s own period (forecasts); only the
/// given `daily_base` is used for every day.
pub fn generate_daily_allocations(
    start_date: NaiveDate,
    end_date: NaiveDate,
    daily_base: Decimal,
    budget: &Budget,
    expenses: &[Expense],
) -> Vec<DailyAllocation> {
    if start_date <= end_date && !(budget.contains(start_date) && budget.contains(end_date)) {
        debug!(
            "Allocations {}..{} extend outside budget {} period {}..{}",
            start_date, end_date, budget.id, budget.start_date, budget.end_date
        );
    }

    let spending = spending_by_day(expenses);
    let mut carry = Decimal::ZERO;

    get_days_between(start_date, end_date)
        .into_iter()
        .map(|date| {
            let spent_amount = spent_on(&spending, date);
            let available_amount = daily_base.saturating_add(carry);
            let remaining_amount = available_amount.saturating_sub(spent_amount);
            let allocation = DailyAllocation {
                date,
                base_amount: daily_base,
                spent_amount,
                carry_over_amount: carry,
                available_amount,
                remaining_amount,
            };
            carry = remaining_amount;
            allocation
        })
        .collect()
}

/// What is left of `new_monthly_amount` once the spend inside the period
/// before `from_date` is taken off. Signed.
pub fn remaining_budget_from(
    new_monthly_amount: Decimal,
    from_date: NaiveDate,
    budget: &Budget,
    expenses: &[Expense],
) -> Decimal {
    let spent_so_far = saturating_sum(
        expenses
            .iter()
            .filter(|expense| {
                let day = expense.day();
                budget.contains(day) && day < from_date
            })
            .map(|expense| &expense.amount),
    );
    new_monthly_amount.saturating_sub(spent_so_far)
}

/// Re-spreads a changed monthly amount over `[from_date, end_date]`.
///
/// Everything spent before `from_date` is taken off the new amount up front,
/// so the walk restarts at `from_date` with zero carry. The new base is not
/// clamped: when the spend so far already exceeds the new amount every
/// remaining day starts in deficit.
pub fn reallocate_budget(
    new_monthly_amount: Decimal,
    from_date: NaiveDate,
    budget: &Budget,
    expenses: &[Expense],
) -> Vec<DailyAllocation> {
    let remaining_budget = remaining_budget_from(new_monthly_amount, from_date, budget, expenses);
    let remaining_days = inclusive_day_count(from_date, budget.end_date);
    let new_daily_base = remaining_budget / divisor_days(remaining_days);

    if remaining_budget < Decimal::ZERO {
        warn!(
            "Budget {} reallocated to {} from {} is already overspent by {}",
            budget.id,
            new_monthly_amount,
            from_date,
            remaining_budget.abs()
        );
    }
    debug!(
        "Reallocating budget {}: {} left over {} days, new daily base {}",
        budget.id, remaining_budget, remaining_days, new_daily_base
    );

    generate_daily_allocations(from_date, budget.end_date, new_daily_base, budget, expenses)
}

/// Checks the budget and every expense, collecting all failed rules.
pub fn validate_budget_allocation(budget: &Budget, expenses: &[Expense]) -> BudgetValidation {
    let mut violations = Vec::new();

    if budget.monthly_amount <= Decimal::ZERO {
        violations.push(BudgetRuleViolation::NonPositiveAmount);
    }
    if budget.start_date >= budget.end_date {
        violations.push(BudgetRuleViolation::InvertedPeriod);
    }

    let mut outside_period = 0usize;
    let mut invalid_amounts = 0usize;
    for expense in expenses {
        if !budget.contains(expense.day()) {
            debug!(
                "Expense {} dated {} is outside budget {} period {}..{}",
                expense.id,
                expense.day(),
                budget.id,
                budget.start_date,
                budget.end_date
            );
            outside_period += 1;
        }
        if expense.amount < Decimal::ZERO {
            debug!("Expense {} has invalid amount {}", expense.id, expense.amount);
            invalid_amounts += 1;
        }
    }

    if outside_period > 0 {
        violations.push(BudgetRuleViolation::ExpenseOutsidePeriod);
    }
    if invalid_amounts > 0 {
        violations.push(BudgetRuleViolation::InvalidExpenseAmount);
    }

    if !violations.is_empty() {
        warn!(
            "Budget {} failed validation: {} rule(s), {} expense(s) outside period, {} invalid amount(s)",
            budget.id,
            violations.len(),
            outside_period,
            invalid_amounts
        );
    }

    BudgetValidation::from_errors(violations.iter().map(ToString::to_string).collect())
}

/// Period-to-date figures for `budget` as of `as_of`.
pub fn summarize_period(
    budget: &Budget,
    expenses: &[Expense],
    as_of: NaiveDate,
) -> BudgetPeriodSummary {
    let period_days = budget.period_days().max(0);
    let days_elapsed = (as_of - budget.start_date).num_days().clamp(0, period_days);

    let total_spent = saturating_sum(
        expenses
            .iter()
            .filter(|expense| {
                let day = expense.day();
                budget.contains(day) && day <= as_of
            })
            .map(|expense| &expense.amount),
    );

    let available = calculate_available_breakdown(as_of, budget, expenses);

    BudgetPeriodSummary {
        budget_id: budget.id.clone(),
        as_of,
        daily_base: available.daily_base,
        total_spent,
        remaining_in_period: budget.monthly_amount.saturating_sub(total_spent),
        days_elapsed,
        days_remaining: period_days - days_elapsed,
        available_today: available.reported_available,
    }
}
