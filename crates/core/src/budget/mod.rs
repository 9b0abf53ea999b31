//! Budget module - the daily allocation engine, domain models, service and traits.
//!
//! - **Engine** (`allocation_engine.rs`) - Pure carry-over calculations
//! - **Models** (`budget_model.rs`) - Budget, DailyAllocation and result types
//! - **Traits** (`budget_traits.rs`) - Repository and service interfaces
//! - **Service** (`budget_service.rs`) - Loads inputs through the repositories and runs the engine

pub mod allocation_engine;
mod budget_model;
mod budget_service;
mod budget_traits;

pub use allocation_engine::{
    calculate_available_breakdown, calculate_available_budget, calculate_daily_base_budget,
    generate_daily_allocations, reallocate_budget, remaining_budget_from, spending_by_day,
    summarize_period, validate_budget_allocation, DailySpendMap,
};
pub use budget_model::{
    AvailableBudget, Budget, BudgetPeriodSummary, BudgetRuleViolation, BudgetValidation,
    DailyAllocation, NewBudget,
};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
