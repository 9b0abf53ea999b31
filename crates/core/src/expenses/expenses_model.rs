//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time_utils::calendar_day;

/// Domain model representing a dated expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Expense {
    /// Calendar day this expense counts toward.
    pub fn day(&self) -> NaiveDate {
        calendar_day(self.date)
    }
}

/// Input model for recording a new expense
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub amount: Decimal,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDateTime,
}

impl NewExpense {
    pub fn into_expense(self, now: NaiveDateTime) -> Expense {
        Expense {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount: self.amount,
            category_id: self.category_id,
            description: self.description,
            date: self.date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_expense_generates_id_and_timestamps() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let expense = NewExpense {
            id: None,
            amount: dec!(12.50),
            category_id: "food".to_string(),
            description: "Lunch".to_string(),
            date,
        }
        .into_expense(now);

        assert!(!expense.id.is_empty());
        assert_eq!(expense.created_at, now);
        assert_eq!(expense.updated_at, now);
        assert_eq!(expense.day(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_expense_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let expense = NewExpense {
            id: Some("e1".to_string()),
            amount: dec!(4.25),
            category_id: "coffee".to_string(),
            description: "Latte".to_string(),
            date,
        }
        .into_expense(date);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["categoryId"], "coffee");
        assert_eq!(json["amount"], 4.25);
        assert!(json.get("createdAt").is_some());
    }
}
