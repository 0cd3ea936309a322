use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::Category;

/// A structured expense produced from a free-text note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDateTime,
}

impl ParsedExpense {
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

impl std::fmt::Display for ParsedExpense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {:<24} {:>10}  {}",
            self.day().format("%Y-%m-%d"),
            self.description,
            format!("{:.2}", self.amount),
            self.category
        )
    }
}
