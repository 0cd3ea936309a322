use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{Category, ParsedExpense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }

    /// Anything that is not "daily" is treated as monthly.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "today" => Self::Daily,
            _ => Self::Monthly,
        }
    }

    /// Midnight at the start of the period containing `now`.
    pub fn start(&self, now: NaiveDateTime) -> NaiveDateTime {
        let day = match self {
            Self::Daily => now.date(),
            Self::Monthly => now.date().with_day(1).unwrap_or(now.date()),
        };
        day.and_time(chrono::NaiveTime::MIN)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Window covered by [`Analytics::last_days`] in the CLI and line mode.
pub const ANALYTICS_DAYS: u64 = 30;

/// A running total went past what a `Decimal` can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expense totals are too large to add up")]
pub struct TotalOverflow;

fn add_to(sum: &mut Decimal, amount: Decimal) -> Result<(), TotalOverflow> {
    *sum = sum.checked_add(amount).ok_or(TotalOverflow)?;
    Ok(())
}

/// Totals for the expenses dated inside one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub period: Period,
    pub total: Decimal,
    pub count: usize,
    pub category_breakdown: BTreeMap<Category, Decimal>,
}

impl ExpenseSummary {
    pub fn for_period(
        expenses: &[ParsedExpense],
        period: Period,
        now: NaiveDateTime,
    ) -> Result<Self, TotalOverflow> {
        let start = period.start(now);
        let mut total = Decimal::ZERO;
        let mut count = 0;
        let mut category_breakdown = BTreeMap::new();

        for e in expenses.iter().filter(|e| e.date >= start) {
            add_to(&mut total, e.amount)?;
            add_to(category_breakdown.entry(e.category).or_insert(Decimal::ZERO), e.amount)?;
            count += 1;
        }

        Ok(Self {
            period,
            total,
            count,
            category_breakdown,
        })
    }
}

/// Per-day totals from `since` onward, ascending by day.
pub fn daily_totals(
    expenses: &[ParsedExpense],
    since: NaiveDateTime,
) -> Result<Vec<(NaiveDate, Decimal)>, TotalOverflow> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in expenses.iter().filter(|e| e.date >= since) {
        add_to(by_day.entry(e.day()).or_insert(Decimal::ZERO), e.amount)?;
    }
    Ok(by_day.into_iter().collect())
}

/// Spending over a trailing window: category totals, a per-day trend and
/// the overall total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    pub since: NaiveDateTime,
    pub total: Decimal,
    pub category_breakdown: BTreeMap<Category, Decimal>,
    pub trend: Vec<(NaiveDate, Decimal)>,
}

impl Analytics {
    /// Expenses dated from `days` days before `now` onward.
    pub fn last_days(
        expenses: &[ParsedExpense],
        now: NaiveDateTime,
        days: u64,
    ) -> Result<Self, TotalOverflow> {
        let since = now
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDateTime::MIN);

        let mut total = Decimal::ZERO;
        let mut category_breakdown = BTreeMap::new();
        for e in expenses.iter().filter(|e| e.date >= since) {
            add_to(&mut total, e.amount)?;
            add_to(category_breakdown.entry(e.category).or_insert(Decimal::ZERO), e.amount)?;
        }

        Ok(Self {
            since,
            total,
            category_breakdown,
            trend: daily_totals(expenses, since)?,
        })
    }
}
