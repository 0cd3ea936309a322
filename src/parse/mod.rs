//! Free-text expense parsing.
//!
//! A note such as `"paid electricity bill 500 yesterday"` goes through four
//! stages in order: amount extraction, description cleanup, category lookup
//! and date resolution. Any stage failing rejects the whole note.

mod error;

pub use error::{ParseError, UNPARSEABLE_MESSAGE};

use chrono::{Days, NaiveDateTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use crate::categorize::KeywordTable;
use crate::models::ParsedExpense;

#[allow(clippy::unwrap_used)]
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

#[allow(clippy::unwrap_used)]
static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:paid|for|spent on|bought)(?:\s+|$)").unwrap()
});

/// The first number in a note, as typed and as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount<'a> {
    pub text: &'a str,
    pub value: Decimal,
}

/// Find the leftmost number in `input`. Later numbers are left alone.
///
/// A number that a `Decimal` cannot hold exactly is rejected rather than
/// rounded.
pub fn extract_amount(input: &str) -> Result<Amount<'_>, ParseError> {
    let m = AMOUNT_RE.find(input).ok_or(ParseError::NoAmountFound)?;
    let value = Decimal::from_str_exact(m.as_str()).map_err(|_| ParseError::AmountOutOfRange)?;
    Ok(Amount {
        text: m.as_str(),
        value,
    })
}

/// Remove the first occurrence of `amount_text` and one leading filler
/// phrase, then capitalize the first character.
pub fn normalize_description(input: &str, amount_text: &str) -> Result<String, ParseError> {
    let without_amount = input.replacen(amount_text, "", 1);
    let rest = without_amount.trim();
    let rest = FILLER_RE.replace(rest, "");
    let rest = rest.trim();

    if rest.is_empty() {
        return Err(ParseError::EmptyDescription);
    }
    Ok(capitalize_first(rest))
}

/// Shift `now` back one calendar day if the note says "yesterday".
/// `lower` must already be lower-cased.
pub fn resolve_date(lower: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ParseError> {
    if lower.contains("yesterday") {
        now.checked_sub_days(Days::new(1))
            .ok_or(ParseError::DateOutOfRange)
    } else {
        Ok(now)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses expense notes against a shared, read-only keyword table.
///
/// Cloning is cheap and every clone sees the same table, so one parser can
/// be handed to as many threads as needed.
#[derive(Debug, Clone, Default)]
pub struct ExpenseParser {
    keywords: Arc<KeywordTable>,
}

impl ExpenseParser {
    pub fn new(keywords: KeywordTable) -> Self {
        Self {
            keywords: Arc::new(keywords),
        }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Parse `text`, resolving relative dates against the local clock.
    pub fn parse_now(&self, text: &str) -> Result<ParsedExpense, ParseError> {
        self.parse(text, chrono::Local::now().naive_local())
    }

    /// Parse `text`, resolving relative dates against `now`.
    pub fn parse(&self, text: &str, now: NaiveDateTime) -> Result<ParsedExpense, ParseError> {
        self.run_stages(text, now).inspect_err(|e| {
            debug!(input = text, reason = %e, "rejected expense note");
        })
    }

    fn run_stages(&self, text: &str, now: NaiveDateTime) -> Result<ParsedExpense, ParseError> {
        let lower = text.trim().to_lowercase();

        let amount = extract_amount(text)?;
        let description = normalize_description(text, amount.text)?;
        let words: Vec<&str> = lower.split_whitespace().collect();
        let category = self.keywords.classify(&words);
        let date = resolve_date(&lower, now)?;

        debug!(%description, amount = %amount.value, %category, "parsed expense note");
        Ok(ParsedExpense {
            description,
            amount: amount.value,
            category,
            date,
        })
    }
}
