//! QuickSpend: a rule-based parser for short expense notes.
//!
//! ```no_run
//! use quickspend::ExpenseParser;
//!
//! let parser = ExpenseParser::default();
//! let expense = parser.parse_now("paid electricity bill 500").unwrap();
//! assert_eq!(expense.description, "Electricity bill");
//! ```

pub mod categorize;
pub mod config;
pub mod models;
pub mod parse;
pub mod summary;

pub use categorize::KeywordTable;
pub use models::{Category, ParsedExpense};
pub use parse::{ExpenseParser, ParseError, UNPARSEABLE_MESSAGE};
