use thiserror::Error;

/// Message shown to users for any rejected note.
pub const UNPARSEABLE_MESSAGE: &str =
    "Could not understand that expense. Try something like 'tea 25' or 'paid electricity bill 500'";

/// Why a note was rejected. Every variant means the same thing to the
/// caller: no record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no amount found")]
    NoAmountFound,
    #[error("description is empty")]
    EmptyDescription,
    #[error("amount is too large")]
    AmountOutOfRange,
    #[error("date is out of range")]
    DateOutOfRange,
}

impl ParseError {
    pub fn user_message(&self) -> &'static str {
        UNPARSEABLE_MESSAGE
    }
}
