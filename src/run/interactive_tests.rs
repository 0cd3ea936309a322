#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use quickspend::Category;
use rust_decimal_macros::dec;

use super::*;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

#[test]
fn test_session_adds_parsed_notes() {
    let parser = ExpenseParser::default();
    let mut session = Session::default();

    let reply = session.handle_line(&parser, "tea 25", now());
    match reply {
        Reply::Say(msg) => assert!(msg.starts_with("Added: 2024-03-15")),
        other => panic!("unexpected reply: {other:?}"),
    }
    assert_eq!(session.expenses.len(), 1);
    assert_eq!(session.expenses[0].amount, dec!(25));
    assert_eq!(session.expenses[0].category, Category::FoodAndDrinks);
}

#[test]
fn test_session_rejection_is_generic() {
    let parser = ExpenseParser::default();
    let mut session = Session::default();

    assert_eq!(
        session.handle_line(&parser, "paid 500", now()),
        Reply::Say(UNPARSEABLE_MESSAGE.to_string())
    );
    assert_eq!(
        session.handle_line(&parser, "coffee", now()),
        Reply::Say(UNPARSEABLE_MESSAGE.to_string())
    );
    assert!(session.expenses.is_empty());
}

#[test]
fn test_session_commands() {
    let parser = ExpenseParser::default();
    let mut session = Session::default();

    assert_eq!(session.handle_line(&parser, "   ", now()), Reply::Nothing);
    assert_eq!(session.handle_line(&parser, "today", now()), Reply::Summary(Period::Daily));
    assert_eq!(session.handle_line(&parser, "Month", now()), Reply::Summary(Period::Monthly));
    assert_eq!(session.handle_line(&parser, "analytics", now()), Reply::Analytics);
    assert_eq!(session.handle_line(&parser, "quit", now()), Reply::Quit);
    assert_eq!(session.handle_line(&parser, "EXIT", now()), Reply::Quit);
}

#[test]
fn test_intro_lists_every_command_word() {
    let parser = ExpenseParser::default();
    let mut session = Session::default();
    for word in ["today", "month", "summary", "analytics", "quit"] {
        assert!(INTRO.contains(&format!("'{word}'")), "intro is missing {word}");
        // none of these can be a note: they carry no amount
        assert!(parser.parse(word, now()).is_err());
        assert!(!matches!(session.handle_line(&parser, word, now()), Reply::Say(_)));
    }
    assert!(session.expenses.is_empty());
}

#[test]
fn test_session_huge_amounts_are_kept() {
    let parser = ExpenseParser::default();
    let mut session = Session::default();
    session.handle_line(&parser, "gold 79228162514264337593543950335", now());
    session.handle_line(&parser, "coffee 1", now());
    assert_eq!(session.expenses.len(), 2);
    // adding them up reports an error instead of aborting
    assert!(ExpenseSummary::for_period(&session.expenses, Period::Daily, now()).is_err());
    assert!(Analytics::last_days(&session.expenses, now(), ANALYTICS_DAYS).is_err());
}
