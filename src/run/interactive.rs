use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{self, BufRead, IsTerminal, Write};

use quickspend::{
    summary::{Analytics, ExpenseSummary, Period, ANALYTICS_DAYS},
    ExpenseParser, ParsedExpense, UNPARSEABLE_MESSAGE,
};

/// Shown when stdin is a terminal. Command words have no amount, so they
/// could never parse as a note anyway.
pub(crate) const INTRO: &str = "Type an expense (e.g. 'tea 25'). A line that is exactly \
'today', 'month', 'summary', 'analytics' or 'quit' is a command, not a note.";

/// What the line loop should do after one input line.
#[derive(Debug, PartialEq)]
pub(crate) enum Reply {
    Say(String),
    Summary(Period),
    Analytics,
    Nothing,
    Quit,
}

/// Notes entered during one interactive session.
#[derive(Debug, Default)]
pub(crate) struct Session {
    pub(crate) expenses: Vec<ParsedExpense>,
}

impl Session {
    pub(crate) fn handle_line(
        &mut self,
        parser: &ExpenseParser,
        line: &str,
        now: NaiveDateTime,
    ) -> Reply {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Reply::Nothing,
            "quit" | "exit" | ":q" => Reply::Quit,
            "today" => Reply::Summary(Period::Daily),
            "month" | "summary" => Reply::Summary(Period::Monthly),
            "analytics" => Reply::Analytics,
            _ => match parser.parse(trimmed, now) {
                Ok(expense) => {
                    let reply = format!("Added: {expense}");
                    self.expenses.push(expense);
                    Reply::Say(reply)
                }
                Err(_) => Reply::Say(UNPARSEABLE_MESSAGE.to_string()),
            },
        }
    }
}

pub(crate) fn as_interactive(parser: &ExpenseParser) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut session = Session::default();
    let mut stdout = io::stdout();

    if prompt {
        println!("{INTRO}");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let now = chrono::Local::now().naive_local();

        match session.handle_line(parser, &line, now) {
            Reply::Say(msg) => println!("{msg}"),
            Reply::Summary(period) => {
                match ExpenseSummary::for_period(&session.expenses, period, now) {
                    Ok(summary) => super::cli::print_summary(&summary, now),
                    Err(e) => println!("{e}"),
                }
            }
            Reply::Analytics => match Analytics::last_days(&session.expenses, now, ANALYTICS_DAYS) {
                Ok(analytics) => super::cli::print_analytics(&analytics),
                Err(e) => println!("{e}"),
            },
            Reply::Nothing => {}
            Reply::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
