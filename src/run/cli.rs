use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;
use std::path::{Path, PathBuf};

use quickspend::{
    summary::{Analytics, ExpenseSummary, Period, ANALYTICS_DAYS},
    ExpenseParser, ParseError, ParsedExpense, UNPARSEABLE_MESSAGE,
};

pub(crate) fn as_cli(args: &[String], parser: &ExpenseParser) -> Result<()> {
    match args[1].as_str() {
        "parse" | "p" => cli_parse(&args[2..], parser),
        "batch" => cli_batch(&args[2..], parser),
        "summary" | "s" => cli_summary(&args[2..], parser),
        "analytics" | "a" => cli_analytics(&args[2..], parser),
        "categories" => cli_categories(parser),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("quickspend {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("QuickSpend — turn notes like 'tea 25' into expense records");
    println!();
    println!("Usage: quickspend [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Read notes from stdin, one per line");
    println!("  parse <note...>               Parse a single note");
    println!("    --now <YYYY-MM-DD[THH:MM:SS]>  Reference time for 'yesterday'");
    println!("  batch <notes.txt>             Parse every line of a file to CSV");
    println!("    --output <file.csv>         Write CSV to a file (default: stdout)");
    println!("  summary <notes.txt> [daily|monthly]  Totals by category");
    println!("  analytics <notes.txt>         Last 30 days: categories, daily trend, total");
    println!("  categories                    List categories and their keywords");
    println!("  --keywords <file.csv>         Extra keywords (category,keyword rows)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Value following `name` in `args`, if any.
pub(crate) fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

/// The `--keywords <file>` path, if given. A trailing `--keywords` with no
/// file is a usage error.
pub(crate) fn keywords_flag(args: &[String]) -> Result<Option<PathBuf>> {
    if !args.iter().any(|a| a == "--keywords") {
        return Ok(None);
    }
    match flag_value(args, "--keywords") {
        Some(path) => Ok(Some(PathBuf::from(shellexpand(path)))),
        None => anyhow::bail!("Usage: quickspend [command] --keywords <file.csv>"),
    }
}

/// `args` with `name` and the value after it removed.
pub(crate) fn without_flag(args: &[String], name: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == name {
            skip_next = true;
            continue;
        }
        out.push(arg.clone());
    }
    out
}

/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` or a bare date
/// (taken as midnight).
pub(crate) fn parse_reference_time(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid --now value: {s}"))?;
    Ok(day.and_time(chrono::NaiveTime::MIN))
}

fn reference_time(args: &[String]) -> Result<NaiveDateTime> {
    match flag_value(args, "--now") {
        Some(s) => parse_reference_time(s),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn cli_parse(args: &[String], parser: &ExpenseParser) -> Result<()> {
    let now = reference_time(args)?;
    let note = without_flag(args, "--now").join(" ");
    if note.trim().is_empty() {
        anyhow::bail!("Usage: quickspend parse <note...> [--now <YYYY-MM-DD>]");
    }

    let expense = parser
        .parse(&note, now)
        .map_err(|e| anyhow::anyhow!("{UNPARSEABLE_MESSAGE} ({e})"))?;

    println!("  Description: {}", expense.description);
    println!("  Amount:      {:.2}", expense.amount);
    println!("  Category:    {}", expense.category);
    println!("  Date:        {}", expense.date.format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}

/// Parse one note per line. Blank lines are skipped; rejected lines are
/// returned with their 1-based line number.
pub(crate) fn parse_lines(
    parser: &ExpenseParser,
    content: &str,
    now: NaiveDateTime,
) -> (Vec<ParsedExpense>, Vec<(usize, ParseError)>) {
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse(line, now) {
            Ok(expense) => parsed.push(expense),
            Err(e) => rejected.push((idx + 1, e)),
        }
    }
    (parsed, rejected)
}

pub(crate) fn write_csv<W: Write>(out: W, expenses: &[ParsedExpense]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["date", "description", "amount", "category"])
        .context("Failed to write CSV header")?;
    for e in expenses {
        wtr.write_record([
            e.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            e.description.clone(),
            format!("{:.2}", e.amount),
            e.category.to_string(),
        ])
        .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

fn read_notes(args: &[String], usage: &str) -> Result<String> {
    let file_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .ok_or_else(|| anyhow::anyhow!("{usage}"))?;
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {file_path}"))
}

fn report_rejected(rejected: &[(usize, ParseError)]) {
    for (line, err) in rejected {
        eprintln!("Skipped line {line}: {err}");
    }
}

fn cli_batch(args: &[String], parser: &ExpenseParser) -> Result<()> {
    let content = read_notes(args, "Usage: quickspend batch <notes.txt> [--output <file.csv>]")?;
    let now = reference_time(args)?;
    let (parsed, rejected) = parse_lines(parser, &content, now);
    report_rejected(&rejected);

    match flag_value(args, "--output") {
        Some(output_path) => {
            let output_path = shellexpand(output_path);
            let file = std::fs::File::create(&output_path)
                .with_context(|| format!("Failed to create {output_path}"))?;
            write_csv(file, &parsed)?;
            println!(
                "Wrote {} expenses to {output_path} ({} lines rejected)",
                parsed.len(),
                rejected.len()
            );
        }
        None => write_csv(std::io::stdout().lock(), &parsed)?,
    }
    Ok(())
}

fn cli_summary(args: &[String], parser: &ExpenseParser) -> Result<()> {
    let content = read_notes(args, "Usage: quickspend summary <notes.txt> [daily|monthly]")?;
    let now = reference_time(args)?;
    let rest = without_flag(args, "--now");
    let period = rest
        .get(1)
        .map(|p| Period::parse(p))
        .unwrap_or(Period::Monthly);

    let (parsed, rejected) = parse_lines(parser, &content, now);
    report_rejected(&rejected);

    let summary = ExpenseSummary::for_period(&parsed, period, now)?;
    print_summary(&summary, now);
    Ok(())
}

fn cli_analytics(args: &[String], parser: &ExpenseParser) -> Result<()> {
    let content = read_notes(args, "Usage: quickspend analytics <notes.txt> [--now <YYYY-MM-DD>]")?;
    let now = reference_time(args)?;

    let (parsed, rejected) = parse_lines(parser, &content, now);
    report_rejected(&rejected);

    let analytics = Analytics::last_days(&parsed, now, ANALYTICS_DAYS)?;
    print_analytics(&analytics);
    Ok(())
}

pub(crate) fn print_analytics(analytics: &Analytics) {
    println!("QuickSpend — since {}", analytics.since.format("%Y-%m-%d"));
    println!("{}", "─".repeat(40));
    println!("  Total:      {:.2}", analytics.total);

    if !analytics.category_breakdown.is_empty() {
        println!();
        println!("Spending by Category:");
        for (category, amount) in &analytics.category_breakdown {
            println!("  {:<24} {:.2}", category.as_str(), amount);
        }
    }

    if !analytics.trend.is_empty() {
        println!();
        println!("Daily Trend:");
        for (day, amount) in &analytics.trend {
            println!("  {}  {:>12.2}", day.format("%Y-%m-%d"), amount);
        }
    }
}

pub(crate) fn print_summary(summary: &ExpenseSummary, now: NaiveDateTime) {
    let label = match summary.period {
        Period::Daily => now.format("%Y-%m-%d").to_string(),
        Period::Monthly => now.format("%Y-%m").to_string(),
    };
    let plural = if summary.count == 1 { "" } else { "s" };

    println!("QuickSpend — {label}");
    println!("{}", "─".repeat(40));
    println!("  Total:      {:.2}", summary.total);
    println!("  Count:      {} expense{plural}", summary.count);

    if !summary.category_breakdown.is_empty() {
        println!();
        println!("Spending by Category:");
        for (category, amount) in &summary.category_breakdown {
            println!("  {:<24} {:.2}", category.as_str(), amount);
        }
    }
}

fn cli_categories(parser: &ExpenseParser) -> Result<()> {
    let table = parser.keywords();
    for category in table.categories() {
        println!("{:<20} {}", category.as_str(), table.keywords(category).join(", "));
    }
    println!("{:<20} (anything else)", quickspend::Category::Other.as_str());
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
