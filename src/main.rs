mod run;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quickspend::{config, ExpenseParser};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let keywords_path = run::keywords_flag(&args)?;
    let args = run::without_flag(&args, "--keywords");

    let table = config::load_keywords(keywords_path.as_deref())?;
    let parser = ExpenseParser::new(table);

    match args.len() {
        0 | 1 => run::as_interactive(&parser),
        _ => run::as_cli(&args, &parser),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
