mod cli;
mod interactive;

pub(crate) use cli::{as_cli, keywords_flag, without_flag};
pub(crate) use interactive::as_interactive;
