use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tally",
    version,
    about = "Track personal expenses from an interactive terminal menu"
)]
pub struct Cli {
    /// Data file holding your expenses (defaults to ./expenses.json)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
