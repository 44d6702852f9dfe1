mod cli;
mod output;
mod session;
mod stdout_io;
mod terminal;

use std::io;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, error::ErrorKind};
use log::debug;
use tally_client::state::resolve_data_path;
use tally_client::{ClientError, Store};

use session::Session;
use stdout_io::write_stdout_text;
use terminal::Terminal;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }
            let clean_message = strip_clap_boilerplate(&err.to_string());
            return Err(report_failure(&ClientError::invalid_argument(&clean_message)));
        }
    };

    let data_path =
        resolve_data_path(cli.file.as_deref()).map_err(|error| report_failure(&error))?;
    debug!("using data file {}", data_path.display());

    let store = Store::new(data_path);
    let book = store.load();
    let outcome = {
        let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
        Session::new(store, book, terminal, local_today).run()
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => Err(report_failure(&error)),
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn report_failure(error: &ClientError) -> ExitCode {
    if output::print_failure(error).is_err() {
        return ExitCode::from(2);
    }
    exit_code_for_error(error)
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_user_error(error) {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

fn is_user_error(error: &ClientError) -> bool {
    error.is_recoverable() || matches!(error.code.as_str(), "invalid_argument" | "input_closed")
}
