// calcsales CLI - branch/commodity sales aggregation over a working directory

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use calcsales_cli::messages::{self, Lang};
use calcsales_cli::settings::{flag_lang, FileSettings};
use calcsales_engine::{AggregationMode, SalesConfig};
use exit_codes::{RunErrorOutput, RunOutput, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "calcsales")]
#[command(about = "Aggregate branch (and commodity) sales from numbered record files")]
#[command(version)]
#[command(after_help = "\
Examples:
  calcsales ./sales
  calcsales ./sales --commodity
  calcsales ./sales --lang en --json
  calcsales ./sales --config calcsales.toml")]
struct Cli {
    /// Working directory holding branch.lst and NNNNNNNN.rcd files (exactly one)
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Also aggregate by commodity (3-line records, reads commodity.lst)
    #[arg(long)]
    commodity: bool,

    /// Message language: ja or en (any case; anything else falls back to ja)
    #[arg(long, value_name = "LANG", env = "CALCSALES_LANG")]
    lang: Option<String>,

    /// TOML file with `mode` and `lang` defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
}

impl CliError {
    /// The single abort message, already localized.
    pub fn abort(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into() }
    }

    /// Abort whose result was already printed (JSON mode).
    pub fn silent() -> Self {
        Self { code: EXIT_ERROR, message: String::new() }
    }

    /// Malformed invocation: the unknown-error line, or its JSON form.
    pub fn invocation(detail: impl Into<String>, lang: Lang, json: bool) -> Self {
        let detail = detail.into();
        log::debug!("invalid invocation: {detail}");
        if json {
            print_json(&RunErrorOutput::invocation(detail, lang));
            Self::silent()
        } else {
            Self::abort(messages::unknown_error(lang))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = match Cli::try_parse() {
        Ok(cli) => cmd_run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Ok(())
        }
        Err(e) => {
            let json = std::env::args_os().any(|arg| arg == "--json");
            let lang = flag_lang(std::env::var("CALCSALES_LANG").ok().as_deref()).unwrap_or_default();
            Err(CliError::invocation(e.to_string(), lang, json))
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message }) => {
            if !message.is_empty() {
                eprintln!("{}", message);
            }
            ExitCode::from(code)
        }
    }
}

// ============================================================================
// run
// ============================================================================

fn cmd_run(cli: Cli) -> Result<(), CliError> {
    let cli_lang = flag_lang(cli.lang.as_deref());

    let settings = match &cli.config {
        Some(path) => FileSettings::load(path)
            .map_err(|e| CliError::invocation(e, cli_lang.unwrap_or_default(), cli.json))?,
        None => FileSettings::default(),
    };

    let lang = cli_lang.or_else(|| settings.lang()).unwrap_or_default();

    let [dir] = cli.dirs.as_slice() else {
        return Err(CliError::invocation(
            format!("expected exactly one directory, got {}", cli.dirs.len()),
            lang,
            cli.json,
        ));
    };

    let mode = if cli.commodity {
        AggregationMode::BranchAndCommodity
    } else {
        settings.mode
    };
    let config = SalesConfig::new(mode);

    match calcsales_engine::run(dir, &config) {
        Ok(report) => {
            log::info!("processed {} record file(s) in {}", report.records_processed, dir.display());
            if cli.json {
                print_json(&RunOutput::from_report(report));
            }
            Ok(())
        }
        Err(err) => {
            log::debug!("run failed: {err}");
            if cli.json {
                print_json(&RunErrorOutput::from_sales_error(&err, lang));
                Err(CliError::silent())
            } else {
                Err(CliError::abort(messages::render(&err, lang)))
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => log::error!("JSON serialization error: {e}"),
    }
}
