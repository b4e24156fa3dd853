//! CLI Exit Code Registry
//!
//! Exit codes are part of the shell contract. A run either completes or
//! aborts; every abort uses the same code, whatever the fault. Scripts that
//! need the reason should pass `--json` and read `error`.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Run reached Done, summaries written       |
//! | 1    | Run aborted (any fault, bad invocation)   |

use std::path::PathBuf;

use calcsales_engine::{AggregationMode, FaultKind, RunReport, SalesError};
use calcsales_cli::messages::{render, unknown_error, Lang};

/// Success - every summary file was written.
pub const EXIT_SUCCESS: u8 = 0;

/// Abort - the run stopped at its first fault.
pub const EXIT_ERROR: u8 = 1;

// =============================================================================
// JSON output
// =============================================================================

/// Machine-readable result of a completed run (`--json`).
#[derive(Debug, serde::Serialize)]
pub struct RunOutput {
    pub status: &'static str,
    pub mode: AggregationMode,
    pub records_processed: usize,
    pub outputs: Vec<PathBuf>,
}

impl RunOutput {
    pub fn from_report(report: RunReport) -> Self {
        Self {
            status: "ok",
            mode: report.mode,
            records_processed: report.records_processed,
            outputs: report.outputs,
        }
    }
}

/// Machine-readable fault (`--json`). `message` is the localized line.
#[derive(Debug, serde::Serialize)]
pub struct RunErrorOutput {
    pub status: &'static str,
    pub error: FaultKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub detail: String,
    pub exit_code: u8,
}

impl RunErrorOutput {
    pub fn from_sales_error(err: &SalesError, lang: Lang) -> Self {
        Self {
            status: "error",
            error: err.kind(),
            message: render(err, lang),
            file: err.file().map(str::to_string),
            detail: err.to_string(),
            exit_code: EXIT_ERROR,
        }
    }

    /// Malformed invocation (argument count, unreadable config).
    pub fn invocation(detail: impl Into<String>, lang: Lang) -> Self {
        Self {
            status: "error",
            error: FaultKind::UnknownError,
            message: unknown_error(lang).to_string(),
            file: None,
            detail: detail.into(),
            exit_code: EXIT_ERROR,
        }
    }
}
