use std::fmt;

use serde::Serialize;

use crate::category::Category;

#[derive(Debug)]
pub enum SalesError {
    /// Unexpected IO fault or malformed invocation.
    Unknown(String),
    /// A file handle could not be released cleanly.
    Release { file: String, reason: String },
    /// Dictionary file is absent.
    NotFound(Category),
    /// Dictionary line is not `code,name` or the code has the wrong shape.
    InvalidFormat { category: Category, line: usize },
    /// Record filenames do not step by exactly one.
    NonConsecutiveFiles { former: String, latter: String },
    /// Record file has the wrong number of lines.
    RecordFormat { file: String, lines: usize },
    /// Record references a code missing from its dictionary.
    UnknownCode { category: Category, file: String, code: String },
    /// Amount line is not all digits.
    MalformedAmount { file: String, value: String },
    /// A running total reached the ten digit ceiling.
    TotalOverflow { file: String, category: Category, code: String },
    /// Summary file could not be written.
    Write { file: String, reason: String },
}

/// Classification handed to whoever renders the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    UnknownError,
    NotFound,
    InvalidFormat,
    NonConsecutiveFiles,
    RecordFormatError,
    UnknownCode,
    MalformedAmount,
    TotalOverflow,
    WriteError,
}

impl SalesError {
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Unknown(_) | Self::Release { .. } => FaultKind::UnknownError,
            Self::NotFound(_) => FaultKind::NotFound,
            Self::InvalidFormat { .. } => FaultKind::InvalidFormat,
            Self::NonConsecutiveFiles { .. } => FaultKind::NonConsecutiveFiles,
            Self::RecordFormat { .. } => FaultKind::RecordFormatError,
            Self::UnknownCode { .. } => FaultKind::UnknownCode,
            Self::MalformedAmount { .. } => FaultKind::MalformedAmount,
            Self::TotalOverflow { .. } => FaultKind::TotalOverflow,
            Self::Write { .. } => FaultKind::WriteError,
        }
    }

    /// Category the fault is about, when there is one.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::NotFound(category)
            | Self::InvalidFormat { category, .. }
            | Self::UnknownCode { category, .. }
            | Self::TotalOverflow { category, .. } => Some(*category),
            _ => None,
        }
    }

    /// File the fault names, when there is one.
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Release { file, .. }
            | Self::RecordFormat { file, .. }
            | Self::UnknownCode { file, .. }
            | Self::MalformedAmount { file, .. }
            | Self::TotalOverflow { file, .. }
            | Self::Write { file, .. } => Some(file.as_str()),
            _ => None,
        }
    }

    pub(crate) fn io(context: impl fmt::Display, err: std::io::Error) -> Self {
        Self::Unknown(format!("{context}: {err}"))
    }
}

impl fmt::Display for SalesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(msg) => write!(f, "unexpected error: {msg}"),
            Self::Release { file, reason } => write!(f, "cannot release '{file}': {reason}"),
            Self::NotFound(category) => {
                write!(f, "{} definition file '{}' does not exist", category, category.list_file())
            }
            Self::InvalidFormat { category, line } => {
                write!(f, "{} definition file '{}', line {line}: invalid format", category, category.list_file())
            }
            Self::NonConsecutiveFiles { former, latter } => {
                write!(f, "sales files are not consecutive: '{former}' is followed by '{latter}'")
            }
            Self::RecordFormat { file, lines } => {
                write!(f, "'{file}': invalid format ({lines} line(s))")
            }
            Self::UnknownCode { category, file, code } => {
                write!(f, "'{file}': unknown {category} code '{code}'")
            }
            Self::MalformedAmount { file, value } => {
                write!(f, "'{file}': malformed amount '{value}'")
            }
            Self::TotalOverflow { file, category, code } => {
                write!(f, "'{file}': total for {category} '{code}' exceeds 10 digits")
            }
            Self::Write { file, reason } => write!(f, "cannot write '{file}': {reason}"),
        }
    }
}

impl std::error::Error for SalesError {}
