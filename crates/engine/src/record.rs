use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::Category;
use crate::dictionary::EntityDictionary;
use crate::error::SalesError;

static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// One validated record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub file_name: String,
    pub branch_code: String,
    pub commodity_code: Option<String>,
    pub amount: u64,
}

/// Read every line of a record file. The handle is closed before returning.
pub fn read_record_lines(path: &Path) -> Result<Vec<String>, SalesError> {
    let file = File::open(path).map_err(|e| SalesError::io(path.display(), e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SalesError::io(path.display(), e))
}

/// Check a record file's lines against the loaded dictionaries.
///
/// Without a commodity dictionary the file must be `branch, amount`; with one
/// it must be `branch, commodity, amount`. Checks run in that order and the
/// first failure is returned.
pub fn validate_record(
    file_name: &str,
    lines: &[String],
    branches: &EntityDictionary,
    commodities: Option<&EntityDictionary>,
) -> Result<RecordFile, SalesError> {
    let expected = if commodities.is_some() { 3 } else { 2 };
    if lines.len() != expected {
        return Err(SalesError::RecordFormat {
            file: file_name.to_string(),
            lines: lines.len(),
        });
    }

    let branch_code = &lines[0];
    if !branches.contains(branch_code) {
        return Err(SalesError::UnknownCode {
            category: Category::Branch,
            file: file_name.to_string(),
            code: branch_code.clone(),
        });
    }

    let commodity_code = match commodities {
        Some(dict) => {
            let code = &lines[1];
            if !dict.contains(code) {
                return Err(SalesError::UnknownCode {
                    category: Category::Commodity,
                    file: file_name.to_string(),
                    code: code.clone(),
                });
            }
            Some(code.clone())
        }
        None => None,
    };

    let raw_amount = &lines[expected - 1];
    if !AMOUNT.is_match(raw_amount) {
        return Err(SalesError::MalformedAmount {
            file: file_name.to_string(),
            value: raw_amount.clone(),
        });
    }
    // All digits but wider than u64: far past the ceiling already.
    let amount = raw_amount.parse::<u64>().map_err(|_| SalesError::TotalOverflow {
        file: file_name.to_string(),
        category: Category::Branch,
        code: branch_code.clone(),
    })?;

    Ok(RecordFile {
        file_name: file_name.to_string(),
        branch_code: branch_code.clone(),
        commodity_code,
        amount,
    })
}
