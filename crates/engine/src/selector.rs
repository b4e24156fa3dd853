use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SalesError;

static RECORD_FILE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8}\.rcd$").unwrap());

/// Whether `name` is an 8-digit `.rcd` record filename.
pub fn is_record_file_name(name: &str) -> bool {
    RECORD_FILE_NAME.is_match(name)
}

/// List record files in `dir`, sorted by name and checked for gaps.
///
/// Subdirectories are skipped even when their name matches. An empty result is
/// not an error.
pub fn select_record_files(dir: &Path) -> Result<Vec<PathBuf>, SalesError> {
    let selected = list_record_files(dir)?;
    let names: Vec<&str> = selected.iter().map(|(name, _)| name.as_str()).collect();
    check_sequence(&names)?;
    Ok(selected.into_iter().map(|(_, path)| path).collect())
}

/// Record files in `dir` as `(name, path)`, sorted by name. Gaps are not
/// checked here.
pub fn list_record_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, SalesError> {
    let entries = fs::read_dir(dir).map_err(|e| SalesError::io(dir.display(), e))?;

    let mut selected: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SalesError::io(dir.display(), e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !is_record_file_name(&name) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            selected.push((name, path));
        }
    }

    selected.sort_by(|a, b| a.0.cmp(&b.0));

    log::debug!("selected {} record file(s) in {}", selected.len(), dir.display());
    Ok(selected)
}

/// Every adjacent pair of sorted record names must step by exactly one.
pub fn check_sequence(names: &[&str]) -> Result<(), SalesError> {
    for pair in names.windows(2) {
        let (former, latter) = (pair[0], pair[1]);
        let consecutive = match (sequence_number(former), sequence_number(latter)) {
            (Some(a), Some(b)) => a.checked_add(1) == Some(b),
            _ => false,
        };
        if !consecutive {
            return Err(SalesError::NonConsecutiveFiles {
                former: former.to_string(),
                latter: latter.to_string(),
            });
        }
    }
    Ok(())
}

/// Numeric prefix of a record filename.
fn sequence_number(name: &str) -> Option<u32> {
    name.get(..8)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_name_pattern() {
        assert!(is_record_file_name("00000001.rcd"));
        assert!(!is_record_file_name("0000001.rcd"));
        assert!(!is_record_file_name("000000001.rcd"));
        assert!(!is_record_file_name("00000001.RCD"));
        assert!(!is_record_file_name("00000001xrcd"));
        assert!(!is_record_file_name("00000001.rcd.bak"));
        assert!(!is_record_file_name("0000000a.rcd"));
    }

    #[test]
    fn contiguous_run_passes() {
        assert!(check_sequence(&["00000001.rcd", "00000002.rcd", "00000003.rcd"]).is_ok());
        assert!(check_sequence(&["00000041.rcd", "00000042.rcd"]).is_ok());
    }

    #[test]
    fn empty_and_single_pass() {
        assert!(check_sequence(&[]).is_ok());
        assert!(check_sequence(&["00000007.rcd"]).is_ok());
    }

    #[test]
    fn gap_fails() {
        let err = check_sequence(&["00000001.rcd", "00000003.rcd"]).unwrap_err();
        match err {
            SalesError::NonConsecutiveFiles { former, latter } => {
                assert_eq!(former, "00000001.rcd");
                assert_eq!(latter, "00000003.rcd");
            }
            other => panic!("expected NonConsecutiveFiles, got {other:?}"),
        }
    }

    #[test]
    fn carry_across_digits_is_consecutive() {
        assert!(check_sequence(&["00000099.rcd", "00000100.rcd"]).is_ok());
        assert!(check_sequence(&["09999999.rcd", "10000000.rcd"]).is_ok());
    }

    #[test]
    fn selection_skips_directories_and_other_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("00000002.rcd"), "101\n10\n").unwrap();
        fs::write(dir.path().join("00000001.rcd"), "101\n10\n").unwrap();
        fs::write(dir.path().join("00000003.txt"), "ignored").unwrap();
        fs::write(dir.path().join("branch.lst"), "101,Tokyo\n").unwrap();
        fs::create_dir(dir.path().join("00000003.rcd")).unwrap();

        let files = select_record_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["00000001.rcd", "00000002.rcd"]);
    }

    #[test]
    fn listing_keeps_gaps_for_the_sequence_check() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("00000003.rcd"), "101\n10\n").unwrap();
        fs::write(dir.path().join("00000001.rcd"), "101\n10\n").unwrap();

        let listed = list_record_files(dir.path()).unwrap();
        let names: Vec<&str> = listed.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["00000001.rcd", "00000003.rcd"]);

        let err = select_record_files(dir.path()).unwrap_err();
        assert!(matches!(err, SalesError::NonConsecutiveFiles { .. }));
    }

    #[test]
    fn missing_directory_is_unknown_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = select_record_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, SalesError::Unknown(_)));
    }
}
