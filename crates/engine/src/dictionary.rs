use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::category::Category;
use crate::error::SalesError;

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Code → display name, iterated in the order entries were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl EntityDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false (and changes nothing) if the code is already present.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) -> bool {
        let code = code.into();
        if self.index.contains_key(&code) {
            return false;
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push((code, name.into()));
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.index.get(code).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

/// Running totals keyed by the same codes as the dictionary they were seeded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesTotals {
    totals: HashMap<String, u64>,
}

impl SalesTotals {
    /// Zero for every code in `dictionary`, nothing else.
    pub fn seeded_from(dictionary: &EntityDictionary) -> Self {
        Self {
            totals: dictionary.codes().map(|code| (code.to_string(), 0)).collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<u64> {
        self.totals.get(code).copied()
    }

    /// Overwrites an existing total. Unknown codes are refused so the key set never grows.
    pub(crate) fn set(&mut self, code: &str, total: u64) -> bool {
        match self.totals.get_mut(code) {
            Some(slot) => {
                *slot = total;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load `<dir>/<category>.lst` and seed zero totals for every code in it.
pub fn load_dictionary(
    dir: &Path,
    category: Category,
) -> Result<(EntityDictionary, SalesTotals), SalesError> {
    let path = dir.join(category.list_file());
    if !path.exists() {
        return Err(SalesError::NotFound(category));
    }

    let file = File::open(&path).map_err(|e| SalesError::io(path.display(), e))?;
    let dictionary = parse_dictionary(BufReader::new(file), category)?;
    let totals = SalesTotals::seeded_from(&dictionary);

    log::debug!("loaded {} {} code(s) from {}", dictionary.len(), category, path.display());
    Ok((dictionary, totals))
}

/// Parse `code,name` lines. Stops at the first bad line.
pub fn parse_dictionary<R: BufRead>(
    reader: R,
    category: Category,
) -> Result<EntityDictionary, SalesError> {
    let mut dictionary = EntityDictionary::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SalesError::io(category.list_file(), e))?;
        let invalid = || SalesError::InvalidFormat { category, line: i + 1 };

        let fields: Vec<&str> = line.split(',').collect();
        let &[code, name] = fields.as_slice() else {
            return Err(invalid());
        };
        if !category.is_valid_code(code) || name.is_empty() {
            return Err(invalid());
        }
        if !dictionary.insert(code, name) {
            return Err(invalid());
        }
    }

    Ok(dictionary)
}
