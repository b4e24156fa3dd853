use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static BRANCH_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").unwrap());
static COMMODITY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^c[0-9]{2}[A-Z]{2}[a-z]{3}$").unwrap());

/// What a dictionary describes. Decides the file names and the code shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Branch,
    Commodity,
}

impl Category {
    pub fn list_file(&self) -> &'static str {
        match self {
            Self::Branch => "branch.lst",
            Self::Commodity => "commodity.lst",
        }
    }

    pub fn out_file(&self) -> &'static str {
        match self {
            Self::Branch => "branch.out",
            Self::Commodity => "commodity.out",
        }
    }

    /// Whether `code` has the shape this category's dictionary demands.
    pub fn is_valid_code(&self, code: &str) -> bool {
        match self {
            Self::Branch => BRANCH_CODE.is_match(code),
            Self::Commodity => COMMODITY_CODE.is_match(code),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Branch => write!(f, "branch"),
            Self::Commodity => write!(f, "commodity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_codes_are_three_digits() {
        assert!(Category::Branch.is_valid_code("001"));
        assert!(!Category::Branch.is_valid_code("01"));
        assert!(!Category::Branch.is_valid_code("0011"));
        assert!(!Category::Branch.is_valid_code("00a"));
        assert!(!Category::Branch.is_valid_code(" 001"));
    }

    #[test]
    fn commodity_codes_follow_fixed_charset() {
        assert!(Category::Commodity.is_valid_code("c01ABabc"));
        assert!(!Category::Commodity.is_valid_code("C01ABabc"));
        assert!(!Category::Commodity.is_valid_code("c01abABC"));
        assert!(!Category::Commodity.is_valid_code("c1ABabcd"));
        assert!(!Category::Commodity.is_valid_code("c01ABabcd"));
    }
}
