//! Localized status messages for run faults.
//!
//! The engine only classifies faults; this is the one place that turns a
//! classification into text a person reads.

use calcsales_engine::{Category, FaultKind, SalesError};
use clap::ValueEnum;

/// Message language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    /// Case-insensitive `ja` / `en`.
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).ok()
    }
}

/// The catch-all message, also used for malformed invocations.
pub fn unknown_error(lang: Lang) -> &'static str {
    match lang {
        Lang::Ja => "予期せぬエラーが発生しました",
        Lang::En => "An unexpected error has occurred",
    }
}

fn label(category: Category, lang: Lang) -> &'static str {
    match (lang, category) {
        (Lang::Ja, Category::Branch) => "支店",
        (Lang::Ja, Category::Commodity) => "商品",
        (Lang::En, Category::Branch) => "branch",
        (Lang::En, Category::Commodity) => "commodity",
    }
}

/// Render exactly one line for `err`.
pub fn render(err: &SalesError, lang: Lang) -> String {
    let category = err.category().unwrap_or(Category::Branch);
    let file = err.file().unwrap_or_default();
    let label = label(category, lang);

    match (lang, err.kind()) {
        (_, FaultKind::UnknownError) => unknown_error(lang).to_string(),

        (Lang::Ja, FaultKind::NotFound) => format!("{label}定義ファイルが存在しません"),
        (Lang::Ja, FaultKind::InvalidFormat) => format!("{label}定義ファイルのフォーマットが不正です"),
        (Lang::Ja, FaultKind::NonConsecutiveFiles) => "売上ファイル名が連番になっていません".to_string(),
        (Lang::Ja, FaultKind::RecordFormatError) => format!("{file}のフォーマットが不正です"),
        (Lang::Ja, FaultKind::UnknownCode) => format!("{file}の{label}コードが不正です"),
        (Lang::Ja, FaultKind::TotalOverflow) => "合計金額が10桁を超えました".to_string(),
        (Lang::Ja, FaultKind::MalformedAmount | FaultKind::WriteError) => unknown_error(lang).to_string(),

        (Lang::En, FaultKind::NotFound) => format!("{} definition file does not exist", capitalize(label)),
        (Lang::En, FaultKind::InvalidFormat) => {
            format!("{} definition file has an invalid format", capitalize(label))
        }
        (Lang::En, FaultKind::NonConsecutiveFiles) => "Sales file names are not consecutive".to_string(),
        (Lang::En, FaultKind::RecordFormatError) => format!("{file} has an invalid format"),
        (Lang::En, FaultKind::UnknownCode) => format!("{file} has an invalid {label} code"),
        (Lang::En, FaultKind::MalformedAmount) => format!("{file} has a malformed amount"),
        (Lang::En, FaultKind::TotalOverflow) => "Total amount exceeded 10 digits".to_string(),
        (Lang::En, FaultKind::WriteError) => format!("Could not write {file}"),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_messages() {
        let err = SalesError::NotFound(Category::Branch);
        assert_eq!(render(&err, Lang::Ja), "支店定義ファイルが存在しません");

        let err = SalesError::InvalidFormat { category: Category::Commodity, line: 3 };
        assert_eq!(render(&err, Lang::Ja), "商品定義ファイルのフォーマットが不正です");

        let err = SalesError::RecordFormat { file: "00000002.rcd".into(), lines: 1 };
        assert_eq!(render(&err, Lang::Ja), "00000002.rcdのフォーマットが不正です");

        let err = SalesError::UnknownCode {
            category: Category::Branch,
            file: "00000003.rcd".into(),
            code: "999".into(),
        };
        assert_eq!(render(&err, Lang::Ja), "00000003.rcdの支店コードが不正です");

        let err = SalesError::TotalOverflow {
            file: "00000004.rcd".into(),
            category: Category::Branch,
            code: "101".into(),
        };
        assert_eq!(render(&err, Lang::Ja), "合計金額が10桁を超えました");
    }

    #[test]
    fn japanese_falls_back_to_unknown_error() {
        let err = SalesError::MalformedAmount { file: "00000001.rcd".into(), value: "12a".into() };
        assert_eq!(render(&err, Lang::Ja), "予期せぬエラーが発生しました");

        let err = SalesError::Release { file: "branch.out".into(), reason: "EIO".into() };
        assert_eq!(render(&err, Lang::Ja), "予期せぬエラーが発生しました");
    }

    #[test]
    fn english_messages() {
        let err = SalesError::NotFound(Category::Commodity);
        assert_eq!(render(&err, Lang::En), "Commodity definition file does not exist");

        let err = SalesError::UnknownCode {
            category: Category::Commodity,
            file: "00000003.rcd".into(),
            code: "c00AAaaa".into(),
        };
        assert_eq!(render(&err, Lang::En), "00000003.rcd has an invalid commodity code");

        let err = SalesError::NonConsecutiveFiles { former: "00000001.rcd".into(), latter: "00000003.rcd".into() };
        assert_eq!(render(&err, Lang::En), "Sales file names are not consecutive");

        let err = SalesError::Write { file: "branch.out".into(), reason: "denied".into() };
        assert_eq!(render(&err, Lang::En), "Could not write branch.out");
    }

    #[test]
    fn lang_parse() {
        assert_eq!(Lang::parse("ja"), Some(Lang::Ja));
        assert_eq!(Lang::parse("EN"), Some(Lang::En));
        assert_eq!(Lang::parse("fr"), None);
    }
}
