// Front-end settings read from `--config <path>` (TOML)

use std::path::Path;

use serde::Deserialize;

use calcsales_engine::AggregationMode;

use crate::messages::Lang;

/// Both keys are optional; command-line flags win over them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(default)]
    pub mode: AggregationMode,
    #[serde(default)]
    pub lang: Option<String>,
}

impl FileSettings {
    pub fn from_toml(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| format!("config parse error: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
        Self::from_toml(&text)
    }

    /// `lang` as a `Lang`; an unrecognised value is ignored.
    pub fn lang(&self) -> Option<Lang> {
        let value = self.lang.as_deref()?;
        let lang = Lang::parse(value);
        if lang.is_none() {
            log::info!("config: unknown lang '{value}', using default");
        }
        lang
    }
}

/// Resolve the language from a raw `--lang` / `CALCSALES_LANG` value.
/// Unrecognised values fall back like an unknown `lang` in the config file.
pub fn flag_lang(value: Option<&str>) -> Option<Lang> {
    let value = value?;
    let lang = Lang::parse(value);
    if lang.is_none() {
        log::info!("unknown lang '{value}', using default");
    }
    lang
}
