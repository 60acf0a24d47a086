use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::highlight::HighlightConfig;
use self::suffixes::SuffixConfig;

pub mod dictionary;
pub mod highlight;
pub mod suffixes;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub highlight: HighlightConfig,
    pub suffixes: SuffixConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(placeholder) = env::var("LEXICARD_PLACEHOLDER") {
            config.highlight.placeholder = placeholder;
        }

        if let Ok(line_break) = env::var("LEXICARD_LINE_BREAK") {
            config.highlight.line_break = line_break;
        }

        if let Some(language) = env::var("LEXICARD_LANGUAGE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.dictionary.language = language;
        }

        if let Some(id) = env::var("LEXICARD_DICTIONARY_ID")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.dictionary.id = id;
        }

        config
    }

    /// Load a JSON profile; missing sections fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use lexicard_types::Language;

    use super::*;

    #[test]
    fn test_empty_profile_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.highlight.placeholder, "(...)");
        assert_eq!(config.highlight.line_break, "<br>");
        assert_eq!(config.dictionary.language, Language::En);
        assert_eq!(config.dictionary.id, 1);
        assert_eq!(config.suffixes.get(Language::En).map(|s| s.len()), Some(5));
    }

    #[test]
    fn test_partial_profile() {
        let json = r#"{
            "highlight": { "placeholder": "[?]" },
            "dictionary": { "language": "pt" },
            "suffixes": { "en": ["s", "es"] }
        }"#;
        let config = Config::from_json(json).unwrap();

        assert_eq!(config.highlight.placeholder, "[?]");
        assert_eq!(config.highlight.line_break, "<br>");
        assert_eq!(config.dictionary.language, Language::Pt);
        assert_eq!(config.dictionary.id, 1);
        assert_eq!(
            config.suffixes.get(Language::En),
            Some(&["s".to_string(), "es".to_string()][..])
        );
        // Languages absent from the profile keep their built-in table
        assert!(config.suffixes.get(Language::Fr).is_some());
    }

    #[test]
    fn test_profile_round_trip() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        let loaded = Config::from_json(&json).unwrap();
        assert_eq!(loaded.suffixes, config.suffixes);
    }
}
