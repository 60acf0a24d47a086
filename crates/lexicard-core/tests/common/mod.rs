//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod fixtures;

use lexicard_config::Config;
use lexicard_core::{CandidateForms, Engine};
use lexicard_types::{DictionaryKey, Language};

pub fn engine() -> Engine {
    Engine::new(&Config::default()).unwrap()
}

pub fn key(language: Language, id: u8) -> DictionaryKey {
    DictionaryKey::new(language, id)
}

/// Every built-in dictionary
pub fn all_keys() -> Vec<DictionaryKey> {
    engine().registry().iter().map(|r| r.key).collect()
}

/// Whitespace-separated tokens that the highlighter would treat as an
/// occurrence of one of `forms`
pub fn leaked_forms<'a>(text: &'a str, forms: &CandidateForms) -> Vec<&'a str> {
    text.split_whitespace()
        .filter(|token| {
            let bare = token.trim_end_matches(['.', ',', ':', '?']).to_lowercase();
            forms.iter().any(|form| form.to_lowercase() == bare)
        })
        .collect()
}

/// Same markup with precomposed accents split into base letter + combining mark
pub fn decompose_accents(html: &str) -> String {
    html.replace('ç', "c\u{0327}")
        .replace('ã', "a\u{0303}")
        .replace('õ', "o\u{0303}")
        .replace('é', "e\u{0301}")
        .replace('í', "i\u{0301}")
        .replace('ó', "o\u{0301}")
}
