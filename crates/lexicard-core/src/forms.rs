//! Heuristic surface forms of a looked-up word.
//!
//! There is no morphological analyzer here: a per-language suffix list is
//! stripped from and appended to the word. This over-generates on purpose;
//! a spurious form rarely occurs in real running text.

use std::collections::{HashMap, HashSet};

use lexicard_config::suffixes::SuffixConfig;
use lexicard_types::Language;

use crate::error::{CoreError, Result};

/// Produces the spellings to search for when highlighting a word
pub trait FormGenerator: Send + Sync {
    fn generate_forms(&self, word: &str) -> CandidateForms;
}

/// Ordered, duplicate-free set of spellings; the word itself comes first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateForms {
    forms: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateForms {
    pub fn new(word: &str) -> Self {
        let mut forms = Self {
            forms: Vec::new(),
            seen: HashSet::new(),
        };
        forms.insert(word.to_string());
        forms
    }

    pub fn insert(&mut self, form: String) {
        if self.seen.insert(form.clone()) {
            self.forms.push(form);
        }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.seen.contains(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// Longest first, so a short form never pre-empts a longer one sharing its prefix
    pub fn longest_first(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        sorted
    }
}

#[derive(Debug, Clone)]
pub struct SuffixTable {
    language: Language,
    suffixes: Vec<String>,
    /// `running` → `run` rather than `runn` when a vowel-initial suffix is stripped
    undouble_consonants: bool,
}

impl SuffixTable {
    /// Rejects an empty table, empty suffixes and duplicates
    pub fn new(language: Language, suffixes: Vec<String>) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidSuffixTable {
            language,
            reason: reason.to_string(),
        };

        if suffixes.is_empty() {
            return Err(invalid("no suffixes"));
        }
        if suffixes.iter().any(|s| s.is_empty()) {
            return Err(invalid("empty suffix"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = suffixes.iter().find(|s| !seen.insert(s.as_str())) {
            return Err(invalid(&format!("duplicate suffix {dup:?}")));
        }

        Ok(Self {
            language,
            suffixes,
            undouble_consonants: language == Language::En,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn stem(&self, word: &str, suffix: &str) -> Option<String> {
        let stem = word.strip_suffix(suffix).filter(|s| !s.is_empty())?;
        if self.undouble_consonants && starts_with_vowel(suffix) {
            if let Some(undoubled) = undouble(stem) {
                return Some(undoubled);
            }
        }
        Some(stem.to_string())
    }
}

impl FormGenerator for SuffixTable {
    fn generate_forms(&self, word: &str) -> CandidateForms {
        let mut forms = CandidateForms::new(word);
        let mut matched = false;

        for (i, suffix) in self.suffixes.iter().enumerate() {
            let Some(stem) = self.stem(word, suffix) else {
                continue;
            };
            matched = true;
            forms.insert(stem.clone());
            for (j, other) in self.suffixes.iter().enumerate() {
                if i != j {
                    forms.insert(format!("{stem}{other}"));
                }
            }
        }

        if !matched {
            for suffix in &self.suffixes {
                forms.insert(format!("{word}{suffix}"));
            }
        }

        forms
    }
}

/// One validated table per language, built once at startup
#[derive(Debug, Clone)]
pub struct SuffixTables {
    tables: HashMap<Language, SuffixTable>,
}

impl SuffixTables {
    pub fn from_config(config: &SuffixConfig) -> Result<Self> {
        let mut tables = HashMap::new();
        for (language, suffixes) in config.iter() {
            tables.insert(language, SuffixTable::new(language, suffixes.to_vec())?);
        }
        Ok(Self { tables })
    }

    pub fn get(&self, language: Language) -> Result<&SuffixTable> {
        self.tables
            .get(&language)
            .ok_or(CoreError::MissingSuffixTable(language))
    }

    pub fn generate_forms(&self, word: &str, language: Language) -> Result<CandidateForms> {
        Ok(self.get(language)?.generate_forms(word))
    }
}

fn starts_with_vowel(suffix: &str) -> bool {
    suffix
        .chars()
        .next()
        .is_some_and(is_vowel)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `runn` → `run`, only when a consonant-vowel-consonant base is left.
/// Base doublings like `fill`, `dress` or `add` are left alone.
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    let vowel = chars.next()?;
    let onset = chars.next()?;
    let doubled = last == before
        && last.is_ascii_alphabetic()
        && !is_vowel(last)
        && !matches!(last, 'l' | 's' | 'f' | 'z')
        && is_vowel(vowel)
        && onset.is_ascii_alphabetic()
        && !is_vowel(onset);
    doubled.then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(language: Language, suffixes: &[&str]) -> SuffixTable {
        SuffixTable::new(language, suffixes.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn english() -> SuffixTable {
        table(Language::En, &["s", "ed", "er", "ing", "ly"])
    }

    #[test]
    fn test_running() {
        let forms = english().generate_forms("running");
        for expected in ["running", "run", "runs", "runed", "runer", "runly"] {
            assert!(forms.contains(expected), "missing {expected}");
        }
        assert_eq!(forms.len(), 2 + (5 - 1));
    }

    #[test]
    fn test_no_suffix_match_appends_every_suffix() {
        let forms = english().generate_forms("walk");
        assert_eq!(forms.len(), 1 + 5);
        assert_eq!(
            forms.iter().collect::<Vec<_>>(),
            ["walk", "walks", "walked", "walker", "walking", "walkly"]
        );
    }

    #[test]
    fn test_single_suffix_cardinality() {
        let forms = table(Language::Fr, &["s", "e", "aux"]).generate_forms("chevaux");
        assert_eq!(forms.len(), 2 + (3 - 1));
        assert!(forms.contains("chev"));
        assert!(forms.contains("chevs"));
        assert!(forms.contains("cheve"));
    }

    #[test]
    fn test_several_matching_suffixes() {
        // "es" and "s" both match
        let forms = table(Language::Fr, &["s", "es"]).generate_forms("belles");
        assert!(forms.contains("belle"));
        assert!(forms.contains("bell"));
        assert!(forms.contains("bellees"));
        assert!(forms.contains("bells"));
    }

    #[test]
    fn test_doubling_only_for_english() {
        let stopped = english().generate_forms("stopped");
        assert!(stopped.contains("stop"));

        let filled = english().generate_forms("filled");
        assert!(filled.contains("fill"));

        let committed = english().generate_forms("committed");
        assert!(committed.contains("commit"));
        assert!(committed.contains("commits"));

        let spanish = table(Language::Es, &["o", "a"]).generate_forms("carro");
        assert!(spanish.contains("carr"));
        assert!(!spanish.contains("car"));
    }

    #[test]
    fn test_short_doubled_bases_keep_both_letters() {
        let added = english().generate_forms("added");
        for form in ["added", "add", "adds", "adding"] {
            assert!(added.contains(form), "missing {form}");
        }
        assert!(!added.contains("ad"));
        assert!(!added.contains("ads"));

        for (word, base) in [("odds", "odd"), ("ebbing", "ebb")] {
            let forms = english().generate_forms(word);
            assert!(forms.contains(base), "{word}: missing {base}");
            assert!(!forms.contains(&base[..2]), "{word}: halved");
        }
    }

    #[test]
    fn test_word_equal_to_suffix_is_not_stripped() {
        let forms = english().generate_forms("s");
        assert!(!forms.contains(""));
        assert_eq!(forms.len(), 1 + 5);
    }

    #[test]
    fn test_longest_first() {
        let forms = english().generate_forms("run");
        assert_eq!(forms.longest_first()[0], "running");
        assert_eq!(forms.longest_first().last(), Some(&"run"));
    }

    #[test]
    fn test_invalid_tables() {
        assert!(SuffixTable::new(Language::De, vec![]).is_err());
        assert!(SuffixTable::new(Language::De, vec!["".into()]).is_err());
        let err = SuffixTable::new(Language::De, vec!["e".into(), "e".into()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid suffix table for de: duplicate suffix \"e\"");
    }

    #[test]
    fn test_tables_from_config() {
        let tables = SuffixTables::from_config(&SuffixConfig::default()).unwrap();
        for language in Language::ALL {
            assert!(tables.get(language).is_ok());
        }
        let forms = tables.generate_forms("casa", Language::Pt).unwrap();
        assert!(forms.contains("casas"));
    }
}
