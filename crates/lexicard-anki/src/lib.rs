mod template;

pub use template::CardTemplate;

use anyhow::{Context, Result};
use lexicard_config::Config;
use lexicard_core::{CandidateForms, Definition, DictionaryRuleset, Engine, Highlighter};
use lexicard_types::{DictionaryKey, PresentationMode};
use serde::{Deserialize, Serialize};

/// A: word on the front, definition on the back.
/// B: redacted definition on the front, word on the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    A,
    B,
}

impl From<CardType> for PresentationMode {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::A => PresentationMode::Reveal,
            CardType::B => PresentationMode::Redact,
        }
    }
}

/// A looked-up word, the book passage it came from and the dictionary page
/// fetched for it
#[derive(Debug, Clone)]
pub struct WordEntry {
    pub word: String,
    pub usage: String,
    pub page: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, usage: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            usage: usage.into(),
            page: page.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFields {
    pub word: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWord {
    pub word: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct AssemblyReport {
    pub cards: Vec<CardFields>,
    /// Words the dictionary had no entry for
    pub skipped: Vec<String>,
    pub failed: Vec<FailedWord>,
}

/// Bolds every verbatim occurrence of `word` in a book passage
pub fn mark_usage(passage: &str, word: &str) -> Result<String> {
    let forms = CandidateForms::new(word);
    let marked = Highlighter::default().apply(passage, &forms, PresentationMode::Reveal, None)?;
    Ok(marked)
}

/// Turns dictionary pages into card fronts and backs for one dictionary
pub struct CardAssembler<'a> {
    engine: &'a Engine,
    ruleset: &'a DictionaryRuleset,
    key: DictionaryKey,
    card_type: CardType,
    template: CardTemplate,
    line_break: String,
}

impl<'a> CardAssembler<'a> {
    /// Fails with `UnknownRuleset` when `key` names no dictionary
    pub fn new(
        engine: &'a Engine,
        config: &Config,
        key: DictionaryKey,
        card_type: CardType,
    ) -> lexicard_core::Result<Self> {
        let ruleset = engine.ruleset(key)?;
        Ok(Self {
            engine,
            ruleset,
            key,
            card_type,
            template: CardTemplate::for_card_type(card_type),
            line_break: config.highlight.line_break.clone(),
        })
    }

    pub fn with_template(mut self, template: CardTemplate) -> Self {
        self.template = template;
        self
    }

    /// One card per word with a definition. A word that fails never stops
    /// the others.
    pub fn assemble(&self, entries: &[WordEntry]) -> AssemblyReport {
        let mut report = AssemblyReport::default();

        for entry in entries {
            match self.card(entry) {
                Ok(Some(card)) => report.cards.push(card),
                Ok(None) => {
                    tracing::warn!("No definition found for {}, skipping", entry.word);
                    report.skipped.push(entry.word.clone());
                }
                Err(e) => {
                    tracing::warn!("Failed to build card for {}: {e:#}", entry.word);
                    report.failed.push(FailedWord {
                        word: entry.word.clone(),
                        reason: format!("{e:#}"),
                    });
                }
            }
        }

        tracing::info!(
            "Assembled {} cards ({} skipped, {} failed)",
            report.cards.len(),
            report.skipped.len(),
            report.failed.len()
        );
        report
    }

    fn card(&self, entry: &WordEntry) -> Result<Option<CardFields>> {
        let word = entry.word.as_str();
        let Definition::Found(text) = self.ruleset.define(&entry.page, word) else {
            return Ok(None);
        };

        // Newlines are swapped out last so words at a line start still match
        let definition = self
            .engine
            .present(
                &text,
                word,
                self.key.language,
                self.card_type.into(),
                self.ruleset.quirk,
            )
            .context("Highlighting definition")?
            .replace('\n', &self.line_break);
        let usage = mark_usage(&entry.usage, word)
            .context("Highlighting usage")?
            .replace('\n', &self.line_break);

        Ok(Some(CardFields {
            word: word.to_string(),
            front: self.template.format_front(word, &usage, &definition),
            back: self.template.format_back(word, &usage, &definition),
        }))
    }
}

#[cfg(test)]
mod tests {
    use lexicard_core::CoreError;
    use lexicard_types::Language;
    use pretty_assertions::assert_eq;

    use super::*;

    const LAROUSSE_PAGE: &str = r#"<div id="BlocArticle">
        <div class="itemZONESEM">to run: courir</div>
        <div class="itemZONESEM">runs away: s'enfuir</div>
    </div>"#;

    fn engine() -> Engine {
        Engine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_card_type_a() {
        let engine = engine();
        let assembler = CardAssembler::new(
            &engine,
            &Config::default(),
            DictionaryKey::new(Language::En, 3),
            CardType::A,
        )
        .unwrap();
        let entry = WordEntry::new("run", "She had to run\nhome.", LAROUSSE_PAGE);
        let report = assembler.assemble(&[entry]);

        assert_eq!(report.cards.len(), 1);
        let card = &report.cards[0];
        assert_eq!(card.front, "<b>run</b><br><br>She had to <b>run</b><br>home.");
        assert_eq!(
            card.back,
            "1. to <b>run</b>: courir<br><br>2. <b>runs</b> away: s'enfuir"
        );
    }

    #[test]
    fn test_card_type_b_redacts_front() {
        let engine = engine();
        let assembler = CardAssembler::new(
            &engine,
            &Config::default(),
            DictionaryKey::new(Language::En, 3),
            CardType::B,
        )
        .unwrap();
        let report = assembler.assemble(&[WordEntry::new("run", "I run.", LAROUSSE_PAGE)]);

        let card = &report.cards[0];
        assert_eq!(
            card.front,
            "1. to <b>(...)</b>: courir<br><br>2. <b>(...)</b> away: s'enfuir"
        );
        assert_eq!(card.back, "<b>run</b><br><br>I <b>run</b>.");
    }

    #[test]
    fn test_missing_definitions_are_skipped() {
        let engine = engine();
        let assembler = CardAssembler::new(
            &engine,
            &Config::default(),
            DictionaryKey::new(Language::En, 3),
            CardType::A,
        )
        .unwrap();
        let report = assembler.assemble(&[
            WordEntry::new("xyzzy", "a xyzzy", "<html><body></body></html>"),
            WordEntry::new("run", "run", LAROUSSE_PAGE),
        ]);

        assert_eq!(report.skipped, ["xyzzy"]);
        assert_eq!(report.cards.len(), 1);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_unknown_dictionary_is_rejected_up_front() {
        let engine = engine();
        let assembler = CardAssembler::new(
            &engine,
            &Config::default(),
            DictionaryKey::new(Language::De, 1),
            CardType::A,
        );
        assert!(matches!(
            assembler,
            Err(CoreError::UnknownRuleset {
                language: Language::De,
                id: 1
            })
        ));
    }

    #[test]
    fn test_custom_line_break() {
        let engine = engine();
        let mut config = Config::default();
        config.highlight.line_break = "\n".to_string();
        let assembler = CardAssembler::new(
            &engine,
            &config,
            DictionaryKey::new(Language::En, 3),
            CardType::A,
        )
        .unwrap();
        let report = assembler.assemble(&[WordEntry::new("run", "run", LAROUSSE_PAGE)]);
        assert_eq!(
            report.cards[0].back,
            "1. to <b>run</b>: courir\n\n2. <b>runs</b> away: s'enfuir"
        );
    }

    #[test]
    fn test_mark_usage() {
        assert_eq!(
            mark_usage("Run, run, rerun!", "run").unwrap(),
            "<b>Run</b>, <b>run</b>, rerun!"
        );
    }

    #[test]
    fn test_card_type_modes() {
        assert_eq!(PresentationMode::from(CardType::A), PresentationMode::Reveal);
        assert_eq!(PresentationMode::from(CardType::B), PresentationMode::Redact);
    }
}
