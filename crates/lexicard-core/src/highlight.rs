//! Marking occurrences of a looked-up word inside its definition.

use std::sync::LazyLock;

use lexicard_types::PresentationMode;
use regex::Regex;

use crate::error::{CoreError, Result};
use crate::forms::CandidateForms;

/// Dot-separated syllable spellings such as `sel·va·gem`
static SYLLABIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\w+·)+\w+\b").expect("valid syllable pattern"));

/// Per-dictionary oddities the highlighter has to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quirk {
    /// Headwords are also printed split into syllables, which would give a
    /// redacted word away
    SyllabifiedHeadwords,
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    placeholder: String,
}

impl Highlighter {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Wraps every occurrence of a candidate form in `<b>` (Reveal) or swaps
    /// it for the bold placeholder (Redact).
    ///
    /// A form only matches as a whole token: after start-of-text or
    /// whitespace, and before whitespace, `.`, `,`, `:`, `?` or end-of-text.
    /// The boundaries themselves are left in place.
    /// All forms go into one alternation, longest first, applied in a single
    /// pass, so markup inserted for one form is never matched by another.
    pub fn apply(
        &self,
        text: &str,
        forms: &CandidateForms,
        mode: PresentationMode,
        quirk: Option<Quirk>,
    ) -> Result<String> {
        let text = match (mode, quirk) {
            (PresentationMode::Redact, Some(Quirk::SyllabifiedHeadwords)) => {
                SYLLABIFIED.replace_all(text, "").into_owned()
            }
            _ => text.to_string(),
        };

        let alternatives: Vec<String> = forms
            .longest_first()
            .into_iter()
            .map(str::trim)
            .filter(|form| !form.is_empty())
            .map(regex::escape)
            .collect();
        if alternatives.is_empty() {
            return Ok(text);
        }

        let pattern = format!(r"(?i)(?:^|\s)({})(?:[\s.,:?]|$)", alternatives.join("|"));
        let regex = Regex::new(&pattern).map_err(|source| CoreError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;
        // Resume right after each form so its trailing boundary can open the next match
        while let Some(caps) = regex.captures_at(&text, last) {
            let Some(form) = caps.get(1) else {
                break;
            };
            out.push_str(&text[last..form.start()]);
            out.push_str("<b>");
            match mode {
                PresentationMode::Reveal => out.push_str(form.as_str()),
                PresentationMode::Redact => out.push_str(&self.placeholder),
            }
            out.push_str("</b>");
            last = form.end();
        }
        out.push_str(&text[last..]);

        Ok(out)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new("(...)")
    }
}
