//! Rewriting extracted text into one consistent plain-text definition.
//!
//! A ruleset carries its rewrites as an ordered list of [`Rewrite`] steps.
//! Steps later in the list rely on earlier ones: accents are composed before
//! any pattern runs, whitespace is collapsed before structure is inserted,
//! cross-references are masked before senses are numbered.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{CoreError, Result};
use crate::extract::{Extraction, Segment};
use crate::preprocess;

/// Rendered in place of a definition when the dictionary had none
pub const NOT_FOUND: &str = "None";

/// Indentation of a sub-definition paragraph
pub const SUBSENSE_INDENT: &str = "   ";

static BARE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}) ").expect("valid ordinal pattern"));

static MASKED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\d+)_").expect("valid mask pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Found(String),
    NotFound,
}

impl Definition {
    pub fn as_str(&self) -> &str {
        match self {
            Definition::Found(text) => text,
            Definition::NotFound => NOT_FOUND,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Definition::Found(text) => Some(text),
            Definition::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Definition::Found(_))
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a section marker moves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Own paragraph, after a blank line
    Paragraph,
    /// Next line, indented by this many spaces
    Indented(usize),
    /// Own paragraph, with the section text starting on the following line
    Heading,
}

/// How the segments of a multi-block extraction are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assembly {
    /// `N. ` before each sense when there is more than one
    Numbered,
    /// Blank line between senses; the site numbers its senses itself
    Paragraphs,
}

/// One rewrite step
#[derive(Debug)]
pub enum Rewrite {
    Compose,
    CollapseWhitespace,
    /// Wraps sense numbers that follow a reference keyword in `_N_`
    MaskCrossReferences(Regex),
    /// Blank line and `N. ` before every bare one- or two-digit token
    NumberSenses,
    UnmaskCrossReferences,
    SectionBreak { marker: Regex, layout: Layout },
    /// Plural-form section introduced by the headword's own plural
    /// (`<stem>..s sf pl`); built per word since the pattern embeds it
    PluralSection,
    Literal { from: String, to: String },
    Pattern { regex: Regex, replacement: String },
    Tidy,
}

impl Rewrite {
    pub fn literal(from: &str, to: &str) -> Self {
        Rewrite::Literal {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn pattern(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Rewrite::Pattern {
            regex: compile(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// `keyword` is a regex fragment; `range_word` joins `N <range_word> M`
    pub fn mask_cross_references(keyword: &str, range_word: &str) -> Result<Self> {
        let pattern = format!(r"(?i)\b({keyword})\s+(\d+)(?:(\s+{range_word}\s+)(\d+))?");
        Ok(Rewrite::MaskCrossReferences(compile(&pattern)?))
    }

    /// `marker` is a regex fragment; whitespace in front of it is absorbed so
    /// the break is never doubled
    pub fn section_break(marker: &str, layout: Layout) -> Result<Self> {
        let pattern = match layout {
            Layout::Heading => format!(r"\s*({marker})[ \t]*"),
            Layout::Paragraph | Layout::Indented(_) => format!(r"\s*({marker})"),
        };
        Ok(Rewrite::SectionBreak {
            marker: compile(&pattern)?,
            layout,
        })
    }

    fn apply(&self, text: &str, word: Option<&str>) -> String {
        match self {
            Rewrite::Compose => preprocess::compose(text),
            Rewrite::CollapseWhitespace => preprocess::collapse_whitespace(text),
            Rewrite::MaskCrossReferences(regex) => regex
                .replace_all(text, |caps: &Captures| {
                    let mut masked = format!("{} _{}_", &caps[1], &caps[2]);
                    if let (Some(joiner), Some(end)) = (caps.get(3), caps.get(4)) {
                        masked.push_str(joiner.as_str());
                        masked.push('_');
                        masked.push_str(end.as_str());
                        masked.push('_');
                    }
                    masked
                })
                .into_owned(),
            Rewrite::NumberSenses => number_senses(text),
            Rewrite::UnmaskCrossReferences => MASKED_NUMBER.replace_all(text, "${1}").into_owned(),
            Rewrite::SectionBreak { marker, layout } => {
                let replacement = match layout {
                    Layout::Paragraph => "\n\n${1}".to_string(),
                    Layout::Indented(width) => format!("\n{}${{1}}", " ".repeat(*width)),
                    Layout::Heading => "\n\n${1}\n".to_string(),
                };
                marker.replace_all(text, replacement.as_str()).into_owned()
            }
            Rewrite::PluralSection => match word.and_then(plural_section_pattern) {
                Some(regex) => regex.replace_all(text, "\n\n${1}:").into_owned(),
                None => text.to_string(),
            },
            Rewrite::Literal { from, to } => text.replace(from.as_str(), to),
            Rewrite::Pattern { regex, replacement } => {
                regex.replace_all(text, replacement.as_str()).into_owned()
            }
            Rewrite::Tidy => preprocess::tidy(text),
        }
    }
}

/// Normalization half of a ruleset
#[derive(Debug)]
pub struct NormalizationRules {
    pub steps: Vec<Rewrite>,
    pub assembly: Assembly,
}

impl NormalizationRules {
    /// Wraps `steps` between composition + whitespace collapse and the final tidy
    pub fn standard(steps: Vec<Rewrite>, assembly: Assembly) -> Self {
        let mut all = Vec::with_capacity(steps.len() + 3);
        all.push(Rewrite::Compose);
        all.push(Rewrite::CollapseWhitespace);
        all.extend(steps);
        all.push(Rewrite::Tidy);
        Self { steps: all, assembly }
    }

    /// Runs every step over one piece of text
    pub fn rewrite(&self, text: &str, word: Option<&str>) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |text, step| step.apply(&text, word))
    }

    pub fn normalize(&self, extraction: &Extraction, word: Option<&str>) -> Definition {
        let Extraction::Found(segments) = extraction else {
            return Definition::NotFound;
        };

        let rewritten: Vec<Vec<String>> = segments
            .iter()
            .map(|segment| self.rewrite_segment(segment, word))
            .filter(|parts| !parts.is_empty())
            .collect();

        let text = assemble(&rewritten, self.assembly);
        if text.is_empty() {
            tracing::debug!("Definition empty after normalization");
            Definition::NotFound
        } else {
            Definition::Found(text)
        }
    }

    fn rewrite_segment(&self, segment: &Segment, word: Option<&str>) -> Vec<String> {
        segment
            .parts
            .iter()
            .map(|part| self.rewrite(part, word))
            .filter(|part| !part.is_empty())
            .collect()
    }
}

/// Joins rewritten segments once, from an ordered list of pieces
fn assemble(segments: &[Vec<String>], assembly: Assembly) -> String {
    let numbered = assembly == Assembly::Numbered && segments.len() > 1;
    let mut pieces: Vec<String> = Vec::new();

    for (index, parts) in segments.iter().enumerate() {
        for (position, part) in parts.iter().enumerate() {
            let piece = if position > 0 {
                format!("{SUBSENSE_INDENT}{part}")
            } else if numbered {
                format!("{}. {part}", index + 1)
            } else {
                part.clone()
            };
            pieces.push(piece);
        }
    }

    pieces.join("\n\n")
}

fn number_senses(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for caps in BARE_ORDINAL.captures_iter(text) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // "1.5 " or "x-2 " are not sense numbers
        let preceded_by_space = text[..whole.start()]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if !preceded_by_space {
            continue;
        }

        out.push_str(&text[last..whole.start()]);
        out.truncate(out.trim_end().len());
        out.push_str("\n\n");
        out.push_str(digits.as_str());
        out.push_str(". ");
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

fn plural_section_pattern(word: &str) -> Option<Regex> {
    let mut chars = word.chars();
    chars.next_back()?;
    let stem = chars.as_str();
    if stem.is_empty() {
        return None;
    }

    let pattern = format!(r"(?i)\s*({}..?s s[fm] pl):?", regex::escape(stem));
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!("Skipping plural section for {word}: {e}");
            None
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
