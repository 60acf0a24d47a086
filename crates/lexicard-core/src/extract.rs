//! Locating definition content inside raw dictionary markup.
//!
//! Each dictionary site lays out its entries differently; [`Strategy`] is the
//! closed set of shapes we know how to read. Extraction never fails: an
//! absent container or an explicit "no entry" page both come back as
//! [`Extraction::NotFound`].

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{CoreError, Result};
use crate::preprocess::compose;

/// One sense block. The first part is the sense itself, any further parts
/// are sub-definitions of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub parts: Vec<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![text.into()],
        }
    }

    pub fn with_parts(parts: Vec<String>) -> Self {
        Self { parts }
    }
}

/// Why nothing was extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The page says so, or the container holds no definition blocks
    NoEntry,
    /// The container the ruleset expects is not in the document
    MalformedMarkup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(Vec<Segment>),
    NotFound(Miss),
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }
}

/// Markup shapes, one per family of dictionary sites
#[derive(Debug)]
pub enum Strategy {
    /// Every element matching `block` (inside `container` when given) is one
    /// sense; with `part`, each block is further split into sub-definitions.
    Blocks {
        container: Option<Selector>,
        block: Selector,
        part: Option<Selector>,
    },
    /// Labeled sub-blocks when present, otherwise the single `fallback` element.
    Fallback {
        container: Selector,
        block: Selector,
        fallback: Selector,
    },
    /// Whole container as one block, hyperlinks flattened to their text.
    LinkStripped { container: Selector },
    /// Whole container as flat text; structure is synthesized later.
    Flat { container: Selector },
}

impl Strategy {
    pub fn blocks(container: Option<&str>, block: &str, part: Option<&str>) -> Result<Self> {
        Ok(Strategy::Blocks {
            container: container.map(selector).transpose()?,
            block: selector(block)?,
            part: part.map(selector).transpose()?,
        })
    }

    pub fn fallback(container: &str, block: &str, fallback: &str) -> Result<Self> {
        Ok(Strategy::Fallback {
            container: selector(container)?,
            block: selector(block)?,
            fallback: selector(fallback)?,
        })
    }

    pub fn link_stripped(container: &str) -> Result<Self> {
        Ok(Strategy::LinkStripped {
            container: selector(container)?,
        })
    }

    pub fn flat(container: &str) -> Result<Self> {
        Ok(Strategy::Flat {
            container: selector(container)?,
        })
    }
}

/// Extraction half of a ruleset
#[derive(Debug)]
pub struct ExtractionRules {
    pub strategy: Strategy,
    /// Text a site puts at the top of its page shell when the word is unknown
    pub no_entry_marker: Option<String>,
}

impl ExtractionRules {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            no_entry_marker: None,
        }
    }

    pub fn with_no_entry_marker(mut self, marker: impl Into<String>) -> Self {
        self.no_entry_marker = Some(marker.into());
        self
    }

    pub fn apply(&self, document: &Html) -> Extraction {
        match &self.strategy {
            Strategy::Blocks {
                container,
                block,
                part,
            } => {
                let blocks: Vec<ElementRef<'_>> = match container {
                    Some(container) => {
                        let Some(root) = document.select(container).next() else {
                            return Extraction::NotFound(Miss::MalformedMarkup);
                        };
                        if self.reports_no_entry(root) {
                            return Extraction::NotFound(Miss::NoEntry);
                        }
                        root.select(block).collect()
                    }
                    None => document.select(block).collect(),
                };

                let segments: Vec<Segment> = blocks
                    .into_iter()
                    .filter_map(|element| {
                        let parts: Vec<String> = match part {
                            Some(part) => element
                                .select(part)
                                .map(|p| gather_text(p, false))
                                .filter(|t| !t.is_empty())
                                .collect(),
                            None => Some(gather_text(element, false))
                                .filter(|t| !t.is_empty())
                                .into_iter()
                                .collect(),
                        };
                        (!parts.is_empty()).then(|| Segment::with_parts(parts))
                    })
                    .collect();

                found_or_no_entry(segments)
            }
            Strategy::Fallback {
                container,
                block,
                fallback,
            } => {
                let Some(root) = document.select(container).next() else {
                    return Extraction::NotFound(Miss::MalformedMarkup);
                };
                if self.reports_no_entry(root) {
                    return Extraction::NotFound(Miss::NoEntry);
                }

                let mut segments: Vec<Segment> = root
                    .select(block)
                    .map(|element| gather_text(element, false))
                    .filter(|t| !t.is_empty())
                    .map(Segment::new)
                    .collect();

                if segments.is_empty() {
                    match root.select(fallback).next() {
                        Some(single) => {
                            let text = gather_text(single, false);
                            if !text.is_empty() {
                                segments.push(Segment::new(text));
                            }
                        }
                        None => return Extraction::NotFound(Miss::MalformedMarkup),
                    }
                }

                found_or_no_entry(segments)
            }
            Strategy::LinkStripped { container } => self.single_block(document, container, true),
            Strategy::Flat { container } => self.single_block(document, container, false),
        }
    }

    fn single_block(&self, document: &Html, container: &Selector, glue_links: bool) -> Extraction {
        let Some(root) = document.select(container).next() else {
            return Extraction::NotFound(Miss::MalformedMarkup);
        };
        if self.reports_no_entry(root) {
            return Extraction::NotFound(Miss::NoEntry);
        }

        let text = gather_text(root, glue_links);
        found_or_no_entry(
            Some(text)
                .filter(|t| !t.is_empty())
                .map(Segment::new)
                .into_iter()
                .collect(),
        )
    }

    fn reports_no_entry(&self, root: ElementRef<'_>) -> bool {
        self.no_entry_marker
            .as_deref()
            .is_some_and(|marker| compose(&gather_text(root, false)).starts_with(marker))
    }
}

fn found_or_no_entry(segments: Vec<Segment>) -> Extraction {
    if segments.is_empty() {
        Extraction::NotFound(Miss::NoEntry)
    } else {
        Extraction::Found(segments)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CoreError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Visible text of `element`: every text node whitespace-folded, empty nodes
/// dropped, the rest joined by a single space.
///
/// With `glue_links`, an `<a>` contributes its whole text as one token so an
/// inline cross-reference stays attached to its neighbours' spacing.
pub fn gather_text(element: ElementRef<'_>, glue_links: bool) -> String {
    let mut pieces = Vec::new();
    collect_text(element, glue_links, &mut pieces);
    pieces.join(" ")
}

fn collect_text(element: ElementRef<'_>, glue_links: bool, pieces: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_folded(text, pieces),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                match child.value().name() {
                    "script" | "style" | "template" => {}
                    "a" if glue_links => {
                        let glued: String = child.text().collect();
                        push_folded(&glued, pieces);
                    }
                    _ => collect_text(child, glue_links, pieces),
                }
            }
            _ => {}
        }
    }
}

fn push_folded(text: &str, pieces: &mut Vec<String>) {
    let folded = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !folded.is_empty() {
        pieces.push(folded);
    }
}
