//! Built-in dictionary catalogue.

use lexicard_types::{DictionaryKey, Language};

use crate::error::Result;
use crate::extract::{ExtractionRules, Strategy};
use crate::highlight::Quirk;
use crate::normalize::{Assembly, Layout, NormalizationRules, Rewrite};
use crate::registry::{DictionaryInfo, DictionaryRuleset};

/// Printed by Michaelis in place of an entry
pub const MICHAELIS_NO_ENTRY: &str = "O verbete não foi encontrado";

/// Bare `N.` sense numbers, moved to their own paragraph
const ORDINAL_PARAGRAPH: &str = r"\s*\b(\d{1,2}\.)\s+";

pub fn builtin() -> Result<Vec<DictionaryRuleset>> {
    Ok(vec![
        merriam_webster()?,
        larousse_en_de()?,
        larousse_en_fr()?,
        larousse_en_es()?,
        larousse_fr()?,
        rae()?,
        michaelis()?,
    ])
}

fn info(
    name: &str,
    description: &str,
    url: &str,
    referer: &str,
    target: Language,
) -> DictionaryInfo {
    DictionaryInfo {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        referer: referer.to_string(),
        target,
    }
}

fn merriam_webster() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::En, 1),
        info: info(
            "Merriam-Webster",
            "mono-lingual EN",
            "https://www.merriam-webster.com/dictionary/",
            "https://www.merriam-webster.com",
            Language::En,
        ),
        extraction: ExtractionRules::new(Strategy::blocks(
            Some("div.vg"),
            ".vg-sseq-entry-item",
            Some("div.sb-entry"),
        )?),
        normalization: NormalizationRules::standard(
            vec![
                Rewrite::pattern(r"^:\s", "")?,
                Rewrite::pattern(r"^([a-z]) :", "${1}:")?,
                Rewrite::pattern(r"([a-z])\s(\(1\))\s:", "${1}: ${2}")?,
                Rewrite::pattern(r"(\([2-9]\))\s*:", "${1}")?,
                Rewrite::section_break(r"\([2-9]\)", Layout::Indented(6))?,
            ],
            Assembly::Numbered,
        ),
        quirk: None,
    })
}

fn larousse_en_de() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::En, 2),
        info: info(
            "Larousse",
            "bi-lingual EN->DE",
            "https://www.larousse.com/en/dictionaries/english-german/",
            "https://www.larousse.com",
            Language::De,
        ),
        extraction: ExtractionRules::new(Strategy::blocks(None, ".content.en-de", None)?),
        normalization: NormalizationRules::standard(
            vec![Rewrite::pattern(ORDINAL_PARAGRAPH, "\n\n${1} ")?],
            Assembly::Paragraphs,
        ),
        quirk: None,
    })
}

fn larousse_en_fr() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::En, 3),
        info: info(
            "Larousse",
            "bi-lingual EN->FR",
            "https://www.larousse.fr/dictionnaires/anglais-francais/",
            "https://www.larousse.fr/",
            Language::Fr,
        ),
        extraction: ExtractionRules::new(Strategy::fallback(
            "#BlocArticle",
            ".itemZONESEM",
            ".ZoneTexte",
        )?),
        normalization: NormalizationRules::standard(vec![], Assembly::Numbered),
        quirk: None,
    })
}

fn larousse_en_es() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::En, 4),
        info: info(
            "Larousse",
            "bi-lingual EN->ES",
            "https://www.larousse.com/en/dictionaries/english-spanish/",
            "https://www.larousse.com",
            Language::Es,
        ),
        extraction: ExtractionRules::new(Strategy::link_stripped(".content.en-es")?),
        normalization: NormalizationRules::standard(
            vec![
                Rewrite::literal("Conjugation ", ""),
                Rewrite::pattern(ORDINAL_PARAGRAPH, "\n\n${1} ")?,
            ],
            Assembly::Paragraphs,
        ),
        quirk: None,
    })
}

fn larousse_fr() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::Fr, 1),
        info: info(
            "Larousse",
            "mono-lingual FR->FR",
            "https://www.larousse.fr/dictionnaires/francais/",
            "https://www.larousse.fr",
            Language::Fr,
        ),
        extraction: ExtractionRules::new(Strategy::blocks(None, ".DivisionDefinition", None)?),
        normalization: NormalizationRules::standard(
            vec![
                Rewrite::pattern(r"\s+:\s*", ": ")?,
                Rewrite::literal(" - ", " / "),
                Rewrite::pattern(r"([^\d\s])\.(\p{L})", "${1}. ${2}")?,
                Rewrite::pattern(r"\b(Litt.raire)\.", "(${1}):")?,
                Rewrite::section_break("Synonymes?:", Layout::Paragraph)?,
                Rewrite::section_break("Contraires?:", Layout::Paragraph)?,
            ],
            Assembly::Paragraphs,
        ),
        quirk: None,
    })
}

fn rae() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::Es, 1),
        info: info(
            "Diccionario de la lengua española",
            "mono-lingual Spanish dictionary by the \"Real Academia Española\"",
            "https://dle.rae.es/",
            "https://dle.rae.es",
            Language::Es,
        ),
        extraction: ExtractionRules::new(Strategy::blocks(Some("div#resultados"), "p.j", None)?),
        normalization: NormalizationRules::standard(
            vec![
                Rewrite::literal(" . ", ". "),
                Rewrite::literal(" , ", ", "),
                // gender abbreviations
                Rewrite::pattern(r"(^|\s)(?:[fm]\.\s)+", "${1}")?,
                Rewrite::section_break(r"Sin\.:", Layout::Indented(3))?,
                Rewrite::section_break(r"Ant\.:", Layout::Indented(3))?,
                // trailing " ." and annotation numbers
                Rewrite::pattern(r"(?: [.\d])+$", "")?,
            ],
            Assembly::Paragraphs,
        ),
        quirk: None,
    })
}

fn michaelis() -> Result<DictionaryRuleset> {
    Ok(DictionaryRuleset {
        key: DictionaryKey::new(Language::Pt, 1),
        info: info(
            "Michaelis",
            "mono-lingual PT->PT (Brazilian)",
            "https://michaelis.uol.com.br/moderno-portugues/busca/portugues-brasileiro/",
            "https://michaelis.uol.com.br",
            Language::Pt,
        ),
        extraction: ExtractionRules::new(Strategy::flat("#main-container")?)
            .with_no_entry_marker(MICHAELIS_NO_ENTRY),
        normalization: NormalizationRules::standard(
            vec![
                Rewrite::mask_cross_references("acepç(?:ão|ões)", "a")?,
                Rewrite::NumberSenses,
                Rewrite::UnmaskCrossReferences,
                Rewrite::PluralSection,
                Rewrite::section_break(r"\p{Lu}{5,}", Layout::Heading)?,
            ],
            Assembly::Paragraphs,
        ),
        quirk: Some(Quirk::SyllabifiedHeadwords),
    })
}
