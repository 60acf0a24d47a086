//! Text primitives shared by the rewrite steps.

use unicode_normalization::UnicodeNormalization;

/// Sub-definitions and continuation lines start with at least this many spaces
pub const MIN_STRUCTURAL_INDENT: usize = 2;

/// Canonical composition (NFC), so accented letters compare equal whatever
/// their source encoding.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Runs of whitespace become a single space.
///
/// Line breaks fold to spaces, except the two delimiters normalized text is
/// made of: a blank line between paragraphs, and a line indented by at least
/// [`MIN_STRUCTURAL_INDENT`] spaces. Both survive with their indentation, so
/// already-normalized text passes through unchanged.
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        let body = fold_spaces(line);
        if body.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }

        let indent = leading_spaces(line);
        if current.is_empty() {
            if !paragraphs.is_empty() && indent >= MIN_STRUCTURAL_INDENT {
                current.push_str(&" ".repeat(indent));
            }
        } else if indent >= MIN_STRUCTURAL_INDENT {
            current.push('\n');
            current.push_str(&" ".repeat(indent));
        } else {
            current.push(' ');
        }
        current.push_str(&body);
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n\n")
}

/// Final pass: no trailing spaces, never more than one blank line in a row,
/// nothing before the first or after the last visible character.
pub fn tidy(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_none_or(|last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    lines.join("\n").trim_start().to_string()
}

fn fold_spaces(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_unifies_accents() {
        let decomposed = "acepc\u{0327}a\u{0303}o";
        assert_eq!(compose(decomposed), "acepção");
        assert_eq!(compose("acepção"), "acepção");
    }

    #[test]
    fn test_collapse_folds_stray_line_breaks() {
        assert_eq!(collapse_whitespace("  a \t b\nc\r\nd  "), "a b c d");
    }

    #[test]
    fn test_collapse_keeps_structure() {
        let text = "1. first\n      (2) sub\n\n\n   indented para\n\n2. second";
        assert_eq!(
            collapse_whitespace(text),
            "1. first\n      (2) sub\n\n   indented para\n\n2. second"
        );
    }

    #[test]
    fn test_collapse_is_a_fixpoint() {
        let text = "a b\n\nc\n   d";
        assert_eq!(collapse_whitespace(&collapse_whitespace(text)), collapse_whitespace(text));
    }

    #[test]
    fn test_tidy() {
        assert_eq!(tidy("\n\nhead  \n\n\n\nbody \n\n"), "head\n\nbody");
        assert_eq!(tidy("   x"), "x");
        assert_eq!(tidy(""), "");
    }
}
