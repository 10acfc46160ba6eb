//! Text parsing utilities for library metadata

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Cell;

/// Separator used when joining names and genres for display
pub const DISPLAY_SEPARATOR: &str = ", ";

lazy_static! {
    // Anything that is not a letter, number, underscore or whitespace.
    // Combining marks and joiners go too, so "Beyonce\u{301}" keys as "beyonce".
    static ref NON_WORD_PATTERN: Regex = Regex::new(r"[^\p{L}\p{N}_\s]").unwrap();

    // Comma with optional trailing whitespace between similar artists
    static ref SIMILAR_SEPARATOR_PATTERN: Regex = Regex::new(r",\s*").unwrap();
}

/// Canonical comparison key for an artist name.
///
/// Lowercases, strips punctuation and symbols, then trims. "AC/DC" and "acdc"
/// share a key; "Sigur Rós" keeps its accent.
pub fn clean_key(text: &str) -> String {
    NON_WORD_PATTERN
        .replace_all(&text.to_lowercase(), "")
        .trim()
        .to_string()
}

/// Canonical key for a table cell. Non-text values have an empty key.
pub fn normalize_key(value: &Cell) -> String {
    value.as_text().map(clean_key).unwrap_or_default()
}

/// Coerce a play count cell to a non-negative number.
///
/// Anything that does not parse as a finite, positive number counts as zero.
pub fn parse_play_count(value: &Cell) -> f64 {
    let parsed = match value {
        Cell::Number(n) => *n,
        Cell::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        Cell::Null => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

/// Split a similar-artists string into names.
///
/// Names keep their original spelling; only entries that are blank are dropped.
pub fn split_similar_artists(raw: &str) -> Vec<&str> {
    SIMILAR_SEPARATOR_PATTERN
        .split(raw)
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Split a comma-separated genre string into trimmed, non-empty tags
pub fn split_genres(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_key() {
        assert_eq!(clean_key("AC/DC"), "acdc");
        assert_eq!(clean_key("  Guns N' Roses!  "), "guns n roses");
        assert_eq!(clean_key("Sigur Rós"), "sigur rós");
        assert_eq!(clean_key("the_band"), "the_band");
        assert_eq!(clean_key("!!!"), "");
    }

    #[test]
    fn test_clean_key_matches_spellings() {
        assert_eq!(clean_key("Portishead"), clean_key("portishead."));
        assert_eq!(clean_key("Beyoncé"), clean_key("BEYONCÉ"));
        assert_ne!(clean_key("Sigur Rós"), clean_key("Sigur Ros"));
    }

    #[test]
    fn test_clean_key_drops_marks_and_joiners() {
        // lowercase İ is "i" plus a combining dot
        assert_eq!(clean_key("İbrahim"), "ibrahim");
        assert_eq!(clean_key("Beyonce\u{301}"), "beyonce");
        assert_eq!(clean_key("a\u{200d}b"), "ab");
        assert_eq!(clean_key("a\u{200c}b"), "ab");
        assert_eq!(clean_key("Mø²"), "mø²");
    }

    #[test]
    fn test_normalize_key_non_text() {
        assert_eq!(normalize_key(&Cell::Null), "");
        assert_eq!(normalize_key(&Cell::Number(1349.0)), "");
        assert_eq!(normalize_key(&Cell::from("M.I.A.")), "mia");
    }

    #[test]
    fn test_parse_play_count() {
        assert_eq!(parse_play_count(&Cell::from("100")), 100.0);
        assert_eq!(parse_play_count(&Cell::from(" 42 ")), 42.0);
        assert_eq!(parse_play_count(&Cell::from("1e3")), 1000.0);
        assert_eq!(parse_play_count(&Cell::Number(7.5)), 7.5);
        assert_eq!(parse_play_count(&Cell::from("abc")), 0.0);
        assert_eq!(parse_play_count(&Cell::from("")), 0.0);
        assert_eq!(parse_play_count(&Cell::from("NaN")), 0.0);
        assert_eq!(parse_play_count(&Cell::from("inf")), 0.0);
        assert_eq!(parse_play_count(&Cell::from("-5")), 0.0);
        assert_eq!(parse_play_count(&Cell::Null), 0.0);
    }

    #[test]
    fn test_split_similar_artists() {
        assert_eq!(
            split_similar_artists("Thom Yorke, Portishead,Massive Attack"),
            vec!["Thom Yorke", "Portishead", "Massive Attack"]
        );
        assert_eq!(split_similar_artists("A, , B,"), vec!["A", "B"]);
        assert!(split_similar_artists("").is_empty());
    }

    #[test]
    fn test_split_similar_artists_keeps_spelling() {
        // whitespace before a comma is part of the name
        assert_eq!(split_similar_artists("Björk , Sigur Rós"), vec!["Björk ", "Sigur Rós"]);
    }

    #[test]
    fn test_split_genres() {
        let genres: Vec<&str> = split_genres(" art pop,electronic , ,").collect();
        assert_eq!(genres, vec!["art pop", "electronic"]);
    }
}
