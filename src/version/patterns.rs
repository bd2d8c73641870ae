//! Regular expressions shared by validation, parsing and extraction

use std::sync::LazyLock;

use regex::Regex;

/// Anchored version grammar: 1-4 dot-separated groups, the first numeric and
/// the rest numeric or `*`, followed by an optional suffix which is a single
/// letter, a bare `*`, or a `-`/`_`/`+` delimiter plus an alphanumeric/`*` run.
pub static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<numeric>\d+(?:\.(?:\d+|\*)){0,3})(?P<suffix>[A-Za-z]|\*|[-_+][A-Za-z0-9*]+)?$",
    )
    .unwrap()
});

/// Extraction shapes, most specific first.
///
/// Delimited suffix, then single-letter suffix, then bare numbers; each tier
/// from four components down to one. Wildcards are never extracted.
const EXTRACTION_SHAPES: [&str; 12] = [
    r"\d+\.\d+\.\d+\.\d+[-_+][A-Za-z0-9]+",
    r"\d+\.\d+\.\d+[-_+][A-Za-z0-9]+",
    r"\d+\.\d+[-_+][A-Za-z0-9]+",
    r"\d+[-_+][A-Za-z0-9]+",
    r"\d+\.\d+\.\d+\.\d+[A-Za-z]\b",
    r"\d+\.\d+\.\d+[A-Za-z]\b",
    r"\d+\.\d+[A-Za-z]\b",
    r"\d+[A-Za-z]\b",
    r"\d+\.\d+\.\d+\.\d+",
    r"\d+\.\d+\.\d+",
    r"\d+\.\d+",
    r"\d+",
];

pub static EXTRACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EXTRACTION_SHAPES
        .iter()
        .map(|shape| Regex::new(shape).unwrap())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extraction_patterns_compile_in_order() {
        assert_eq!(EXTRACTION_PATTERNS.len(), 12);
        assert_eq!(EXTRACTION_PATTERNS[0].as_str(), EXTRACTION_SHAPES[0]);
        assert_eq!(EXTRACTION_PATTERNS[11].as_str(), r"\d+");
    }

    #[rstest]
    #[case("2.346.3_lts", "2.346.3", Some("_lts"))]
    #[case("1.2.*", "1.2.*", None)]
    #[case("1.0.2k", "1.0.2", Some("k"))]
    #[case("1.2*", "1.2", Some("*"))]
    #[case("4.0.0-rc*", "4.0.0", Some("-rc*"))]
    fn version_pattern_splits_numeric_and_suffix(
        #[case] input: &str,
        #[case] numeric: &str,
        #[case] suffix: Option<&str>,
    ) {
        let captures = VERSION.captures(input).unwrap();
        assert_eq!(&captures["numeric"], numeric);
        assert_eq!(captures.name("suffix").map(|m| m.as_str()), suffix);
    }

    #[test]
    fn single_letter_shape_requires_word_boundary() {
        let pattern = &EXTRACTION_PATTERNS[7];
        assert!(pattern.find("64bit build").is_none());
        assert_eq!(pattern.find("release 7b").unwrap().as_str(), "7b");
    }
}
