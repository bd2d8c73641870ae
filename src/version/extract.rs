//! Version extraction from free text (banners, headers, file names)

use crate::version::compare::{compare, is_valid};
use crate::version::operator::ComparisonOperator;
use crate::version::patterns::EXTRACTION_PATTERNS;

/// Find the highest version embedded in `text`.
///
/// Shapes are tried from most to least specific and the first shape with a
/// valid match wins, so `2.4.1-rc1` is preferred over the `2.4` inside it.
/// Among the matches of that shape the highest one is returned.
///
/// Examples:
/// - "build 2.4.1-rc1 stable" -> Some("2.4.1-rc1")
/// - "v1.0 then v2.0 then v1.5" -> Some("2.0")
/// - "no digits here" -> None
pub fn extract(text: &str) -> Option<String> {
    EXTRACTION_PATTERNS
        .iter()
        .find_map(|pattern| highest(pattern.find_iter(text).map(|m| m.as_str())))
        .map(str::to_string)
}

/// Return the highest valid version among `candidates`.
///
/// Invalid candidates are skipped; among equal versions the first one wins.
pub fn highest<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|candidate| is_valid(candidate))
        .fold(None, |best, candidate| match best {
            Some(current) if !compare(candidate, ComparisonOperator::Gt, current) => Some(current),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("build 2.4.1-rc1 stable", Some("2.4.1-rc1"))]
    #[case("v1.0 then v2.0 then v1.5", Some("2.0"))]
    #[case("Server: Apache/2.4.57 (Unix) OpenSSL/1.1.1w", Some("1.1.1w"))]
    #[case("Server: Apache/2.4.57 (Unix)", Some("2.4.57"))]
    #[case("jenkins 2.346.3_lts", Some("2.346.3_lts"))]
    #[case("firmware 10.2.0.1 and 9.8.7.6", Some("10.2.0.1"))]
    #[case("nginx/1.25.3-alpine vs 1.24.0-alpine", Some("1.25.3-alpine"))]
    #[case("release 7", Some("7"))]
    #[case("no digits here", None)]
    #[case("", None)]
    fn extract_returns_most_specific_highest(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract(text).as_deref(), expected);
    }

    #[test]
    fn extract_ignores_wildcards() {
        assert_eq!(extract("range 1.2.* only").as_deref(), Some("1.2"));
    }

    #[rstest]
    #[case(vec!["1.0", "2.0", "1.5"], Some("2.0"))]
    #[case(vec!["2.0-beta", "2.0"], Some("2.0"))]
    #[case(vec!["1.2", "1.2.0"], Some("1.2"))]
    #[case(vec!["junk", "0.1"], Some("0.1"))]
    #[case(vec!["junk"], None)]
    #[case(vec![], None)]
    fn highest_picks_greatest_valid_candidate(
        #[case] candidates: Vec<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(highest(candidates), expected);
    }
}
