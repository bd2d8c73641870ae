//! Range containment

use crate::version::compare::try_compare;
use crate::version::error::{BoundKind, VersionError};
use crate::version::operator::ComparisonOperator;

/// An optional lower and upper bound sharing one inclusivity flag.
///
/// Inclusivity is not configurable per bound: `inclusive` applies to `min`
/// and `max` alike. Use [`crate::cpe::CpeMatch`] when the bounds differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Option<String>,
    pub max: Option<String>,
    pub inclusive: bool,
}

impl VersionRange {
    pub fn new(min: Option<&str>, max: Option<&str>, inclusive: bool) -> Self {
        Self {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
            inclusive,
        }
    }

    /// Check whether `version` lies within the range.
    ///
    /// A range without bounds contains everything. Both bounds are always
    /// evaluated, so a malformed bound is reported even when the other bound
    /// already excludes the version.
    pub fn contains(&self, version: &str) -> Result<bool, VersionError> {
        let (lower_op, upper_op) = if self.inclusive {
            (ComparisonOperator::Ge, ComparisonOperator::Le)
        } else {
            (ComparisonOperator::Gt, ComparisonOperator::Lt)
        };

        let above_min = match &self.min {
            Some(min) => check_bound(version, lower_op, min, BoundKind::Min)?,
            None => true,
        };
        let below_max = match &self.max {
            Some(max) => check_bound(version, upper_op, max, BoundKind::Max)?,
            None => true,
        };

        Ok(above_min && below_max)
    }
}

/// Check whether `version` lies between `min` and `max`.
///
/// Examples:
/// - ("1.5.0", Some("1.0.0"), Some("2.0.0"), true) -> Ok(true)
/// - ("2.0.0", Some("1.0.0"), Some("2.0.0"), false) -> Ok(false)
/// - ("9.9.9", None, None, true) -> Ok(true)
pub fn is_covered(
    version: &str,
    min: Option<&str>,
    max: Option<&str>,
    inclusive: bool,
) -> Result<bool, VersionError> {
    VersionRange::new(min, max, inclusive).contains(version)
}

pub(crate) fn check_bound(
    version: &str,
    op: ComparisonOperator,
    bound: &str,
    kind: BoundKind,
) -> Result<bool, VersionError> {
    try_compare(version, op, bound).map_err(|source| VersionError::Bound {
        bound: kind,
        value: bound.to_string(),
        version: version.to_string(),
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.5.0", Some("1.0.0"), Some("2.0.0"), true, true)]
    #[case("1.0.0", Some("1.0.0"), Some("2.0.0"), true, true)]
    #[case("2.0.0", Some("1.0.0"), Some("2.0.0"), true, true)]
    #[case("2.0.0", Some("1.0.0"), Some("2.0.0"), false, false)]
    #[case("1.0.0", Some("1.0.0"), Some("2.0.0"), false, false)]
    #[case("1.5.0", Some("1.0.0"), Some("2.0.0"), false, true)]
    #[case("2.0.1", Some("1.0.0"), Some("2.0.0"), true, false)]
    #[case("0.9", Some("1.0.0"), None, true, false)]
    #[case("1.0", Some("1.0.0"), None, true, true)]
    #[case("1.0", Some("1.0.0"), None, false, false)]
    #[case("3.0", None, Some("2.0"), true, false)]
    #[case("2.0-beta", None, Some("2.0"), false, true)]
    #[case("2.346.3_lts", Some("2.346.3_lts"), Some("2.346.3"), true, true)]
    #[case("1.2.7", Some("1.2.*"), Some("1.2.*"), true, false)]
    #[case("1.2.7", Some("1.2.*"), Some("1.3.*"), true, true)]
    #[case("1.2.0", Some("1.2.*"), Some("1.2.*"), true, true)]
    #[case("9.9.9", None, None, true, true)]
    #[case("9.9.9", None, None, false, true)]
    fn is_covered_checks_bounds(
        #[case] version: &str,
        #[case] min: Option<&str>,
        #[case] max: Option<&str>,
        #[case] inclusive: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(is_covered(version, min, max, inclusive).unwrap(), expected);
    }

    #[test]
    fn is_covered_without_bounds_accepts_anything() {
        assert!(is_covered("not-a-version", None, None, true).unwrap());
    }

    #[test]
    fn is_covered_reports_malformed_bound_with_context() {
        let err = is_covered("1.5.0", Some("1.0.0"), Some("two"), true).unwrap_err();

        match err {
            VersionError::Bound {
                bound,
                value,
                version,
                source,
            } => {
                assert_eq!(bound, BoundKind::Max);
                assert_eq!(value, "two");
                assert_eq!(version, "1.5.0");
                assert!(matches!(*source, VersionError::Malformed(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn is_covered_reports_malformed_bound_even_when_other_bound_fails() {
        assert!(is_covered("0.1", Some("1.0"), Some("bogus"), true).is_err());
    }

    #[test]
    fn is_covered_reports_overflowing_bound() {
        let err = is_covered("1.0", Some("1.99999999999999999999999"), None, true).unwrap_err();
        assert!(matches!(
            err,
            VersionError::Bound { bound: BoundKind::Min, ref source, .. }
                if matches!(**source, VersionError::Component { .. })
        ));
    }

    #[test]
    fn is_covered_reports_malformed_version() {
        assert!(is_covered("latest", Some("1.0"), None, true).is_err());
    }

    // One flag covers both bounds; a half-open [1.0, 2.0) range cannot be
    // expressed and is approximated by either the closed or the open range.
    #[test]
    fn inclusive_flag_applies_to_both_bounds() {
        let closed = VersionRange::new(Some("1.0"), Some("2.0"), true);
        let open = VersionRange::new(Some("1.0"), Some("2.0"), false);

        assert!(closed.contains("1.0").unwrap());
        assert!(closed.contains("2.0").unwrap());
        assert!(!open.contains("1.0").unwrap());
        assert!(!open.contains("2.0").unwrap());
    }
}
