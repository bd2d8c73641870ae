//! CPE match records and affected-version checks
//!
//! A record pairs a CPE 2.3 `criteria` string, whose sixth colon-separated
//! field is the version, with optional range bounds:
//!
//! ```json
//! {
//!   "criteria": "cpe:2.3:a:jenkins:jenkins:*:*:*:*:lts:*:*:*",
//!   "minVerIncluding": "2.346.1",
//!   "maxVerExcluding": "2.346.3"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::version::compare::{compare, is_valid};
use crate::version::error::{BoundKind, VersionError};
use crate::version::operator::ComparisonOperator;
use crate::version::range::check_bound;

/// Index of the version field within a CPE 2.3 string
const CPE_VERSION_FIELD: usize = 5;

/// A single CPE match record
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CpeMatch {
    pub criteria: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ver_including: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ver_excluding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ver_including: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ver_excluding: Option<String>,
}

/// A range bound and whether it includes its endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound<'a> {
    Including(&'a str),
    Excluding(&'a str),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl CpeMatch {
    /// The version field of `criteria`, if it has one
    pub fn version_field(&self) -> Option<&str> {
        self.criteria.split(':').nth(CPE_VERSION_FIELD)
    }

    fn lower(&self) -> Option<Bound<'_>> {
        present(&self.min_ver_including)
            .map(Bound::Including)
            .or_else(|| present(&self.min_ver_excluding).map(Bound::Excluding))
    }

    fn upper(&self) -> Option<Bound<'_>> {
        present(&self.max_ver_including)
            .map(Bound::Including)
            .or_else(|| present(&self.max_ver_excluding).map(Bound::Excluding))
    }

    /// Check whether `version` is covered by this record.
    ///
    /// In order: a bare `*` version field without bounds matches everything;
    /// a field with `*` components matches component-wise; a concrete field
    /// matches by equality; otherwise every present bound must hold.
    pub fn matches(&self, version: &str) -> Result<bool, VersionError> {
        let Some(field) = self.version_field() else {
            return Ok(false);
        };

        let (lower, upper) = (self.lower(), self.upper());

        if field == "*" && lower.is_none() && upper.is_none() {
            return Ok(true);
        }

        if field != "*" && field.contains('*') && pattern_matches(field, version) {
            return Ok(true);
        }

        if is_valid(field) && compare(version, ComparisonOperator::Eq, field) {
            return Ok(true);
        }

        if lower.is_none() && upper.is_none() {
            return Ok(false);
        }

        let above_lower = match lower {
            Some(Bound::Including(min)) => {
                check_bound(version, ComparisonOperator::Ge, min, BoundKind::Min)?
            }
            Some(Bound::Excluding(min)) => {
                check_bound(version, ComparisonOperator::Gt, min, BoundKind::Min)?
            }
            None => true,
        };
        let below_upper = match upper {
            Some(Bound::Including(max)) => {
                check_bound(version, ComparisonOperator::Le, max, BoundKind::Max)?
            }
            Some(Bound::Excluding(max)) => {
                check_bound(version, ComparisonOperator::Lt, max, BoundKind::Max)?
            }
            None => true,
        };

        Ok(above_lower && below_upper)
    }
}

/// Component-wise match of a CPE version pattern such as `1.2.*`.
///
/// The pattern is padded with `*` to the version's length; extra pattern
/// components beyond the version are ignored.
fn pattern_matches(pattern: &str, version: &str) -> bool {
    let version_parts: Vec<&str> = version.split('.').collect();

    pattern
        .split('.')
        .chain(std::iter::repeat("*"))
        .zip(version_parts)
        .all(|(expected, actual)| expected == "*" || expected == actual)
}

/// Check whether `version` is affected by any of the CPE match records.
///
/// A record whose bounds cannot be compared is logged and skipped.
pub fn is_affected(version: &str, matches: &[CpeMatch]) -> bool {
    if version.is_empty() {
        return false;
    }

    matches.iter().any(|record| {
        record.matches(version).unwrap_or_else(|e| {
            warn!(
                "Version comparison error for {} with {}: {}",
                version, record.criteria, e
            );
            false
        })
    })
}
