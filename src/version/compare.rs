//! Version validation and comparison
//!
//! Comparison is layered:
//!
//! 1. Wildcards (`1.2.*`, `1.0-rc*`) are resolved first. Equality matches a
//!    wildcard component against anything; every other operator compares the
//!    tokens with wildcard components replaced by `0`. A wildcard in either
//!    suffix makes both suffixes irrelevant.
//! 2. When both (normalized) strings are strict semver without build
//!    metadata, the `semver` crate orders them.
//! 3. Otherwise numeric components are compared with zero padding, then
//!    suffixes, where a suffixed version sorts before its bare counterpart and
//!    two suffixes compare like semver pre-release identifiers.
//! 4. Strings whose numeric components cannot be represented fall back to
//!    byte-wise string comparison.

use std::cmp::Ordering;

use semver::Version;
use tracing::debug;

use crate::version::error::VersionError;
use crate::version::operator::ComparisonOperator;
use crate::version::patterns::VERSION;
use crate::version::token::VersionToken;

/// Check whether the whole string is a recognizable version.
///
/// Examples:
/// - "1.2.3", "2.346.3_lts", "1.0.2k", "1.2.*" -> true
/// - "", " ", "v1.2", "1.2.3.4.5" -> false
pub fn is_valid(version: &str) -> bool {
    VERSION.is_match(version)
}

/// Compare two version strings.
///
/// Returns `false` when either side is not a valid version, so callers cannot
/// tell "unequal" from "unparseable" here; use [`is_valid`] or
/// [`try_compare`] when that matters.
pub fn compare(left: &str, op: ComparisonOperator, right: &str) -> bool {
    if !is_valid(left) || !is_valid(right) {
        debug!("Refusing to compare invalid versions '{}' {} '{}'", left, op, right);
        return false;
    }

    match try_compare(left, op, right) {
        Ok(result) => result,
        Err(e) => {
            debug!("Falling back to string comparison: {}", e);
            op.matches(left.cmp(right))
        }
    }
}

/// Compare two version strings, reporting unparseable input as an error.
pub fn try_compare(
    left: &str,
    op: ComparisonOperator,
    right: &str,
) -> Result<bool, VersionError> {
    let left = VersionToken::parse(left)?;
    let right = VersionToken::parse(right)?;

    if left.has_wildcard() || right.has_wildcard() {
        return Ok(compare_wildcard(&left, op, &right));
    }

    Ok(op.matches(Strategy::select(left, right).ordering()))
}

/// Numeric-then-suffix comparison without the semver tier.
///
/// Falls back to string comparison when either side cannot be tokenized.
pub fn custom_compare(left: &str, op: ComparisonOperator, right: &str) -> bool {
    match (VersionToken::parse(left), VersionToken::parse(right)) {
        (Ok(l), Ok(r)) => op.matches(custom_ordering(&l, &r)),
        _ => {
            debug!("Falling back to string comparison of '{}' and '{}'", left, right);
            op.matches(left.cmp(right))
        }
    }
}

/// Which comparator orders a pair of tokens
#[derive(Debug)]
enum Strategy {
    /// Both sides are strict semver without build metadata
    Standard(Version, Version),
    /// At least one side is outside the semver grammar
    Custom(VersionToken, VersionToken),
}

impl Strategy {
    fn select(left: VersionToken, right: VersionToken) -> Self {
        match (
            Version::parse(&left.to_string()),
            Version::parse(&right.to_string()),
        ) {
            (Ok(l), Ok(r)) if l.build.is_empty() && r.build.is_empty() => {
                Strategy::Standard(l, r)
            }
            _ => Strategy::Custom(left, right),
        }
    }

    fn ordering(&self) -> Ordering {
        match self {
            Strategy::Standard(l, r) => l.cmp(r),
            Strategy::Custom(l, r) => custom_ordering(l, r),
        }
    }
}

fn custom_ordering(left: &VersionToken, right: &VersionToken) -> Ordering {
    let len = left.components().len().max(right.components().len());

    for i in 0..len {
        match left.component(i).value().cmp(&right.component(i).value()) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    // A suffix marks a pre-release: "2.0-beta" < "2.0"
    match (left.suffix(), right.suffix()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => suffix_ordering(&l.text, &r.text),
    }
}

/// Order suffixes the way semver orders pre-release identifiers: dot-separated
/// identifiers left to right, numeric ones by value and before alphanumeric
/// ones, and a shorter list first when it is a prefix of the longer one.
fn suffix_ordering(left: &str, right: &str) -> Ordering {
    let mut left = left.split('.');
    let mut right = right.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match identifier_ordering(l, r) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn identifier_ordering(left: &str, right: &str) -> Ordering {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match (numeric(left), numeric(right)) {
        (true, true) => {
            // Compared as digit strings so arbitrarily long numbers never overflow
            let l = left.trim_start_matches('0');
            let r = right.trim_start_matches('0');
            l.len().cmp(&r.len()).then_with(|| l.cmp(r))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.cmp(right),
    }
}

fn compare_wildcard(left: &VersionToken, op: ComparisonOperator, right: &VersionToken) -> bool {
    let drop_suffix = left.suffix_has_wildcard() || right.suffix_has_wildcard();

    if op == ComparisonOperator::Eq {
        return wildcard_equal(left, right, drop_suffix);
    }

    op.matches(
        Strategy::select(left.normalized(drop_suffix), right.normalized(drop_suffix)).ordering(),
    )
}

fn wildcard_equal(left: &VersionToken, right: &VersionToken, ignore_suffix: bool) -> bool {
    use crate::version::token::Component::{Number, Wildcard};

    let len = left.components().len().max(right.components().len());
    let components_match = (0..len).all(|i| match (left.component(i), right.component(i)) {
        (Wildcard, _) | (_, Wildcard) => true,
        (Number(l), Number(r)) => l == r,
    });

    components_match
        && (ignore_suffix
            || left.suffix().map(|s| s.text.as_str()) == right.suffix().map(|s| s.text.as_str()))
}
