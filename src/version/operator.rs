//! Comparison operators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// The closed set of operators a version comparison can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `>`
    Gt,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Gt => ">",
        }
    }

    /// Whether `left.cmp(right) == ordering` satisfies `left <op> right`
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOperator::Lt => ordering.is_lt(),
            ComparisonOperator::Le => ordering.is_le(),
            ComparisonOperator::Eq => ordering.is_eq(),
            ComparisonOperator::Ge => ordering.is_ge(),
            ComparisonOperator::Gt => ordering.is_gt(),
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(ComparisonOperator::Lt),
            "<=" => Ok(ComparisonOperator::Le),
            "==" => Ok(ComparisonOperator::Eq),
            ">=" => Ok(ComparisonOperator::Ge),
            ">" => Ok(ComparisonOperator::Gt),
            _ => Err(VersionError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
