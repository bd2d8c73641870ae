use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Malformed version: {0:?}")]
    Malformed(String),

    #[error("Numeric component {component:?} of {version:?} is out of range: {source}")]
    Component {
        version: String,
        component: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Unsupported comparison operator: {0:?}")]
    UnsupportedOperator(String),

    #[error("Cannot check {version:?} against {bound} bound {value:?}: {source}")]
    Bound {
        bound: BoundKind,
        value: String,
        version: String,
        #[source]
        source: Box<VersionError>,
    },
}

/// Which side of a range a bound sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Min,
    Max,
}

impl std::fmt::Display for BoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundKind::Min => f.write_str("min"),
            BoundKind::Max => f.write_str("max"),
        }
    }
}
