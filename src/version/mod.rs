//! Version engine: validation, extraction, comparison and range containment
//!
//! Every operation is a pure function over strings. Tokens are parsed fresh
//! for each call and no state is shared beyond the compiled regex tables.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Extract   │────▶│   Compare   │◀────│    Range    │
//! │ (free text) │     │ (ordering)  │     │ (min / max) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │  Patterns   │◀────│    Token    │
//! │   (regex)   │     │  (parsing)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`compare`]: Validation and the tiered comparator
//! - [`extract`]: Best version found in free text
//! - [`range`]: Range containment with a shared inclusivity flag
//! - [`token`]: Parsed version tokens and wildcard normalization
//! - [`operator`]: The closed set of comparison operators
//! - [`patterns`]: Compiled validation and extraction patterns
//! - [`error`]: Error types for fallible comparisons

pub mod compare;
pub mod error;
pub mod extract;
pub mod operator;
pub mod patterns;
pub mod range;
pub mod token;

pub use compare::{compare, custom_compare, is_valid, try_compare};
pub use error::{BoundKind, VersionError};
pub use extract::{extract, highest};
pub use operator::ComparisonOperator;
pub use range::{VersionRange, is_covered};
pub use token::VersionToken;
