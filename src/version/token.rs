//! Parsed representation of a version string

use std::fmt;

use crate::version::error::VersionError;
use crate::version::patterns::VERSION;

/// Wildcard marker accepted in numeric components and suffixes
pub const WILDCARD: char = '*';

/// One dot-separated numeric component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Number(u64),
    Wildcard,
}

impl Component {
    /// Numeric value, with the wildcard standing in for zero
    pub fn value(self) -> u64 {
        match self {
            Component::Number(n) => n,
            Component::Wildcard => 0,
        }
    }
}

/// Trailing qualifier such as `-beta`, `_lts`, `+build1` or `k`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    /// `-`, `_` or `+`; `None` for a bare letter or a bare `*`
    pub delimiter: Option<char>,
    pub text: String,
}

impl Suffix {
    fn parse(raw: &str) -> Self {
        match raw.chars().next() {
            Some(c @ ('-' | '_' | '+')) => Suffix {
                delimiter: Some(c),
                text: raw[1..].to_string(),
            },
            _ => Suffix {
                delimiter: None,
                text: raw.to_string(),
            },
        }
    }

    pub fn has_wildcard(&self) -> bool {
        self.text.contains(WILDCARD)
    }
}

/// A version string split into numeric components and an optional suffix.
///
/// Tokens are built fresh from a string for every operation and never
/// mutated; normalization returns a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken {
    components: Vec<Component>,
    suffix: Option<Suffix>,
}

impl VersionToken {
    /// Parse a string matching the anchored version grammar.
    ///
    /// Fails with [`VersionError::Malformed`] when the grammar does not match
    /// and with [`VersionError::Component`] when a numeric group does not fit
    /// in a `u64`.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let captures = VERSION
            .captures(version)
            .ok_or_else(|| VersionError::Malformed(version.to_string()))?;

        let components = captures["numeric"]
            .split('.')
            .map(|part| {
                if part == "*" {
                    return Ok(Component::Wildcard);
                }
                part.parse::<u64>()
                    .map(Component::Number)
                    .map_err(|source| VersionError::Component {
                        version: version.to_string(),
                        component: part.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let suffix = captures.name("suffix").map(|m| Suffix::parse(m.as_str()));

        Ok(VersionToken { components, suffix })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn suffix(&self) -> Option<&Suffix> {
        self.suffix.as_ref()
    }

    /// Component at `index`, zero when the token is shorter
    pub fn component(&self, index: usize) -> Component {
        self.components
            .get(index)
            .copied()
            .unwrap_or(Component::Number(0))
    }

    pub fn suffix_has_wildcard(&self) -> bool {
        self.suffix.as_ref().is_some_and(Suffix::has_wildcard)
    }

    pub fn has_wildcard(&self) -> bool {
        self.components.contains(&Component::Wildcard) || self.suffix_has_wildcard()
    }

    /// Replace wildcard components with `0`, and drop the suffix when asked.
    pub fn normalized(&self, drop_suffix: bool) -> VersionToken {
        VersionToken {
            components: self
                .components
                .iter()
                .map(|c| Component::Number(c.value()))
                .collect(),
            suffix: if drop_suffix {
                None
            } else {
                self.suffix.clone()
            },
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match component {
                Component::Number(n) => write!(f, "{n}")?,
                Component::Wildcard => write!(f, "{WILDCARD}")?,
            }
        }
        if let Some(suffix) = &self.suffix {
            if let Some(delimiter) = suffix.delimiter {
                write!(f, "{delimiter}")?;
            }
            f.write_str(&suffix.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_splits_components_and_delimited_suffix() {
        let token = VersionToken::parse("2.346.3_lts").unwrap();

        assert_eq!(
            token.components(),
            &[
                Component::Number(2),
                Component::Number(346),
                Component::Number(3)
            ]
        );
        assert_eq!(
            token.suffix(),
            Some(&Suffix {
                delimiter: Some('_'),
                text: "lts".to_string()
            })
        );
        assert!(!token.has_wildcard());
    }

    #[rstest]
    #[case("1.2.*", true)]
    #[case("1.*.0", true)]
    #[case("1.2.3-rc*", true)]
    #[case("1.2*", true)]
    #[case("1.2.3-rc1", false)]
    #[case("1.2.3", false)]
    fn has_wildcard_detects_components_and_suffix(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(VersionToken::parse(input).unwrap().has_wildcard(), expected);
    }

    #[rstest]
    #[case("1.2.*", false, "1.2.0")]
    #[case("1.*.*", false, "1.0.0")]
    #[case("1.2.*-beta", false, "1.2.0-beta")]
    #[case("1.2.3-rc*", true, "1.2.3")]
    fn normalized_replaces_wildcards(
        #[case] input: &str,
        #[case] drop_suffix: bool,
        #[case] expected: &str,
    ) {
        let token = VersionToken::parse(input).unwrap();
        assert_eq!(token.normalized(drop_suffix).to_string(), expected);
    }

    #[rstest]
    #[case("1")]
    #[case("1.2.3.4")]
    #[case("1.0.2k")]
    #[case("2.0.0+build7")]
    #[case("1.2.*")]
    fn display_reproduces_input(#[case] input: &str) {
        assert_eq!(VersionToken::parse(input).unwrap().to_string(), input);
    }

    #[test]
    fn component_pads_with_zero() {
        let token = VersionToken::parse("1.2").unwrap();
        assert_eq!(token.component(5), Component::Number(0));
    }

    #[rstest]
    #[case("")]
    #[case("1.2.3.4.5")]
    #[case("v1.2")]
    #[case("*.1")]
    fn parse_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            VersionToken::parse(input),
            Err(VersionError::Malformed(_))
        ));
    }

    #[test]
    fn parse_reports_overflowing_component() {
        let result = VersionToken::parse("1.99999999999999999999999");
        assert!(matches!(
            result,
            Err(VersionError::Component { ref component, .. }) if component == "99999999999999999999999"
        ));
    }
}
