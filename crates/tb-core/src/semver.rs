//! Semantic version of a schema within its subject.
//!
//! The registry uses a stricter grammar than semver.org: a mandatory `v`
//! prefix, exactly three numeric components, and no leading zeros. There are
//! no pre-release or build segments.
//!
//! ```text
//! v1.2.3   full version      -> SemVer { 1, 2, 3 }
//! v1       major-only        -> selector for the latest v1.x.y
//! 1.2.3    neither           -> rejected
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

static FULL_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("full version pattern should compile")
});

static MAJOR_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(0|[1-9][0-9]*)$")
        .expect("major version pattern should compile")
});

/// Three-part version identifying a schema's position in a subject's history.
///
/// Field order matters: the derived `Ord` compares major, then minor, then
/// patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a full `vMAJOR.MINOR.PATCH` string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFormat`] unless `text` matches the full
    /// grammar exactly, or if a component does not fit in a `u64`.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let caps = FULL_VERSION
            .captures(text)
            .ok_or_else(|| CoreError::InvalidFormat(text.to_string()))?;

        let component = |index: usize| -> Result<u64, CoreError> {
            caps.get(index)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .ok_or_else(|| CoreError::InvalidFormat(text.to_string()))
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// True iff `text` is a full `vN.N.N` version.
    #[must_use]
    pub fn is_full(text: &str) -> bool {
        FULL_VERSION.is_match(text)
    }

    /// True iff `text` is a bare major selector such as `v1`.
    #[must_use]
    pub fn is_major_only(text: &str) -> bool {
        MAJOR_ONLY.is_match(text)
    }

    /// Parse the number out of a major-only selector.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFormat`] if `text` is not of the form `vN`.
    pub fn parse_major(text: &str) -> Result<u64, CoreError> {
        MAJOR_ONLY
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(|| CoreError::InvalidFormat(text.to_string()))
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_full_version() {
        assert_eq!(SemVer::parse("v1.2.3").unwrap(), SemVer::new(1, 2, 3));
    }

    #[rstest]
    #[case("v1")]
    #[case("2.3.1")]
    #[case("v1.2.3.4")]
    #[case("v01.2.3")]
    #[case("v1.02.3")]
    #[case("v1.2.03")]
    #[case("")]
    #[case("v")]
    #[case("V1.2.3")]
    #[case("v1.2.")]
    #[case(" v1.2.3")]
    #[case("v1.2.3\n")]
    #[case("v-1.2.3")]
    fn rejects_malformed_versions(#[case] text: &str) {
        let err = SemVer::parse(text).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormat(ref t) if t == text));
    }

    #[test]
    fn rejects_component_overflow() {
        let text = "v99999999999999999999.0.0";
        assert!(SemVer::is_full(text));
        assert!(matches!(
            SemVer::parse(text),
            Err(CoreError::InvalidFormat(_))
        ));
    }

    #[test]
    fn zero_components_are_allowed() {
        assert_eq!(SemVer::parse("v0.0.0").unwrap(), SemVer::new(0, 0, 0));
        assert_eq!(SemVer::parse("v10.0.20").unwrap(), SemVer::new(10, 0, 20));
    }

    #[test]
    fn display_is_inverse_of_parse() {
        for version in [
            SemVer::new(0, 0, 0),
            SemVer::new(1, 0, 0),
            SemVer::new(3, 14, 159),
            SemVer::new(u64::MAX, 0, 7),
        ] {
            let text = version.to_string();
            assert_eq!(SemVer::parse(&text).unwrap(), version);
        }
    }

    #[rstest]
    #[case("v0", true)]
    #[case("v1", true)]
    #[case("v42", true)]
    #[case("v01", false)]
    #[case("1", false)]
    #[case("v1.0", false)]
    #[case("v1.0.0", false)]
    fn detects_major_only(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(SemVer::is_major_only(text), expected);
    }

    #[test]
    fn major_only_and_full_grammars_are_disjoint() {
        for text in ["v1", "v1.0.0", "v1.0", "latest", "abc", ""] {
            assert!(!(SemVer::is_full(text) && SemVer::is_major_only(text)));
        }
        assert!(!SemVer::is_full("latest"));
        assert!(!SemVer::is_major_only("latest"));
    }

    #[test]
    fn parse_major_extracts_number() {
        assert_eq!(SemVer::parse_major("v7").unwrap(), 7);
        assert!(SemVer::parse_major("v7.0.0").is_err());
    }

    #[test]
    fn orders_by_component() {
        let mut versions = vec![
            SemVer::new(1, 10, 0),
            SemVer::new(1, 2, 3),
            SemVer::new(0, 9, 9),
            SemVer::new(2, 0, 0),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                SemVer::new(0, 9, 9),
                SemVer::new(1, 2, 3),
                SemVer::new(1, 10, 0),
                SemVer::new(2, 0, 0),
            ]
        );
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&SemVer::new(1, 0, 2)).unwrap();
        assert_eq!(json, r#""v1.0.2""#);
        let back: SemVer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SemVer::new(1, 0, 2));
    }

    #[test]
    fn deserialize_rejects_bad_grammar() {
        assert!(serde_json::from_str::<SemVer>(r#""1.0.2""#).is_err());
        assert!(serde_json::from_str::<SemVer>("102").is_err());
    }
}
