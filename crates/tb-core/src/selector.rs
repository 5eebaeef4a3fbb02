//! Version selector resolution.
//!
//! Callers name a schema either by global ID or by subject plus an optional
//! version argument. The version argument has three accepted shapes, each
//! mapping to a path segment under `/subjects/{subject}/versions/`:
//!
//! ```text
//! (none) | ""   -> latest
//! vN            -> vN        (server picks the latest vN.x.y)
//! vN.N.N        -> vN.N.N    (canonical form)
//! anything else -> CoreError::InvalidFormat
//! ```
//!
//! Both schema fetches and compatibility checks go through
//! [`VersionSelector::parse`], so the two call sites cannot drift apart.

use std::fmt;

use crate::errors::CoreError;
use crate::semver::SemVer;

/// Which schema within a subject a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSelector {
    Latest,
    Major(u64),
    Exact(SemVer),
}

impl VersionSelector {
    /// Classify an optional version argument. Empty input means latest.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFormat`] if the argument is neither a
    /// major-only nor a full version.
    pub fn parse(version: Option<&str>) -> Result<Self, CoreError> {
        match version {
            None | Some("") => Ok(Self::Latest),
            Some(v) if SemVer::is_major_only(v) => SemVer::parse_major(v).map(Self::Major),
            Some(v) if SemVer::is_full(v) => SemVer::parse(v).map(Self::Exact),
            Some(v) => Err(CoreError::InvalidFormat(v.to_string())),
        }
    }

    /// Segment placed after `/versions/` in the request path.
    #[must_use]
    pub fn path_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Major(major) => write!(f, "v{major}"),
            Self::Exact(version) => write!(f, "{version}"),
        }
    }
}

impl From<SemVer> for VersionSelector {
    fn from(version: SemVer) -> Self {
        Self::Exact(version)
    }
}

/// Fully resolved address of a schema fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaTarget {
    ById(i64),
    BySubject {
        subject: String,
        selector: VersionSelector,
    },
}

/// Resolve caller arguments into a [`SchemaTarget`].
///
/// An explicit ID wins and the other arguments are ignored. Empty strings
/// count as absent.
///
/// # Errors
///
/// Returns [`CoreError::MissingSelector`] when neither an ID nor a subject is
/// given, and [`CoreError::InvalidFormat`] for an unrecognized version.
pub fn resolve_target(
    id: Option<i64>,
    subject: Option<&str>,
    version: Option<&str>,
) -> Result<SchemaTarget, CoreError> {
    if let Some(id) = id {
        return Ok(SchemaTarget::ById(id));
    }
    let subject = subject
        .filter(|s| !s.is_empty())
        .ok_or(CoreError::MissingSelector)?;
    Ok(SchemaTarget::BySubject {
        subject: subject.to_string(),
        selector: VersionSelector::parse(version)?,
    })
}
