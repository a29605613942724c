// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup paths and lookup requests.
//!
//! A [`LookupPath`] is the ordered list of segments a caller asks for, e.g.
//! `["database", "host"]`. A [`Lookup`] says how the provider should turn it
//! into a variable name: hierarchically, or as a literal name.

use std::fmt;

/// An ordered list of path segments.
///
/// The path is not validated on construction; the resolver rejects empty paths
/// and empty segments with the index of the offending segment.
///
/// # Examples
///
/// ```
/// use env_provider::domain::lookup::LookupPath;
///
/// let path = LookupPath::from(["database", "host"]);
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "database.host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LookupPath(Vec<String>);

impl LookupPath {
    /// Creates a path from its segments.
    pub fn new(segments: Vec<String>) -> Self {
        LookupPath(segments)
    }

    /// Returns the segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the path into its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for LookupPath {
    fn from(segments: Vec<String>) -> Self {
        LookupPath(segments)
    }
}

impl From<&[&str]> for LookupPath {
    fn from(segments: &[&str]) -> Self {
        LookupPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LookupPath {
    fn from(segments: [&str; N]) -> Self {
        LookupPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl AsRef<[String]> for LookupPath {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for LookupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A fetch request.
///
/// Single-segment hierarchical paths are still resolved with the configured
/// case rule and prefix. Callers that want a variable by its exact name, with
/// no transform at all, must ask for it with [`Lookup::Literal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Resolve the path with the configured separator, case rule and prefix.
    Path(LookupPath),
    /// Use the string verbatim as the variable name.
    ///
    /// The prefix filter of `filter_only` mode still applies.
    Literal(String),
}

impl Lookup {
    /// Creates a hierarchical lookup.
    pub fn path(path: impl Into<LookupPath>) -> Self {
        Lookup::Path(path.into())
    }

    /// Creates a literal lookup.
    pub fn literal(name: impl Into<String>) -> Self {
        Lookup::Literal(name.into())
    }
}

impl From<LookupPath> for Lookup {
    fn from(path: LookupPath) -> Self {
        Lookup::Path(path)
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Path(path) => write!(f, "path {path}"),
            Lookup::Literal(name) => write!(f, "literal {name}"),
        }
    }
}
