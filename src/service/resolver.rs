// SPDX-License-Identifier: MIT OR Apache-2.0

//! Path resolution.
//!
//! Turns a [`Lookup`] into a concrete variable name. Hierarchical paths are
//! validated, case-transformed segment by segment, joined with the separator,
//! and, in `prepend` mode, prefixed. Literal lookups are used as given.

use crate::domain::{
    CaseTransform, Lookup, LookupPath, PrefixMode, ProviderConfig, ProviderError, Result,
};

/// Resolves lookups to environment variable names.
///
/// # Examples
///
/// ```
/// use env_provider::domain::{LookupPath, PrefixMode, ProviderConfig};
/// use env_provider::service::PathResolver;
///
/// let config = ProviderConfig {
///     prefix: "MYAPP_".to_string(),
///     prefix_mode: PrefixMode::Prepend,
///     ..ProviderConfig::default()
/// };
/// let resolver = PathResolver::new(&config);
/// let name = resolver.resolve(&LookupPath::from(["database", "host"])).unwrap();
/// assert_eq!(name, "MYAPP_DATABASE_HOST");
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    separator: char,
    case_transform: CaseTransform,
    prefix: String,
    prefix_mode: PrefixMode,
}

impl PathResolver {
    /// Creates a resolver for the given configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            separator: config.separator,
            case_transform: config.case_transform,
            prefix: config.prefix.clone(),
            prefix_mode: config.prefix_mode,
        }
    }

    /// Resolves any kind of lookup.
    pub fn resolve_lookup(&self, lookup: &Lookup) -> Result<String> {
        match lookup {
            Lookup::Path(path) => self.resolve(path),
            Lookup::Literal(name) => Self::resolve_literal(name),
        }
    }

    /// Resolves a hierarchical path.
    ///
    /// `filter_only` mode never alters the joined name; the caller applies the
    /// prefix filter separately.
    ///
    /// # Errors
    ///
    /// * `EmptyPath` - the path has no segments
    /// * `EmptySegment` - a segment is empty or whitespace-only
    pub fn resolve(&self, path: &LookupPath) -> Result<String> {
        if path.is_empty() {
            return Err(ProviderError::EmptyPath);
        }
        check_segments(path.segments())?;

        let mut joined = String::new();
        for (i, segment) in path.segments().iter().enumerate() {
            if i > 0 {
                joined.push(self.separator);
            }
            joined.push_str(&self.case_transform.apply(segment));
        }

        let name = match self.prefix_mode {
            PrefixMode::Prepend if !self.prefix.is_empty() => format!("{}{}", self.prefix, joined),
            _ => joined,
        };

        tracing::debug!("Resolved path {} to {}", path, name);
        Ok(name)
    }

    /// Resolves a literal name: the name itself, unchanged.
    ///
    /// # Errors
    ///
    /// * `EmptySegment` with index 0 - the name is empty or whitespace-only
    pub fn resolve_literal(name: &str) -> Result<String> {
        if name.trim().is_empty() {
            return Err(ProviderError::EmptySegment { index: 0 });
        }
        Ok(name.to_string())
    }
}

fn check_segments(segments: &[String]) -> Result<()> {
    match segments.iter().position(|s| s.trim().is_empty()) {
        Some(index) => Err(ProviderError::EmptySegment { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(
        separator: char,
        case: CaseTransform,
        prefix: &str,
        mode: PrefixMode,
    ) -> PathResolver {
        PathResolver::new(&ProviderConfig {
            separator,
            case_transform: case,
            prefix: prefix.to_string(),
            prefix_mode: mode,
            ..ProviderConfig::default()
        })
    }

    fn default_resolver() -> PathResolver {
        PathResolver::new(&ProviderConfig::default())
    }

    #[test]
    fn test_upper_join() {
        let name = default_resolver()
            .resolve(&LookupPath::from(["database", "host"]))
            .unwrap();
        assert_eq!(name, "DATABASE_HOST");
    }

    #[test]
    fn test_lower_with_dot_separator() {
        let r = resolver('.', CaseTransform::Lower, "", PrefixMode::Prepend);
        assert_eq!(r.resolve(&LookupPath::from(["App", "Name"])).unwrap(), "app.name");
    }

    #[test]
    fn test_preserve_is_plain_join() {
        let r = resolver('-', CaseTransform::Preserve, "", PrefixMode::Prepend);
        assert_eq!(
            r.resolve(&LookupPath::from(["MixedCase", "value", "X"])).unwrap(),
            "MixedCase-value-X"
        );
    }

    #[test]
    fn test_prepend_prefix_is_verbatim() {
        let r = resolver('_', CaseTransform::Upper, "myapp_", PrefixMode::Prepend);
        assert_eq!(r.resolve(&LookupPath::from(["port"])).unwrap(), "myapp_PORT");

        let no_delimiter = resolver('_', CaseTransform::Upper, "APP", PrefixMode::Prepend);
        assert_eq!(no_delimiter.resolve(&LookupPath::from(["port"])).unwrap(), "APPPORT");
    }

    #[test]
    fn test_single_segment_path_is_still_transformed() {
        let r = resolver('_', CaseTransform::Upper, "MYAPP_", PrefixMode::Prepend);
        assert_eq!(r.resolve(&LookupPath::from(["port"])).unwrap(), "MYAPP_PORT");
    }

    #[test]
    fn test_filter_only_leaves_name_unchanged() {
        let r = resolver('_', CaseTransform::Upper, "MYAPP_", PrefixMode::FilterOnly);
        assert_eq!(r.resolve(&LookupPath::from(["myapp", "port"])).unwrap(), "MYAPP_PORT");
        assert_eq!(r.resolve(&LookupPath::from(["other", "port"])).unwrap(), "OTHER_PORT");
    }

    #[test]
    fn test_empty_path() {
        let err = default_resolver().resolve(&LookupPath::default()).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyPath));
    }

    #[test]
    fn test_empty_segment_reports_index() {
        let err = default_resolver()
            .resolve(&LookupPath::from(["database", " \t", "host"]))
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptySegment { index: 1 }));

        let err = default_resolver()
            .resolve(&LookupPath::from(["", "host"]))
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptySegment { index: 0 }));
    }

    #[test]
    fn test_literal_is_untouched() {
        let r = resolver('.', CaseTransform::Lower, "PFX_", PrefixMode::Prepend);
        let name = r.resolve_lookup(&Lookup::literal("API_KEY")).unwrap();
        assert_eq!(name, "API_KEY");
    }

    #[test]
    fn test_blank_literal_is_rejected() {
        let err = PathResolver::resolve_literal("  ").unwrap_err();
        assert!(matches!(err, ProviderError::EmptySegment { index: 0 }));
    }

    #[test]
    fn test_segments_keep_inner_whitespace() {
        let r = resolver('_', CaseTransform::Preserve, "", PrefixMode::Prepend);
        assert_eq!(r.resolve(&LookupPath::from([" a ", "b"])).unwrap(), " a _b");
    }
}
