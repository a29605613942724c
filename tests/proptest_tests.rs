// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check resolution, caching and conversion against arbitrary
//! inputs.

use env_provider::adapters::MapEnvironment;
use env_provider::domain::{
    CaseTransform, LookupPath, PrefixMode, ProviderConfig, ProviderError, TypedValue,
};
use env_provider::service::converter::convert;
use env_provider::service::{PathResolver, VariableStore};
use proptest::prelude::*;
use std::sync::Arc;

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}"
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..6)
}

fn case_transform() -> impl Strategy<Value = CaseTransform> {
    prop_oneof![
        Just(CaseTransform::Upper),
        Just(CaseTransform::Lower),
        Just(CaseTransform::Preserve),
    ]
}

fn config(
    separator: char,
    case_transform: CaseTransform,
    prefix: String,
    prepend: bool,
) -> ProviderConfig {
    ProviderConfig {
        separator,
        case_transform,
        prefix,
        prefix_mode: if prepend {
            PrefixMode::Prepend
        } else {
            PrefixMode::FilterOnly
        },
        ..ProviderConfig::default()
    }
}

// Resolution is a pure function of path and configuration
proptest! {
    #[test]
    fn test_resolve_is_deterministic(
        segs in segments(),
        separator in prop::sample::select(vec!['_', '.', '-', ':', '/']),
        case in case_transform(),
        prefix in "[A-Z_]{0,6}",
        prepend in any::<bool>(),
    ) {
        let resolver = PathResolver::new(&config(separator, case, prefix, prepend));
        let path = LookupPath::new(segs);
        prop_assert_eq!(resolver.resolve(&path).unwrap(), resolver.resolve(&path).unwrap());
    }
}

// Preserve resolves to a plain join of the segments
proptest! {
    #[test]
    fn test_preserve_is_exact_join(
        segs in prop::collection::vec(
            "\\PC{1,8}".prop_filter("non-blank", |s| !s.trim().is_empty()),
            1..6,
        ),
        separator in prop::sample::select(vec!['_', '.', '-', 'é']),
    ) {
        let resolver = PathResolver::new(&config(
            separator,
            CaseTransform::Preserve,
            String::new(),
            true,
        ));
        let expected = segs.join(&separator.to_string());
        prop_assert_eq!(resolver.resolve(&LookupPath::new(segs)).unwrap(), expected);
    }
}

// Prepend mode always starts with the prefix; filter-only never adds it
proptest! {
    #[test]
    fn test_prefix_modes(segs in segments(), prefix in "[A-Z]{1,5}_") {
        let path = LookupPath::new(segs);

        let prepend = PathResolver::new(&config('_', CaseTransform::Upper, prefix.clone(), true));
        let filter = PathResolver::new(&config('_', CaseTransform::Upper, prefix.clone(), false));

        let prepended = prepend.resolve(&path).unwrap();
        let filtered = filter.resolve(&path).unwrap();
        prop_assert!(prepended.starts_with(&prefix));
        prop_assert_eq!(prepended, format!("{prefix}{filtered}"));
    }
}

// A blank segment anywhere is reported at its index
proptest! {
    #[test]
    fn test_blank_segment_index(
        mut segs in segments(),
        blank in "[ \t]{0,3}",
        pos in any::<prop::sample::Index>(),
    ) {
        let index = pos.index(segs.len());
        segs[index] = blank;
        let resolver = PathResolver::new(&ProviderConfig::default());
        match resolver.resolve(&LookupPath::new(segs)) {
            Err(ProviderError::EmptySegment { index: reported }) => {
                prop_assert_eq!(reported, index);
            }
            other => {
                prop_assert!(false, "expected EmptySegment, got {:?}", other);
            }
        }
    }
}

// Once read, a value never changes for the life of the store
proptest! {
    #[test]
    fn test_fetch_is_idempotent(
        first in "\\PC{0,32}",
        later in prop::collection::vec("\\PC{0,32}", 1..5),
    ) {
        let env = Arc::new(MapEnvironment::new().with_var("PROP_VAR", first.clone()));
        let store = VariableStore::new(env.clone());

        prop_assert_eq!(store.fetch("PROP_VAR").unwrap(), first.clone());
        for value in later {
            env.set("PROP_VAR", value);
            prop_assert_eq!(store.fetch("PROP_VAR").unwrap(), first.clone());
        }
    }
}

// Integers are always numbers, never booleans
proptest! {
    #[test]
    fn test_integers_convert_to_numbers(n in -1_000_000i64..1_000_000) {
        let value = convert(&n.to_string(), true, true).unwrap();
        prop_assert_eq!(value, TypedValue::Number(n as f64));
    }
}

// Finite floats survive a round trip through their string form
proptest! {
    #[test]
    fn test_floats_convert_to_numbers(f in prop::num::f64::NORMAL) {
        let value = convert(&f.to_string(), true, true).unwrap();
        prop_assert_eq!(value, TypedValue::Number(f));
    }
}

// Without type conversion, non-JSON input comes back unchanged
proptest! {
    #[test]
    fn test_conversion_disabled_is_identity(
        s in "\\PC{0,32}".prop_filter("not JSON-like", |s| {
            let t = s.trim_start();
            !t.starts_with('{') && !t.starts_with('[')
        })
    ) {
        prop_assert_eq!(convert(&s, false, true).unwrap(), TypedValue::String(s.clone()));
    }
}

// Conversion never panics on arbitrary input
proptest! {
    #[test]
    fn test_convert_never_panics(s in "\\PC{0,64}", types in any::<bool>(), json in any::<bool>()) {
        let _ = convert(&s, types, json);
    }
}
