//! Option schema construction and name resolution.
//!
//! [`OptionSchema::build`] validates a list of [`OptionSpec`]s and derives a
//! lookup table keyed by every short and long name, so the scanner resolves
//! tokens in O(1). Construction catches structural errors — nameless specs,
//! unscannable names, duplicate names — before any parsing happens.
//!
//! # Examples
//!
//! ```
//! use option_schema_core::{OptionSchema, OptionSpec, SchemaError, ValueKind};
//!
//! let schema = OptionSchema::build(vec![
//!     OptionSpec::flag(Some('v'), Some("verbose")),
//!     OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int),
//! ])
//! .unwrap();
//!
//! // Both names resolve to the same spec
//! assert!(schema.get("v").is_some());
//! assert!(schema.get("verbose").is_some());
//!
//! // A nameless spec fails at build time
//! let err = OptionSchema::build(vec![OptionSpec::flag(None, None)]).unwrap_err();
//! assert_eq!(err, SchemaError::MissingName);
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::OptionSpec;

/// Schema construction errors.
///
/// Each variant describes a structural problem in the supplied option table.
/// The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A spec declares neither a short nor a long name.
    #[error("option must define a short or long name")]
    MissingName,
    /// Short name is a character the scanner cannot resolve (`-`, `=`, or
    /// whitespace).
    #[error("invalid short option name: {0:?}")]
    InvalidShortName(char),
    /// Long name is shorter than two characters, starts with a dash, or
    /// contains `=` or whitespace.
    #[error("invalid long option name: {0:?}")]
    InvalidLongName(String),
    /// The same name is declared by more than one spec.
    #[error("duplicate option name: {0}")]
    DuplicateName(String),
}

/// A validated option table with a derived name lookup.
///
/// Owns the specs in declaration order (help rendering preserves it) and a
/// mapping from every declared name to its owning spec. A spec with both a
/// short and a long name is reachable from two keys but is a single logical
/// entity. The schema is immutable after [`build`](OptionSchema::build) and
/// can be shared freely across concurrent parse calls.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    specs: Vec<OptionSpec>,
    lookup: HashMap<String, usize>,
}

impl OptionSchema {
    /// Validates the specs and builds the schema.
    ///
    /// Name collisions are a build error rather than a silent overwrite:
    /// every key in the lookup resolves to exactly one spec.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_schema_core::{OptionSchema, OptionSpec, SchemaError};
    ///
    /// let err = OptionSchema::build(vec![
    ///     OptionSpec::flag(Some('v'), Some("verbose")),
    ///     OptionSpec::flag(Some('v'), None),
    /// ])
    /// .unwrap_err();
    /// assert_eq!(err, SchemaError::DuplicateName("v".to_string()));
    /// ```
    pub fn build(specs: Vec<OptionSpec>) -> Result<Self, SchemaError> {
        let mut lookup = HashMap::new();

        for (index, spec) in specs.iter().enumerate() {
            if spec.short.is_none() && spec.long.is_none() {
                return Err(SchemaError::MissingName);
            }

            if let Some(short) = spec.short {
                if short == '-' || short == '=' || short.is_whitespace() {
                    return Err(SchemaError::InvalidShortName(short));
                }
                if lookup.insert(short.to_string(), index).is_some() {
                    return Err(SchemaError::DuplicateName(short.to_string()));
                }
            }

            if let Some(long) = &spec.long {
                if long.chars().count() < 2
                    || long.starts_with('-')
                    || long.contains('=')
                    || long.contains(char::is_whitespace)
                {
                    return Err(SchemaError::InvalidLongName(long.clone()));
                }
                if lookup.insert(long.clone(), index).is_some() {
                    return Err(SchemaError::DuplicateName(long.clone()));
                }
            }
        }

        Ok(Self { specs, lookup })
    }

    /// Resolves a short or long name (without dashes) to its spec.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.lookup.get(name).map(|&index| &self.specs[index])
    }

    /// The specs in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` when no options are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::ValueKind;

    use super::*;

    #[test]
    fn test_build_registers_both_names() {
        let schema = OptionSchema::build(vec![OptionSpec::with_value(
            Some('o'),
            Some("option"),
            ValueKind::Int,
        )])
        .unwrap();

        let by_short = schema.get("o").unwrap();
        let by_long = schema.get("option").unwrap();
        assert_eq!(by_short.long, by_long.long);
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_build_rejects_nameless_spec() {
        let err = OptionSchema::build(vec![OptionSpec::flag(None, None)]).unwrap_err();
        assert_eq!(err, SchemaError::MissingName);
    }

    #[test]
    fn test_build_rejects_duplicate_short_name() {
        let err = OptionSchema::build(vec![
            OptionSpec::flag(Some('s'), None),
            OptionSpec::flag(Some('s'), Some("second")),
        ])
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("s".to_string()));
    }

    #[test]
    fn test_build_rejects_duplicate_long_name() {
        let err = OptionSchema::build(vec![
            OptionSpec::flag(None, Some("verbose")),
            OptionSpec::flag(Some('x'), Some("verbose")),
        ])
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("verbose".to_string()));
    }

    #[test]
    fn test_build_rejects_dashed_long_name() {
        let err =
            OptionSchema::build(vec![OptionSpec::flag(None, Some("--verbose"))]).unwrap_err();
        assert_eq!(err, SchemaError::InvalidLongName("--verbose".to_string()));
    }

    #[test]
    fn test_build_rejects_single_char_long_name() {
        let err = OptionSchema::build(vec![OptionSpec::flag(None, Some("v"))]).unwrap_err();
        assert_eq!(err, SchemaError::InvalidLongName("v".to_string()));
    }

    #[test]
    fn test_build_rejects_long_name_with_equals() {
        let err = OptionSchema::build(vec![OptionSpec::flag(None, Some("a=b"))]).unwrap_err();
        assert_eq!(err, SchemaError::InvalidLongName("a=b".to_string()));
    }

    #[test]
    fn test_build_rejects_dash_short_name() {
        let err = OptionSchema::build(vec![OptionSpec::flag(Some('-'), None)]).unwrap_err();
        assert_eq!(err, SchemaError::InvalidShortName('-'));
    }

    #[test]
    fn test_specs_preserve_declaration_order() {
        let schema = OptionSchema::build(vec![
            OptionSpec::flag(Some('b'), None),
            OptionSpec::flag(Some('a'), None),
            OptionSpec::flag(Some('c'), None),
        ])
        .unwrap();

        let shorts: Vec<Option<char>> = schema.specs().iter().map(|s| s.short).collect();
        assert_eq!(shorts, vec![Some('b'), Some('a'), Some('c')]);
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        let schema = OptionSchema::build(vec![OptionSpec::flag(Some('v'), None)]).unwrap();
        assert!(schema.get("x").is_none());
        assert!(schema.get("verbose").is_none());
    }
}
