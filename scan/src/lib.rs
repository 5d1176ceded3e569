//! Argument-vector scanning against declarative option schemas.
//!
//! This crate implements the token scanner for option tables built with
//! [`option_schema_core`]. It consumes a raw argument sequence left to
//! right, resolves long options (`--name[=value]`) and short-option clusters
//! (`-abc`) against the schema, validates and records values, and returns
//! the recognized options together with the remaining positional arguments.
//!
//! # Main entry points
//!
//! - [`parse_args`] — parse a pre-split argument vector.
//! - [`parse_line`] — convenience: split a raw command-line string on runs
//!   of whitespace, then parse.
//! - [`Scanner`] — the underlying scanner type, for callers that want to
//!   hold one over a borrowed schema.
//!
//! # Example
//!
//! ```
//! use option_schema_core::{OptionSchema, OptionSpec, ValueKind};
//! use option_schema_scan::parse_args;
//!
//! let schema = OptionSchema::build(vec![
//!     OptionSpec::flag(Some('s'), None),
//!     OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int),
//! ])
//! .unwrap();
//!
//! let outcome = parse_args(&schema, &["-s", "--option=100", "foo.txt", "bar.php"]).unwrap();
//! assert!(outcome.is_set("s"));
//! assert_eq!(outcome.value("o"), Some("100"));
//! assert_eq!(outcome.value("option"), Some("100"));
//! assert_eq!(outcome.positional, vec!["foo.txt", "bar.php"]);
//! ```
//!
//! Parsing is all-or-nothing: the first error aborts the scan and nothing
//! recorded before it is returned. The crate never touches the process
//! environment; surfacing errors as messages or exit codes is the caller's
//! concern.

pub mod scanner;
pub mod validate;

pub use scanner::{ParseError, Scanner};

use option_schema_core::{OptionSchema, ParseOutcome};

/// Parses a pre-split argument vector against the schema.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionSchema, OptionSpec};
/// use option_schema_scan::parse_args;
///
/// let schema = OptionSchema::build(vec![OptionSpec::flag(Some('v'), Some("verbose"))]).unwrap();
///
/// let outcome = parse_args(&schema, &["--verbose", "input.txt"]).unwrap();
/// assert!(outcome.is_set("verbose"));
/// assert_eq!(outcome.positional, vec!["input.txt"]);
/// ```
pub fn parse_args<S: AsRef<str>>(
    schema: &OptionSchema,
    args: &[S],
) -> Result<ParseOutcome, ParseError> {
    Scanner::new(schema).scan(args)
}

/// Splits a raw command-line string on runs of whitespace and parses the
/// resulting vector.
///
/// This is purely an input-normalization convenience; repeated whitespace
/// collapses and an empty line parses to an empty outcome.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionSchema, OptionSpec, ValueKind};
/// use option_schema_scan::{parse_args, parse_line};
///
/// let schema = OptionSchema::build(vec![
///     OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int),
/// ])
/// .unwrap();
///
/// let from_line = parse_line(&schema, "--option=100   foo.txt").unwrap();
/// let from_args = parse_args(&schema, &["--option=100", "foo.txt"]).unwrap();
/// assert_eq!(from_line, from_args);
/// ```
pub fn parse_line(schema: &OptionSchema, line: &str) -> Result<ParseOutcome, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    Scanner::new(schema).scan(&tokens)
}
