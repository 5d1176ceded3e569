//! Left-to-right token scanner over a built option schema.
//!
//! The scanner classifies each token as a long option (`--name[=value]`),
//! a short-option cluster (`-abc`), or a bare token, resolves names against
//! the schema's lookup table, validates and records values, and decides when
//! option consumption stops and positional capture begins.
//!
//! Scanning stops at the first of:
//!
//! - a bare `--` token (explicit terminator; everything after it is
//!   positional, verbatim),
//! - a token that does not start with `-` (it and everything after it is
//!   positional),
//! - the end of the argument vector.
//!
//! The first error aborts the scan; no partial accumulation survives in the
//! returned result.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use option_schema_core::{OptionSchema, OptionSpec, ParseOutcome, ParsedValue};

use crate::validate::value_matches;

/// Parse-time errors.
///
/// Each variant carries the dashed option name as the user typed it, so the
/// `Display` message reads like the offending command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token references a name absent from the schema.
    #[error("invalid option: {0}")]
    UnknownOption(String),
    /// A value-taking option was given no value: missing `=value`, no
    /// following token, or not last in its short cluster.
    #[error("option {0} requires a value")]
    MissingValue(String),
    /// A flag-only long option was given an inline value.
    #[error("option {0} does not take a value")]
    UnexpectedValue(String),
    /// A supplied value failed its declared kind's validation.
    #[error("value {value} of option {option} is invalid")]
    InvalidValue {
        /// Dashed option name as typed.
        option: String,
        /// The rejected raw value.
        value: String,
    },
}

/// Token scanner borrowing a built [`OptionSchema`].
///
/// Holds no mutable state between calls; the accumulation for one scan is
/// local to that call, so one scanner (or one schema) can serve concurrent
/// parses. Most consumers should use the crate-level
/// [`parse_args`](crate::parse_args) and [`parse_line`](crate::parse_line)
/// functions instead.
pub struct Scanner<'a> {
    schema: &'a OptionSchema,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given schema.
    pub fn new(schema: &'a OptionSchema) -> Self {
        Self { schema }
    }

    /// Scans the argument vector left to right.
    pub fn scan<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseOutcome, ParseError> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let mut options = BTreeMap::new();

        let mut idx = 0;
        while idx < args.len() {
            let token = args[idx];

            if let Some(rest) = token.strip_prefix("--") {
                if rest.is_empty() {
                    debug!(consumed = idx, "Explicit terminator, capturing remainder");
                    return Ok(outcome(options, &args[idx + 1..]));
                }
                self.long_option(rest, &mut options)?;
            } else if let Some(cluster) = token.strip_prefix('-') {
                idx = self.short_cluster(cluster, &args, idx, &mut options)?;
            } else {
                debug!(index = idx, "Bare token, capturing remainder as positional");
                return Ok(outcome(options, &args[idx..]));
            }

            idx += 1;
        }

        Ok(outcome(options, &[]))
    }

    /// Handles one `--name[=value]` token (leading dashes already stripped).
    fn long_option(
        &self,
        rest: &str,
        options: &mut BTreeMap<String, ParsedValue>,
    ) -> Result<(), ParseError> {
        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };

        let spec = self
            .schema
            .get(name)
            .ok_or_else(|| ParseError::UnknownOption(format!("--{name}")))?;
        debug!(option = name, value = ?inline, "Resolved long option");

        match spec.value {
            Some(kind) => {
                let value =
                    inline.ok_or_else(|| ParseError::MissingValue(format!("--{name}")))?;
                if !value_matches(kind, value) {
                    return Err(ParseError::InvalidValue {
                        option: format!("--{name}"),
                        value: value.to_string(),
                    });
                }
                record(options, spec, Some(value));
            }
            None => {
                if inline.is_some() {
                    return Err(ParseError::UnexpectedValue(format!("--{name}")));
                }
                record(options, spec, None);
            }
        }

        Ok(())
    }

    /// Handles one short cluster token (leading dash already stripped),
    /// evaluating its letters left to right. Returns the index of the last
    /// token consumed, which is past the cluster when the final letter took
    /// the next token as its value.
    fn short_cluster(
        &self,
        cluster: &str,
        args: &[&str],
        idx: usize,
        options: &mut BTreeMap<String, ParsedValue>,
    ) -> Result<usize, ParseError> {
        if cluster.is_empty() {
            return Err(ParseError::UnknownOption("-".to_string()));
        }

        let letters: Vec<char> = cluster.chars().collect();
        let mut idx = idx;

        for (pos, &letter) in letters.iter().enumerate() {
            let spec = self
                .schema
                .get(letter.to_string().as_str())
                .ok_or_else(|| ParseError::UnknownOption(format!("-{letter}")))?;

            match spec.value {
                Some(kind) => {
                    // A value-taking short takes the next whole token, so it
                    // must end its cluster and a next token must exist.
                    if pos + 1 != letters.len() || idx + 1 >= args.len() {
                        return Err(ParseError::MissingValue(format!("-{letter}")));
                    }
                    let value = args[idx + 1];
                    if !value_matches(kind, value) {
                        return Err(ParseError::InvalidValue {
                            option: format!("-{letter}"),
                            value: value.to_string(),
                        });
                    }
                    idx += 1;
                    debug!(option = %letter, value, "Consumed value token for short option");
                    record(options, spec, Some(value));
                }
                None => record(options, spec, None),
            }
        }

        Ok(idx)
    }
}

fn outcome(options: BTreeMap<String, ParsedValue>, positional: &[&str]) -> ParseOutcome {
    ParseOutcome {
        options,
        positional: positional.iter().map(|arg| arg.to_string()).collect(),
    }
}

/// Records one occurrence of `spec` under every name it declares, so an
/// option with both forms reads back identically from both keys.
fn record(options: &mut BTreeMap<String, ParsedValue>, spec: &OptionSpec, value: Option<&str>) {
    if let Some(short) = spec.short {
        record_under(options, &short.to_string(), spec, value);
    }
    if let Some(long) = &spec.long {
        record_under(options, long, spec, value);
    }
}

/// Accumulation per key: overwrite for single-occurrence options, append or
/// increment for accumulating ones.
fn record_under(
    options: &mut BTreeMap<String, ParsedValue>,
    name: &str,
    spec: &OptionSpec,
    value: Option<&str>,
) {
    if !spec.multiple {
        let recorded = match value {
            Some(value) => ParsedValue::Scalar(value.to_string()),
            None => ParsedValue::Flag(true),
        };
        options.insert(name.to_string(), recorded);
        return;
    }

    match (options.get_mut(name), value) {
        (Some(ParsedValue::Values(values)), Some(value)) => values.push(value.to_string()),
        (Some(ParsedValue::Count(count)), None) => *count += 1,
        (_, Some(value)) => {
            options.insert(
                name.to_string(),
                ParsedValue::Values(vec![value.to_string()]),
            );
        }
        (_, None) => {
            options.insert(name.to_string(), ParsedValue::Count(1));
        }
    }
}
