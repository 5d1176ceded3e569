//! Data model for declarative option tables and parse results.
//!
//! This module defines the types shared by the schema builder, the token
//! scanner, and the help renderer. Option tables are designed for
//! serialization with [`serde`] so they can be loaded from JSON files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value validation kind for value-taking options.
///
/// Describes what a supplied option value must look like. The set is closed
/// but extensible: a new kind only needs a match arm in the value validator,
/// the scanner itself is untouched.
///
/// # Examples
///
/// ```
/// use option_schema_core::ValueKind;
///
/// assert_eq!(ValueKind::Int.hint(), "int");
/// assert_eq!(ValueKind::String.hint(), "string");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Optionally signed integer or decimal numeral.
    Int,
    /// Any raw string, including the empty string.
    String,
}

impl ValueKind {
    /// Textual name of the kind, used as the default value hint in help
    /// listings.
    pub fn hint(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::String => "string",
        }
    }
}

/// One declared option.
///
/// An option has a short form (`-v`), a long form (`--verbose`), or both;
/// names are stored without dashes. A value-taking option carries the
/// [`ValueKind`] its values are validated against, so a spec can never
/// require a value without saying what shape it has.
///
/// Use the constructors [`flag`](OptionSpec::flag) and
/// [`with_value`](OptionSpec::with_value), then chain builder methods.
///
/// # Examples
///
/// ```
/// use option_schema_core::{OptionSpec, ValueKind};
///
/// // Boolean flag
/// let verbose = OptionSpec::flag(Some('v'), Some("verbose"))
///     .with_help("Enable verbose output");
/// assert!(!verbose.takes_value());
///
/// // Option taking an integer value, repeatable
/// let port = OptionSpec::with_value(Some('p'), Some("port"), ValueKind::Int)
///     .allow_multiple();
/// assert!(port.takes_value());
/// assert!(port.multiple);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short name without the dash (e.g., 'o')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Long name without dashes (e.g., "option")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Value kind when the option takes a value; `None` for plain flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueKind>,
    /// Display string for the value in help listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_hint: Option<String>,
    /// Description shown in the help listing
    #[serde(default)]
    pub help: String,
    /// Whether repeated occurrences accumulate instead of overwriting
    #[serde(default)]
    pub multiple: bool,
}

impl OptionSpec {
    /// Creates a flag-only option (takes no value).
    ///
    /// # Examples
    ///
    /// ```
    /// use option_schema_core::OptionSpec;
    ///
    /// let flag = OptionSpec::flag(Some('s'), None);
    /// assert_eq!(flag.short, Some('s'));
    /// assert!(!flag.takes_value());
    /// ```
    pub fn flag(short: Option<char>, long: Option<&str>) -> Self {
        Self {
            short,
            long: long.map(String::from),
            value: None,
            value_hint: None,
            help: String::new(),
            multiple: false,
        }
    }

    /// Creates an option that takes a value of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_schema_core::{OptionSpec, ValueKind};
    ///
    /// let opt = OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int);
    /// assert!(opt.takes_value());
    /// assert_eq!(opt.value, Some(ValueKind::Int));
    /// ```
    pub fn with_value(short: Option<char>, long: Option<&str>, kind: ValueKind) -> Self {
        Self {
            short,
            long: long.map(String::from),
            value: Some(kind),
            value_hint: None,
            help: String::new(),
            multiple: false,
        }
    }

    /// Adds a help description.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }

    /// Overrides the value hint shown in help listings.
    pub fn with_value_hint(mut self, hint: &str) -> Self {
        self.value_hint = Some(hint.to_string());
        self
    }

    /// Marks the option as accumulating across repeated occurrences.
    pub fn allow_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Returns `true` when the option requires a value.
    pub fn takes_value(&self) -> bool {
        self.value.is_some()
    }

    /// Value hint for help rendering: the configured hint, or the value
    /// kind's textual name. `None` for flag-only options.
    pub fn hint_text(&self) -> Option<&str> {
        self.value
            .as_ref()
            .map(|kind| self.value_hint.as_deref().unwrap_or(kind.hint()))
    }
}

/// Value recorded for a resolved option.
///
/// The variant is decided at the point of insertion from the owning spec's
/// shape (value-taking or not, accumulating or not), never inferred later.
/// Serialization is untagged, so an outcome prints as `true`, `"100"`, `3`,
/// or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// Flag-only option, single occurrence semantics (always `true`).
    Flag(bool),
    /// Value-taking option, single occurrence semantics (last write wins).
    Scalar(String),
    /// Flag-only option with accumulation: occurrence count.
    Count(u64),
    /// Value-taking option with accumulation: values in occurrence order.
    Values(Vec<String>),
}

/// Successful result of one parse call.
///
/// Maps every name of every recognized option (an option declared with both
/// short and long forms appears under both keys, with identical values) and
/// carries the positional arguments left after option scanning stopped.
///
/// # Examples
///
/// ```
/// use option_schema_core::{ParseOutcome, ParsedValue};
///
/// let mut outcome = ParseOutcome::default();
/// outcome.options.insert("s".to_string(), ParsedValue::Flag(true));
/// outcome.options.insert("option".to_string(), ParsedValue::Scalar("100".to_string()));
/// outcome.positional.push("foo.txt".to_string());
///
/// assert!(outcome.is_set("s"));
/// assert_eq!(outcome.value("option"), Some("100"));
/// assert_eq!(outcome.positional, vec!["foo.txt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Recognized options keyed by every declared name.
    pub options: BTreeMap<String, ParsedValue>,
    /// Remaining positional arguments, in their original order.
    pub positional: Vec<String>,
}

impl ParseOutcome {
    /// Returns `true` when the named option was seen at least once.
    pub fn is_set(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Single recorded value for a non-accumulating, value-taking option.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(ParsedValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Number of recorded occurrences of the named option.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_schema_core::{ParseOutcome, ParsedValue};
    ///
    /// let mut outcome = ParseOutcome::default();
    /// outcome.options.insert("v".to_string(), ParsedValue::Count(3));
    ///
    /// assert_eq!(outcome.count("v"), 3);
    /// assert_eq!(outcome.count("x"), 0);
    /// ```
    pub fn count(&self, name: &str) -> u64 {
        match self.options.get(name) {
            Some(ParsedValue::Count(n)) => *n,
            Some(ParsedValue::Values(values)) => values.len() as u64,
            Some(_) => 1,
            None => 0,
        }
    }

    /// Accumulated values for a repeatable, value-taking option.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        match self.options.get(name) {
            Some(ParsedValue::Values(values)) => Some(values),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_spec_creation() {
        let spec = OptionSpec::flag(Some('v'), Some("verbose")).with_help("Enable verbose output");

        assert_eq!(spec.short, Some('v'));
        assert_eq!(spec.long, Some("verbose".to_string()));
        assert!(!spec.takes_value());
        assert_eq!(spec.help, "Enable verbose output");
    }

    #[test]
    fn test_option_spec_with_value() {
        let spec = OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int);

        assert!(spec.takes_value());
        assert_eq!(spec.hint_text(), Some("int"));
    }

    #[test]
    fn test_hint_text_prefers_configured_hint() {
        let spec = OptionSpec::with_value(None, Some("option"), ValueKind::Int)
            .with_value_hint("<number>");

        assert_eq!(spec.hint_text(), Some("<number>"));
    }

    #[test]
    fn test_hint_text_absent_for_flags() {
        let spec = OptionSpec::flag(Some('s'), None).with_value_hint("<unused>");

        assert_eq!(spec.hint_text(), None);
    }

    #[test]
    fn test_option_spec_loads_from_json() {
        let json = r#"{"short": "o", "long": "option", "value": "int", "help": "a number"}"#;
        let spec: OptionSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.short, Some('o'));
        assert_eq!(spec.long, Some("option".to_string()));
        assert_eq!(spec.value, Some(ValueKind::Int));
        assert!(!spec.multiple);
    }

    #[test]
    fn test_option_spec_json_defaults() {
        let spec: OptionSpec = serde_json::from_str(r#"{"long": "quiet"}"#).unwrap();

        assert_eq!(spec.short, None);
        assert!(!spec.takes_value());
        assert_eq!(spec.help, "");
    }

    #[test]
    fn test_parsed_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&ParsedValue::Flag(true)).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&ParsedValue::Scalar("100".to_string())).unwrap(),
            "\"100\""
        );
        assert_eq!(serde_json::to_string(&ParsedValue::Count(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ParsedValue::Values(vec!["a".into(), "b".into()])).unwrap(),
            "[\"a\",\"b\"]"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let mut outcome = ParseOutcome::default();
        outcome
            .options
            .insert("s".to_string(), ParsedValue::Flag(true));
        outcome
            .options
            .insert("o".to_string(), ParsedValue::Scalar("100".to_string()));
        outcome
            .options
            .insert("n".to_string(), ParsedValue::Count(2));

        assert!(outcome.is_set("s"));
        assert!(!outcome.is_set("missing"));
        assert_eq!(outcome.value("o"), Some("100"));
        assert_eq!(outcome.value("s"), None);
        assert_eq!(outcome.count("n"), 2);
        assert_eq!(outcome.count("s"), 1);
    }
}
