//! Value validation for the closed set of value kinds.
//!
//! Each [`ValueKind`] maps to one predicate here. Adding a kind means adding
//! a match arm; the scanner dispatches through [`value_matches`] and never
//! inspects kinds itself.

use std::sync::LazyLock;

use regex::Regex;

use option_schema_core::ValueKind;

/// Optionally signed integer or decimal numeral (e.g. `100`, `-3`, `+1.5`, `.5`).
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)$").expect("static regex must compile")
});

/// Returns `true` when `raw` satisfies the given value kind.
///
/// # Examples
///
/// ```
/// use option_schema_core::ValueKind;
/// use option_schema_scan::validate::value_matches;
///
/// assert!(value_matches(ValueKind::Int, "100"));
/// assert!(value_matches(ValueKind::Int, "-1.5"));
/// assert!(!value_matches(ValueKind::Int, "abc"));
///
/// // Strings accept anything, including the empty string
/// assert!(value_matches(ValueKind::String, ""));
/// ```
pub fn value_matches(kind: ValueKind, raw: &str) -> bool {
    match kind {
        ValueKind::Int => NUMERIC.is_match(raw),
        ValueKind::String => true,
    }
}
