//! Help listing rendering.
//!
//! A pure projection of the schema's ordered spec list into a plain-text
//! listing: one usage fragment per option followed by its description,
//! blank-line separated. The renderer never writes to any stream; the caller
//! owns I/O.

use crate::{OptionSchema, OptionSpec};

/// Renders the help listing for a schema.
///
/// Output is deterministic: repeated calls on the same schema yield
/// byte-identical strings, in declaration order.
///
/// # Examples
///
/// ```
/// use option_schema_core::{render_help, OptionSchema, OptionSpec, ValueKind};
///
/// let schema = OptionSchema::build(vec![
///     OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int)
///         .with_help("an option taking a numerical value"),
///     OptionSpec::flag(None, Some("long-option"))
///         .with_help("very long option name"),
/// ])
/// .unwrap();
///
/// let text = render_help(&schema);
/// assert!(text.starts_with("-o, --option=int\n    an option taking a numerical value\n"));
/// assert!(text.contains("--long-option\n    very long option name\n"));
/// ```
pub fn render_help(schema: &OptionSchema) -> String {
    let mut out = String::new();
    for spec in schema.specs() {
        out.push_str(&usage_fragment(spec));
        out.push('\n');
        out.push_str("    ");
        out.push_str(&spec.help);
        out.push('\n');
        out.push('\n');
    }
    out
}

/// Usage fragment for one option, e.g. `-o, --option=int` or `-s`.
fn usage_fragment(spec: &OptionSpec) -> String {
    match spec.hint_text() {
        Some(hint) => match (spec.short, spec.long.as_deref()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}={hint}"),
            (Some(short), None) => format!("-{short} {hint}"),
            (None, Some(long)) => format!("--{long}={hint}"),
            // Unreachable for built schemas; kept total for direct callers.
            (None, None) => String::new(),
        },
        None => match (spec.short, spec.long.as_deref()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}"),
            (Some(short), None) => format!("-{short}"),
            (None, Some(long)) => format!("--{long}"),
            (None, None) => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{OptionSchema, OptionSpec, ValueKind};

    use super::*;

    fn sample_schema() -> OptionSchema {
        OptionSchema::build(vec![
            OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int)
                .with_help("an option taking a numerical value"),
            OptionSpec::with_value(Some('s'), None, ValueKind::String)
                .with_help("short option taking a string"),
            OptionSpec::flag(None, Some("long-option")).with_help("very long option name"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_one_entry_per_spec_in_order() {
        let text = render_help(&sample_schema());
        let entries: Vec<&str> = text.split("\n\n").filter(|e| !e.is_empty()).collect();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].starts_with("-o, --option=int"));
        assert!(entries[1].starts_with("-s string"));
        assert!(entries[2].starts_with("--long-option"));
    }

    #[test]
    fn test_render_indents_help_text() {
        let text = render_help(&sample_schema());
        assert!(text.contains("-o, --option=int\n    an option taking a numerical value\n"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let schema = sample_schema();
        assert_eq!(render_help(&schema), render_help(&schema));
    }

    #[test]
    fn test_fragment_value_taking_both_names() {
        let spec = OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int);
        assert_eq!(usage_fragment(&spec), "-o, --option=int");
    }

    #[test]
    fn test_fragment_value_taking_short_only() {
        let spec = OptionSpec::with_value(Some('f'), None, ValueKind::String);
        assert_eq!(usage_fragment(&spec), "-f string");
    }

    #[test]
    fn test_fragment_value_taking_long_only() {
        let spec = OptionSpec::with_value(None, Some("log-file"), ValueKind::String);
        assert_eq!(usage_fragment(&spec), "--log-file=string");
    }

    #[test]
    fn test_fragment_flag_both_names() {
        let spec = OptionSpec::flag(Some('v'), Some("verbose"));
        assert_eq!(usage_fragment(&spec), "-v, --verbose");
    }

    #[test]
    fn test_fragment_flag_single_names() {
        assert_eq!(usage_fragment(&OptionSpec::flag(Some('s'), None)), "-s");
        assert_eq!(
            usage_fragment(&OptionSpec::flag(None, Some("quiet"))),
            "--quiet"
        );
    }

    #[test]
    fn test_fragment_uses_configured_hint() {
        let spec = OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int)
            .with_value_hint("<number>");
        assert_eq!(usage_fragment(&spec), "-o, --option=<number>");
    }

    #[test]
    fn test_render_empty_schema_is_empty() {
        let schema = OptionSchema::build(Vec::new()).unwrap();
        assert_eq!(render_help(&schema), "");
    }
}
