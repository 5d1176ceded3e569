//! Core types for declarative command-line option tables.
//!
//! This crate defines the data model and auxiliary projections for option
//! parsing:
//!
//! - [`OptionSpec`] — one declared option: short/long names, value kind,
//!   accumulation policy, help text.
//! - [`OptionSchema`] — a validated, ordered option table with an O(1)
//!   name lookup derived at build time.
//! - [`ParsedValue`] / [`ParseOutcome`] — the values recorded for resolved
//!   options and the overall result of a parse call.
//! - [`render_help`] — the plain-text help listing projected from a schema.
//!
//! Schema construction ([`OptionSchema::build`]) catches structural errors
//! such as nameless specs and duplicate names before any parsing happens.
//!
//! The token scanner that consumes argument vectors against a schema lives
//! in the `option-schema-scan` crate; this crate carries no parsing logic.
//!
//! # Example
//!
//! ```
//! use option_schema_core::*;
//!
//! let schema = OptionSchema::build(vec![
//!     OptionSpec::flag(Some('s'), None).with_help("a plain flag"),
//!     OptionSpec::with_value(Some('o'), Some("option"), ValueKind::Int)
//!         .with_help("an option taking a numerical value"),
//! ])
//! .unwrap();
//!
//! assert!(schema.get("option").unwrap().takes_value());
//! assert!(render_help(&schema).contains("-o, --option=int"));
//! ```

mod help;
mod schema;
mod types;

pub use help::render_help;
pub use schema::{OptionSchema, SchemaError};
pub use types::{OptionSpec, ParseOutcome, ParsedValue, ValueKind};
