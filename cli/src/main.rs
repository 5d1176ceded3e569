use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use option_schema_core::{OptionSchema, OptionSpec, render_help};

mod output;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "option-parse")]
#[command(about = "Parse argument vectors against declarative option schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an argument vector against a schema file.
    Parse(ParseArgs),
    /// Parse a raw command-line string (split on whitespace) against a schema file.
    ParseLine(ParseLineArgs),
    /// Print the rendered help listing for a schema file.
    Usage(UsageArgs),
    /// Validate one or more schema JSON files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Path to the option schema JSON file (an array of option specs).
    #[arg(long)]
    schema: PathBuf,
    /// Output format for the parse outcome.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Argument vector to parse, supplied after `--`.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ParseLineArgs {
    /// Path to the option schema JSON file.
    #[arg(long)]
    schema: PathBuf,
    /// Raw command-line string to split and parse.
    #[arg(long, allow_hyphen_values = true)]
    line: String,
    /// Output format for the parse outcome.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Path to the option schema JSON file.
    #[arg(long)]
    schema: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema JSON files to validate.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::ParseLine(args) => run_parse_line(args),
        Command::Usage(args) => run_usage(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    let outcome =
        option_schema_scan::parse_args(&schema, &args.args).map_err(|err| err.to_string())?;
    print!("{}", ensure_newline(output::format_outcome(&outcome, args.format)?));
    Ok(())
}

fn run_parse_line(args: ParseLineArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    let outcome =
        option_schema_scan::parse_line(&schema, &args.line).map_err(|err| err.to_string())?;
    print!("{}", ensure_newline(output::format_outcome(&outcome, args.format)?));
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    print!("{}", render_help(&schema));
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = 0usize;
    for path in &args.inputs {
        match load_schema(path) {
            Ok(schema) => println!("{}: ok ({} options)", path.display(), schema.len()),
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", path.display());
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} schema file(s) failed validation"));
    }
    Ok(())
}

fn load_schema(path: &Path) -> Result<OptionSchema, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read schema file '{}': {err}", path.display()))?;
    let specs: Vec<OptionSpec> = serde_json::from_str(&raw)
        .map_err(|err| format!("Failed to parse schema file '{}': {err}", path.display()))?;
    OptionSchema::build(specs).map_err(|err| err.to_string())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
