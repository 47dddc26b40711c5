use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod commands;

/// Sigla — deterministic three-letter abbreviation assigner.
#[derive(Parser, Debug)]
#[command(name = "sigla", version, about)]
struct Cli {
    /// Input file with one name per line
    input: PathBuf,

    /// Output file (defaults to `<input stem>_abbrevs.txt` beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// JSON file mapping each uppercase letter to a positive weight
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Each name on one line, its abbreviation on the next
    Text,
    /// Header, one JSON entry per name, footer
    Jsonl,
}

impl Cli {
    fn is_quiet(&self) -> bool {
        self.quiet
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::abbrev::run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_input() {
        let cli = Cli::try_parse_from(["sigla"]);
        assert!(cli.is_err());
    }

    #[test]
    fn cli_parses_input() {
        let cli = Cli::try_parse_from(["sigla", "names.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("names.txt"));
        assert_eq!(cli.format, Format::Text);
        assert!(cli.output.is_none());
        assert!(cli.weights.is_none());
    }

    #[test]
    fn cli_parses_output() {
        let cli = Cli::try_parse_from(["sigla", "names.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn cli_parses_jsonl_format() {
        let cli = Cli::try_parse_from(["sigla", "names.txt", "--format", "jsonl"]).unwrap();
        assert_eq!(cli.format, Format::Jsonl);
    }

    #[test]
    fn cli_parses_weights_path() {
        let cli = Cli::try_parse_from(["sigla", "names.txt", "--weights", "w.json"]).unwrap();
        assert_eq!(cli.weights, Some(PathBuf::from("w.json")));
    }

    #[test]
    fn cli_parses_verbose() {
        let cli = Cli::try_parse_from(["sigla", "names.txt", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_quiet() {
        let cli = Cli::try_parse_from(["sigla", "names.txt", "--quiet"]).unwrap();
        assert!(cli.is_quiet());
    }
}
