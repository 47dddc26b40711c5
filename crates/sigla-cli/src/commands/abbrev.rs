use crate::{Cli, Format};
use anyhow::{Context, Result};
use sigla_assign::Abbreviator;
use sigla_core::WeightTable;
use sigla_render::{JsonlWriter, TextWriter};
use sigla_score::Tokenizer;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(cli: &Cli) -> Result<()> {
    let table = load_weights(cli)?;

    let input = &cli.input;
    if !input.exists() {
        anyhow::bail!("input file {} not found", input.display());
    }
    let contents =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;

    let mut abbreviator = Abbreviator::new(table);
    for line in contents.lines() {
        if cli.verbose > 1 {
            eprintln!("  {:?} -> words {:?}", line, Tokenizer::tokenize(line));
        }
        abbreviator.push(line);
    }

    if !cli.is_quiet() {
        eprintln!(
            "Read {} names from {} ({} skipped: fewer than three letters)",
            abbreviator.len() + abbreviator.skipped(),
            input.display(),
            abbreviator.skipped()
        );
    }

    let skipped = abbreviator.skipped();
    let assignments = abbreviator.finish();

    if cli.verbose > 0 {
        for assignment in &assignments {
            eprintln!("  {} -> {}", assignment.name, assignment.abbreviation);
        }
    }

    let output = output_path(cli);
    let rendered = match cli.format {
        Format::Text => TextWriter::new().render(&assignments)?,
        Format::Jsonl => {
            JsonlWriter::new(&input.display().to_string()).render(&assignments, skipped)?
        }
    };
    fs::write(&output, rendered).with_context(|| format!("writing {}", output.display()))?;

    if !cli.is_quiet() {
        eprintln!(
            "Wrote {} abbreviations to {}",
            assignments.len(),
            output.display()
        );
        eprintln!("Done.");
    }

    Ok(())
}

fn load_weights(cli: &Cli) -> Result<WeightTable> {
    match &cli.weights {
        None => Ok(WeightTable::default()),
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading weight table {}", path.display()))?;
            Ok(WeightTable::from_json(&contents)?)
        }
    }
}

/// Derive `<stem>_abbrevs.txt` beside the input when no output is given.
fn output_path(cli: &Cli) -> PathBuf {
    if let Some(output) = &cli.output {
        return output.clone();
    }
    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("names");
    let file = format!("{stem}_abbrevs.txt");
    match cli.input.parent() {
        Some(parent) if parent != Path::new("") => parent.join(file),
        _ => PathBuf::from(file),
    }
}
