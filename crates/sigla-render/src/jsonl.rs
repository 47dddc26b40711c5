use serde::Serialize;
use sigla_core::Assignment;
use std::io::Write;

/// Writes assignments in JSONL format: a header line, one entry per name,
/// and a footer with batch totals.
pub struct JsonlWriter {
    source: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header {
    version: String,
    source: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry {
    name: String,
    abbreviation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
    candidates: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_names: usize,
    skipped_names: usize,
}

impl JsonlWriter {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }

    /// Render assignments as a JSONL string.
    pub fn render(&self, assignments: &[Assignment], skipped: usize) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, assignments, skipped)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        assignments: &[Assignment],
        skipped: usize,
    ) -> anyhow::Result<()> {
        let header = Header {
            version: "0.1".to_string(),
            source: self.source.clone(),
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for assignment in assignments {
            let entry = Entry {
                name: assignment.name.clone(),
                abbreviation: assignment.abbreviation.clone(),
                score: assignment.score,
                candidates: assignment.candidates,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            total_names: assignments.len(),
            skipped_names: skipped,
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
