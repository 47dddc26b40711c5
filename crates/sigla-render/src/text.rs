use sigla_core::Assignment;
use std::io::Write;

/// Writes assignments as plain text: each name on one line, its chosen
/// abbreviation on the next (a blank line when nothing survived).
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render assignments as a plain-text string.
    pub fn render(&self, assignments: &[Assignment]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, assignments)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write plain-text output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        assignments: &[Assignment],
    ) -> anyhow::Result<()> {
        for assignment in assignments {
            writeln!(writer, "{}", assignment.name)?;
            writeln!(writer, "{}", assignment.abbreviation)?;
        }
        Ok(())
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}
