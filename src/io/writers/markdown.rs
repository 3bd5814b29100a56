use super::sections::{report_sections, subtitle, Section, REPORT_TITLE};
use crate::io::output::OutputWriter;
use crate::metrics::Dashboard;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        self.write_header(dashboard)?;
        for section in report_sections(dashboard) {
            self.write_section(&section)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        writeln!(self.writer, "# {REPORT_TITLE}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", subtitle(dashboard))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", section.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {} |", section.headers.join(" | "))?;
        let divider: Vec<&str> = section.headers.iter().map(|_| "---").collect();
        writeln!(self.writer, "|{}|", divider.join("|"))?;
        for row in &section.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
