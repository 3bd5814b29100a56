use super::sections::{report_sections, subtitle, Section, REPORT_TITLE};
use crate::formatting::{format_hours, format_pct, FormattingConfig, Styler};
use crate::io::output::OutputWriter;
use crate::metrics::Dashboard;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            styler: Styler::new(formatting),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        self.write_header(dashboard)?;
        for section in report_sections(dashboard) {
            self.write_section(&section)?;
        }
        self.write_highlights(dashboard)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.styler.header(RULE))?;
        writeln!(self.writer, "{}", self.styler.header(&format!("  {REPORT_TITLE}")))?;
        writeln!(self.writer, "{}", self.styler.header(RULE))?;
        writeln!(self.writer, "{}", self.styler.dim(&subtitle(dashboard)))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(if self.styler.is_enabled() {
                UTF8_FULL
            } else {
                ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(section.headers.clone());
        for row in &section.rows {
            table.add_row(row.clone());
        }

        writeln!(self.writer, "{}", self.styler.bold(&section.title))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// One line per scenario with the headline rough-cut saving
    fn write_highlights(&mut self, dashboard: &Dashboard) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.styler.bold("Highlights"))?;
        for row in &dashboard.summary {
            let saved = format!("{} hrs/project", format_hours(row.hours_saved_per_project));
            writeln!(
                self.writer,
                "  {:<14} {} rough cut saved ({} of total time saved)",
                row.name,
                self.styler.signed(&saved, row.hours_saved_per_project),
                format_pct(row.rough_cut_contribution_pct),
            )?;
        }
        Ok(())
    }
}
