use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::metrics::Dashboard;

pub trait OutputWriter {
    fn write_dashboard(&mut self, dashboard: &Dashboard) -> anyhow::Result<()>;
}

/// Build a writer for `format` targeting `output`, or stdout when absent.
/// File output never carries terminal colors.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let (sink, formatting): (Box<dyn Write>, FormattingConfig) = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            (Box::new(BufWriter::new(file)), FormattingConfig::plain())
        }
        None => (Box::new(io::stdout().lock()), formatting),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, formatting)),
    })
}
