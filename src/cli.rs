use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tables for an interactive terminal
    Terminal,
    /// Markdown report
    Markdown,
    /// Chart-ready JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roughcut")]
#[command(about = "Rough cut optimization time-savings dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the dashboard and render it
    Report {
        /// Configuration file (defaults to a discovered .roughcut.toml, then reference data)
        #[arg(short, long, env = "ROUGHCUT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of projects in the multi-project projection
        #[arg(long)]
        projects: Option<u32>,

        /// Scenario whose stage distribution is shown next to the baseline
        #[arg(long)]
        focus: Option<String>,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file with the reference data
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration without rendering a report
    Validate {
        /// Configuration file
        #[arg(short, long, env = "ROUGHCUT_CONFIG")]
        config: Option<PathBuf>,

        /// Increase verbosity level
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Report { verbosity, .. } | Commands::Validate { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_defaults_to_terminal() {
        let cli = Cli::try_parse_from(["roughcut", "report"]).unwrap();
        match cli.command {
            Commands::Report {
                format, projects, ..
            } => {
                assert_eq!(format, OutputFormat::Terminal);
                assert_eq!(projects, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verbosity_counts_flags() {
        let cli = Cli::try_parse_from(["roughcut", "report", "-vv", "--format", "json"]).unwrap();
        assert_eq!(cli.command.verbosity(), 2);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["roughcut", "report", "--format", "pdf"]).is_err());
    }
}
