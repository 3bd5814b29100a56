use anyhow::Result;
use clap::Parser;
use roughcut::cli::{Cli, Commands};
use roughcut::commands::{self, ReportConfig, ValidateConfig};
use roughcut::formatting::{ColorMode, FormattingConfig};
use roughcut::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Report {
            config,
            format,
            output,
            projects,
            focus,
            plain,
            verbosity: _,
        } => commands::handle_report(ReportConfig {
            config_path: config,
            format,
            output,
            projects,
            focus,
            formatting_config: create_formatting_config(plain),
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::Validate {
            config,
            verbosity: _,
        } => commands::validate_config(ValidateConfig {
            config_path: config,
        }),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
