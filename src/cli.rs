use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stackgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold backend projects through an AI-assisted interview")]
#[command(
    long_about = "An interactive CLI that collects a target backend stack (language, framework, database, auth method), refines the project description through AI follow-up questions, and dispatches the confirmed selection to a project generation action."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new project through the interactive setup
    Init {
        /// Analysis provider to use (openai, anthropic, gemini)
        #[arg(long)]
        provider: Option<String>,

        /// Model override for the selected provider
        #[arg(long)]
        model: Option<String>,
    },

    /// Show supported languages, frameworks, databases, and auth methods
    Support,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_accepts_provider_and_model() {
        let cli = Cli::parse_from([
            "stackgen",
            "init",
            "--provider",
            "anthropic",
            "--model",
            "claude-sonnet-4-5-20250929",
        ]);
        match cli.command {
            Commands::Init { provider, model } => {
                assert_eq!(provider.as_deref(), Some("anthropic"));
                assert_eq!(model.as_deref(), Some("claude-sonnet-4-5-20250929"));
            }
            _ => panic!("expected init command"),
        }
    }
}
