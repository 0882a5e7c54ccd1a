//! # Stackgen CLI
//!
//! An interactive command-line application that scaffolds backend projects.
//! A short interview collects the target stack (language, framework, database,
//! auth method), an AI analysis pass refines the project description through
//! iterative follow-up questions, and the confirmed selection is dispatched to
//! a generation action registry covering the full stack matrix.
//!
//! ## Features
//!
//! - **Stack Selection**: Closed, typed axes for language, framework, database,
//!   and authentication method
//! - **AI Refinement**: Analysis and follow-up questions via OpenAI, Anthropic,
//!   or Gemini, with graceful degradation on malformed responses
//! - **Eager Action Registry**: Every stack combination resolves to either a
//!   concrete generation action or an explicit fallback
//! - **Terminal Rendering**: Analysis output rendered as markdown with syntax
//!   highlighted code blocks
//!
//! ## Example
//!
//! ```rust,no_run
//! use stackgen_cli::{ActionRegistry, Language, Framework, Database, AuthType, StackKey};
//!
//! let registry = ActionRegistry::build();
//! let key = StackKey::new(
//!     Language::JavaScript,
//!     Framework::Express,
//!     Database::PostgreSQL,
//!     AuthType::Jwt,
//! );
//! let outcome = registry.dispatch(key);
//! println!("{:?}", outcome);
//! ```

pub mod analyst;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod stack;
pub mod ui;
pub mod wizard;

// Re-export commonly used types and functions
pub use error::{Result, ScaffoldError};
pub use generator::{ActionRegistry, DispatchOutcome};
pub use stack::{AuthType, Database, Framework, Language, ProjectSpec, StackKey};

use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_command(command: Commands, config: &config::Config) -> Result<()> {
    match command {
        Commands::Init { provider, model } => handlers::handle_init(config, provider, model).await,
        Commands::Support => handlers::handle_support(),
    }
}
