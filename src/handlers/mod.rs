//! Command handlers for the CLI entrypoints

use colored::Colorize;

use crate::analyst::{ProviderType, RigAnalyst, ensure_api_key};
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::generator::{ActionRegistry, DispatchOutcome};
use crate::stack::{AuthType, Database, Framework, Language};
use crate::wizard::{SetupOutcome, run_setup};

/// Run the interactive setup and dispatch the confirmed selection.
pub async fn handle_init(
    config: &Config,
    provider_flag: Option<String>,
    model_flag: Option<String>,
) -> Result<()> {
    let provider = match provider_flag {
        Some(raw) => raw
            .parse::<ProviderType>()
            .map_err(ScaffoldError::InvalidArgument)?,
        None => config.agent.provider().unwrap_or_default(),
    };
    ensure_api_key(provider)?;

    let model = model_flag.or_else(|| config.agent.default_model.clone());
    let analyst = RigAnalyst::new(provider, model);
    let registry = ActionRegistry::build();

    let outcome = run_setup(&analyst, &config.refinement).await?;

    match dispatch_confirmed(&registry, &outcome) {
        Some(DispatchOutcome::Generated) => {
            println!("{} Project scaffolding completed.", "✓".green());
        }
        Some(DispatchOutcome::NotImplemented(key)) => {
            println!(
                "{} Scaffolding for {} is not implemented yet. Nothing was generated.",
                "!".yellow(),
                key.to_string().cyan()
            );
        }
        Some(DispatchOutcome::InvalidSelection(key)) => {
            eprintln!("{} Invalid selection: {}", "✗".red(), key);
        }
        None => match outcome {
            SetupOutcome::NotConfirmed => {
                println!("Setup finished without confirmation; no project was generated.");
            }
            SetupOutcome::Cancelled => println!("{}", "Setup cancelled.".dimmed()),
            SetupOutcome::Confirmed { .. } => {}
        },
    }

    Ok(())
}

/// Dispatch only a confirmed selection; any other outcome performs no action.
fn dispatch_confirmed(
    registry: &ActionRegistry,
    outcome: &SetupOutcome,
) -> Option<DispatchOutcome> {
    match outcome {
        SetupOutcome::Confirmed { spec, .. } => Some(registry.dispatch(spec.stack_key())),
        SetupOutcome::NotConfirmed | SetupOutcome::Cancelled => None,
    }
}

/// Print the supported stack axes.
pub fn handle_support() -> Result<()> {
    print_axis("Languages", Language::ALL.iter());
    print_axis("Frameworks", Framework::ALL.iter());
    print_axis("Databases", Database::ALL.iter());
    print_axis("Auth methods", AuthType::ALL.iter());

    let combinations =
        Language::ALL.len() * Framework::ALL.len() * Database::ALL.len() * AuthType::ALL.len();
    println!(
        "\n{} stack combinations in total.",
        combinations.to_string().cyan()
    );
    Ok(())
}

fn print_axis<T: std::fmt::Display>(title: &str, values: impl Iterator<Item = T>) {
    println!("\n{}", title.bright_green().bold());
    for value in values {
        println!("  • {}", value);
    }
}
