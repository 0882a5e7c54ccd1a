//! Initial stack selection step: project name plus the four axis choices

use colored::Colorize;
use inquire::{Confirm, InquireError, Select, Text};

use crate::stack::{AuthType, Database, Framework, Language};
use crate::wizard::render::{setup_render_config, step_header};

/// Selections collected before the free-text questions
#[derive(Debug, Clone)]
pub struct InitialSetup {
    pub name: String,
    pub language: Language,
    pub framework: Framework,
    pub database: Database,
    pub use_auth: bool,
    pub auth_type: AuthType,
}

/// Result of the initial setup step
#[derive(Debug)]
pub enum InitialSetupResult {
    Completed(InitialSetup),
    Cancelled,
}

/// Collect the project name and one value from each stack axis.
pub fn collect_initial_setup() -> InitialSetupResult {
    step_header(
        1,
        "Project basics",
        "Pick a name and the backend stack for the new project. Esc cancels the setup.",
    );

    let name = loop {
        match Text::new("What do you want to name your project?").prompt() {
            Ok(value) if !value.trim().is_empty() => break value.trim().to_string(),
            Ok(_) => println!("{}", "A project name is required.".yellow()),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                return InitialSetupResult::Cancelled;
            }
            Err(_) => return InitialSetupResult::Cancelled,
        }
    };

    let Some(language) = select_axis(
        "What language do you prefer for the backend?",
        &Language::ALL,
    ) else {
        return InitialSetupResult::Cancelled;
    };

    let Some(framework) = select_axis("Which framework would you like to use?", &Framework::ALL)
    else {
        return InitialSetupResult::Cancelled;
    };

    let Some(database) = select_axis("Which database would you like to use?", &Database::ALL)
    else {
        return InitialSetupResult::Cancelled;
    };

    let use_auth = match Confirm::new("Would you like to include authentication?")
        .with_default(true)
        .prompt()
    {
        Ok(v) => v,
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            return InitialSetupResult::Cancelled;
        }
        Err(_) => return InitialSetupResult::Cancelled,
    };

    // Asked even when auth starts disabled: the generation matrix needs a
    // value on every axis.
    let Some(auth_type) = select_axis(
        "Which authentication method do you prefer?",
        &AuthType::ALL,
    ) else {
        return InitialSetupResult::Cancelled;
    };

    let setup = InitialSetup {
        name,
        language,
        framework,
        database,
        use_auth,
        auth_type,
    };

    println!(
        "\n{} Stack: {}",
        "✓".green(),
        format!(
            "{}:{}:{}:{}",
            setup.language, setup.framework, setup.database, setup.auth_type
        )
        .cyan()
    );

    InitialSetupResult::Completed(setup)
}

fn select_axis<T: Copy + std::fmt::Display>(message: &str, options: &[T]) -> Option<T> {
    match Select::new(message, options.to_vec())
        .with_render_config(setup_render_config())
        .with_help_message("↑↓ to move, Enter to select, Esc to cancel")
        .prompt()
    {
        Ok(choice) => Some(choice),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => None,
        Err(_) => None,
    }
}
