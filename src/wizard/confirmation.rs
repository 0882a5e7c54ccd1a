//! Final summary display and proceed confirmation

use colored::Colorize;
use inquire::{Confirm, InquireError, Select};

use crate::stack::ProjectSpec;
use crate::ui;
use crate::wizard::render::setup_render_config;

/// What the user chose at the confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Proceed with generation.
    Proceed,
    /// Throw the specification away and restart from the beginning.
    StartOver,
    /// Run more refinement rounds on the current specification.
    KeepRefining,
    /// Leave without confirming; nothing gets generated.
    Exit,
}

const CHOICE_START_OVER: &str = "Start over with new specifications";
const CHOICE_KEEP_REFINING: &str = "Continue refining current specifications";
const CHOICE_EXIT: &str = "Exit setup";

/// Show the final summary and ask for explicit confirmation.
pub fn confirm_project(spec: &ProjectSpec, analysis: &str) -> ConfirmOutcome {
    let configuration = serde_json::to_string_pretty(spec).unwrap_or_default();
    let summary = format!(
        "# Project Configuration\n```json\n{}\n```\n\n# Analysis and Recommendations\n\n{}",
        configuration, analysis
    );
    ui::display_section("Final Project Summary", &summary);

    let proceed = match Confirm::new("Are you satisfied with these specifications and ready to proceed?")
        .with_default(true)
        .prompt()
    {
        Ok(v) => v,
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            return ConfirmOutcome::Exit;
        }
        Err(_) => return ConfirmOutcome::Exit,
    };

    if proceed {
        return ConfirmOutcome::Proceed;
    }

    let choices = vec![CHOICE_START_OVER, CHOICE_KEEP_REFINING, CHOICE_EXIT];
    match Select::new("What would you like to do?", choices)
        .with_render_config(setup_render_config())
        .prompt()
    {
        Ok(choice) if choice == CHOICE_START_OVER => ConfirmOutcome::StartOver,
        Ok(choice) if choice == CHOICE_KEEP_REFINING => ConfirmOutcome::KeepRefining,
        Ok(_) => {
            println!("{}", "Leaving setup without generating anything.".dimmed());
            ConfirmOutcome::Exit
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            ConfirmOutcome::Exit
        }
        Err(_) => ConfirmOutcome::Exit,
    }
}
