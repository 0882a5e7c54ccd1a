//! Setup orchestration - ties prompt steps, analysis, and refinement together

use colored::Colorize;

use crate::Result;
use crate::analyst::ProjectAnalyst;
use crate::config::RefinementConfig;
use crate::stack::ProjectSpec;
use crate::ui;
use crate::wizard::confirmation::{ConfirmOutcome, confirm_project};
use crate::wizard::initial_setup::{InitialSetupResult, collect_initial_setup};
use crate::wizard::project_details::{ProjectDetailsResult, collect_project_details};
use crate::wizard::refinement::{InteractivePrompter, refine};

/// Result of running the interactive setup
#[derive(Debug)]
pub enum SetupOutcome {
    /// User confirmed the refined specification.
    Confirmed { spec: ProjectSpec, analysis: String },
    /// User explicitly declined to proceed.
    NotConfirmed,
    /// User cancelled mid-way.
    Cancelled,
}

/// Run the full setup dialogue.
///
/// Prompt steps unwind to `Cancelled`. Analysis failures propagate and abort
/// the session; nothing is persisted between runs.
pub async fn run_setup<A: ProjectAnalyst>(
    analyst: &A,
    options: &RefinementConfig,
) -> Result<SetupOutcome> {
    'setup: loop {
        print_banner();

        let initial = match collect_initial_setup() {
            InitialSetupResult::Completed(initial) => initial,
            InitialSetupResult::Cancelled => return Ok(SetupOutcome::Cancelled),
        };

        let details = match collect_project_details() {
            ProjectDetailsResult::Completed(details) => details,
            ProjectDetailsResult::Cancelled => return Ok(SetupOutcome::Cancelled),
        };

        let mut spec = ProjectSpec {
            name: initial.name,
            language: initial.language,
            framework: initial.framework,
            database: initial.database,
            use_auth: initial.use_auth,
            auth_type: initial.auth_type,
            purpose: details.purpose,
            features: details.features,
            additional_details: Vec::new(),
        };

        println!();
        println!("{}", "Analyzing your project description...".dimmed());
        let mut analysis = analyst.analyze(&spec).await?;
        ui::display_section("Initial Analysis", &analysis);

        loop {
            let mut prompter = InteractivePrompter;
            (spec, analysis) = refine(analyst, &mut prompter, spec, analysis, options.max_rounds)
                .await?;

            println!("{}", "Running a final analysis pass...".dimmed());
            let final_analysis = analyst.analyze(&spec).await?;

            match confirm_project(&spec, &final_analysis) {
                ConfirmOutcome::Proceed => {
                    return Ok(SetupOutcome::Confirmed {
                        spec,
                        analysis: final_analysis,
                    });
                }
                ConfirmOutcome::StartOver => continue 'setup,
                ConfirmOutcome::KeepRefining => {
                    analysis = final_analysis;
                }
                ConfirmOutcome::Exit => {
                    println!(
                        "{}",
                        "Specifications not confirmed; no project was generated.".yellow()
                    );
                    return Ok(SetupOutcome::NotConfirmed);
                }
            }
        }
    }
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "═══════════════════════════════════════════════════════════════".bright_green()
    );
    println!(
        "{}",
        "                       Project Setup                           "
            .bright_green()
            .bold()
    );
    println!(
        "{}",
        "═══════════════════════════════════════════════════════════════".bright_green()
    );
}
