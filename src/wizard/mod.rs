//! Interactive project setup wizard.
//!
//! Every prompt step follows the same shape: a function that returns a result
//! enum with an explicit `Cancelled` variant, so the orchestrator can unwind
//! cleanly when the user backs out.

mod confirmation;
mod initial_setup;
mod orchestrator;
mod project_details;
mod refinement;
mod render;

pub use confirmation::{ConfirmOutcome, confirm_project};
pub use initial_setup::{InitialSetup, InitialSetupResult, collect_initial_setup};
pub use orchestrator::{SetupOutcome, run_setup};
pub use project_details::{ProjectDetails, ProjectDetailsResult, collect_project_details};
pub use refinement::{InteractivePrompter, RefinementPrompter, record_answers, refine};
pub use render::{setup_render_config, step_header};
