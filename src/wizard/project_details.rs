//! Free-text project questions: purpose and key features

use inquire::{InquireError, Text};

use crate::wizard::render::step_header;

/// Free-text answers collected after the stack selection
#[derive(Debug, Clone)]
pub struct ProjectDetails {
    pub purpose: String,
    pub features: String,
}

/// Result of the project details step
#[derive(Debug)]
pub enum ProjectDetailsResult {
    Completed(ProjectDetails),
    Cancelled,
}

/// Collect the project purpose and feature list.
pub fn collect_project_details() -> ProjectDetailsResult {
    step_header(
        2,
        "Project description",
        "Describe what the project is for. The answers seed the analysis pass, so more detail \
         means better follow-up questions.",
    );

    let purpose = match Text::new("Please describe the main purpose and goals of your application:")
        .prompt()
    {
        Ok(value) => value.trim().to_string(),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            return ProjectDetailsResult::Cancelled;
        }
        Err(_) => return ProjectDetailsResult::Cancelled,
    };

    let features =
        match Text::new("What are the key features you'd like to implement? (comma-separated)")
            .prompt()
        {
            Ok(value) => value.trim().to_string(),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                return ProjectDetailsResult::Cancelled;
            }
            Err(_) => return ProjectDetailsResult::Cancelled,
        };

    ProjectDetailsResult::Completed(ProjectDetails { purpose, features })
}
