//! Prompt texts sent to the analysis service.

use crate::stack::ProjectSpec;

/// System preamble for every analysis call.
pub const ANALYST_PREAMBLE: &str = "You are a pragmatic software architect. You help developers \
scope new backend projects: you analyze requirements, point out gaps and risks, and ask sharp \
clarifying questions before any code gets generated. Keep answers concrete and grounded in the \
stack the user picked.";

/// Prompt for the free-form project analysis.
pub fn analysis_prompt(spec: &ProjectSpec) -> String {
    format!(
        "Based on the following project requirements and additional details, provide a comprehensive analysis:\n\
        \n\
        Project Name: {name}\n\
        Language: {language}\n\
        Framework: {framework}\n\
        Database: {database}\n\
        Authentication: {auth}\n\
        Purpose: {purpose}\n\
        Features: {features}\n\
        Additional Details:\n{details}\n\
        \n\
        Please provide:\n\
        1. Required data models with their fields\n\
        2. Key functions and APIs needed\n\
        3. Potential technical considerations or challenges\n\
        4. Suggested architecture approach\n\
        5. Specific implementation recommendations\n\
        6. Areas that might need more clarification\n\
        \n\
        Format the response in a clear, structured way.",
        name = spec.name,
        language = spec.language,
        framework = spec.framework,
        database = spec.database,
        auth = spec.auth_label(),
        purpose = spec.purpose,
        features = spec.features,
        details = spec.additional_details.join("\n"),
    )
}

/// Prompt for generating 3-5 follow-up questions from the current state.
pub fn follow_up_prompt(spec: &ProjectSpec, previous_analysis: &str) -> String {
    let current_state = serde_json::to_string_pretty(spec).unwrap_or_default();

    format!(
        "Based on the following project information and previous analysis, generate 3-5 specific \
        follow-up questions that would help clarify important aspects of the project that haven't \
        been addressed yet. Focus on technical details, user experience, scalability, and specific \
        feature implementation.\n\
        \n\
        Current Project Info:\n{current_state}\n\
        \n\
        Previous Analysis:\n{previous_analysis}\n\
        \n\
        Format the response as a JSON array of objects with 'category' and 'question' fields.\n\
        Example: [{{\"category\": \"Security\", \"question\": \"What level of user data encryption do you require?\"}}]\n\
        Return only the JSON array, with no surrounding prose.",
    )
}
