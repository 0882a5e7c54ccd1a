//! Iterative refinement: follow-up questions, user answers, re-analysis.
//!
//! Each round asks the analysis service for follow-up questions, records the
//! non-blank answers on the specification, and re-analyzes the result. Rounds
//! repeat until the user declines or the configured cap is reached; state is
//! carried in a loop-local accumulator, never on the call stack.

use colored::Colorize;
use inquire::{Confirm, InquireError, Text};

use crate::Result;
use crate::analyst::{FollowUpQuestion, ProjectAnalyst};
use crate::stack::ProjectSpec;
use crate::ui;

/// Interactive input needed during a refinement round.
///
/// Split out from the engine so round bookkeeping can be exercised with
/// scripted input.
pub trait RefinementPrompter {
    /// Collect an answer for one follow-up question. `None` skips it.
    fn collect_answer(&mut self, question: &FollowUpQuestion) -> Option<String>;

    /// Ask whether the user wants another round.
    fn continue_refining(&mut self) -> bool;
}

/// inquire-backed prompter used by the real wizard
pub struct InteractivePrompter;

impl RefinementPrompter for InteractivePrompter {
    fn collect_answer(&mut self, question: &FollowUpQuestion) -> Option<String> {
        println!("\n{} {}", "Category:".dimmed(), question.category.cyan());
        match Text::new(&question.question)
            .with_help_message("Enter to answer, leave blank or Esc to skip")
            .prompt()
        {
            Ok(answer) => Some(answer),
            // Esc skips a single question; answers are optional
            Err(InquireError::OperationCanceled) => None,
            Err(_) => None,
        }
    }

    fn continue_refining(&mut self) -> bool {
        Confirm::new("Would you like to provide more details or clarifications?")
            .with_default(true)
            .prompt()
            .unwrap_or(false)
    }
}

/// Fold one round of answers into detail entries.
///
/// Blank and whitespace-only answers are dropped; recorded entries keep the
/// question and its category so later analysis passes see the full exchange.
pub fn record_answers(
    questions: &[FollowUpQuestion],
    answers: Vec<Option<String>>,
) -> Vec<String> {
    questions
        .iter()
        .zip(answers)
        .filter_map(|(question, answer)| {
            let answer = answer?;
            let answer = answer.trim();
            if answer.is_empty() {
                return None;
            }
            Some(format!(
                "[{}] {}\nAnswer: {}",
                question.category, question.question, answer
            ))
        })
        .collect()
}

/// Run refinement rounds until the user declines or the round cap is reached.
///
/// Returns the refined specification together with the analysis of its latest
/// state. Analysis failures propagate; malformed question payloads were
/// already downgraded to the fallback question by the analyst.
pub async fn refine<A, P>(
    analyst: &A,
    prompter: &mut P,
    mut spec: ProjectSpec,
    mut analysis: String,
    max_rounds: usize,
) -> Result<(ProjectSpec, String)>
where
    A: ProjectAnalyst,
    P: RefinementPrompter,
{
    for round in 1..=max_rounds {
        log::debug!("refinement round {}/{}", round, max_rounds);

        let questions = analyst.follow_up_questions(&spec, &analysis).await?;
        let answers: Vec<Option<String>> = questions
            .iter()
            .map(|question| prompter.collect_answer(question))
            .collect();
        spec.additional_details
            .extend(record_answers(&questions, answers));

        analysis = analyst.analyze(&spec).await?;
        ui::display_section("Updated Analysis", &analysis);

        if round == max_rounds {
            log::info!("reached the refinement round limit ({})", max_rounds);
            break;
        }
        if !prompter.continue_refining() {
            break;
        }
    }

    Ok((spec, analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyst::AnalystResult;
    use crate::stack::{AuthType, Database, Framework, Language};
    use std::sync::Mutex;

    fn sample_spec() -> ProjectSpec {
        ProjectSpec {
            name: "demo".to_string(),
            language: Language::Python,
            framework: Framework::FastAPI,
            database: Database::PostgreSQL,
            use_auth: true,
            auth_type: AuthType::Jwt,
            purpose: "inventory tracking".to_string(),
            features: "items, stock levels".to_string(),
            additional_details: Vec::new(),
        }
    }

    /// Analyst that tags every question with the round that produced it.
    struct ScriptedAnalyst {
        round: Mutex<usize>,
    }

    impl ScriptedAnalyst {
        fn new() -> Self {
            Self {
                round: Mutex::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl ProjectAnalyst for ScriptedAnalyst {
        async fn analyze(&self, spec: &ProjectSpec) -> AnalystResult<String> {
            Ok(format!(
                "analysis with {} details",
                spec.additional_details.len()
            ))
        }

        async fn follow_up_questions(
            &self,
            _spec: &ProjectSpec,
            _previous_analysis: &str,
        ) -> AnalystResult<Vec<FollowUpQuestion>> {
            let mut round = self.round.lock().unwrap();
            *round += 1;
            Ok(vec![FollowUpQuestion {
                category: format!("Round {}", round),
                question: format!("question for round {}", round),
            }])
        }
    }

    /// Prompter that answers every question and continues a fixed number of
    /// times.
    struct ScriptedPrompter {
        answer: Option<String>,
        continues_left: usize,
    }

    impl RefinementPrompter for ScriptedPrompter {
        fn collect_answer(&mut self, _question: &FollowUpQuestion) -> Option<String> {
            self.answer.clone()
        }

        fn continue_refining(&mut self) -> bool {
            if self.continues_left == 0 {
                return false;
            }
            self.continues_left -= 1;
            true
        }
    }

    #[tokio::test]
    async fn test_declining_on_round_n_keeps_rounds_one_through_n() {
        let analyst = ScriptedAnalyst::new();
        let mut prompter = ScriptedPrompter {
            answer: Some("noted".to_string()),
            continues_left: 2,
        };

        let (spec, analysis) = refine(&analyst, &mut prompter, sample_spec(), String::new(), 10)
            .await
            .unwrap();

        // Two "yes" answers means three rounds ran in total.
        assert_eq!(spec.additional_details.len(), 3);
        assert!(spec.additional_details[0].starts_with("[Round 1]"));
        assert!(spec.additional_details[1].starts_with("[Round 2]"));
        assert!(spec.additional_details[2].starts_with("[Round 3]"));
        assert_eq!(analysis, "analysis with 3 details");
    }

    #[tokio::test]
    async fn test_round_cap_bounds_the_loop() {
        let analyst = ScriptedAnalyst::new();
        let mut prompter = ScriptedPrompter {
            answer: Some("more".to_string()),
            continues_left: usize::MAX,
        };

        let (spec, _) = refine(&analyst, &mut prompter, sample_spec(), String::new(), 3)
            .await
            .unwrap();

        assert_eq!(spec.additional_details.len(), 3);
    }

    #[tokio::test]
    async fn test_blank_answers_are_never_recorded() {
        let analyst = ScriptedAnalyst::new();
        let mut prompter = ScriptedPrompter {
            answer: Some("   ".to_string()),
            continues_left: 1,
        };

        let (spec, _) = refine(&analyst, &mut prompter, sample_spec(), String::new(), 10)
            .await
            .unwrap();

        assert!(spec.additional_details.is_empty());
    }

    #[test]
    fn test_record_answers_formats_entries() {
        let questions = vec![
            FollowUpQuestion {
                category: "Security".to_string(),
                question: "Need encryption?".to_string(),
            },
            FollowUpQuestion {
                category: "UX".to_string(),
                question: "Mobile first?".to_string(),
            },
        ];
        let answers = vec![Some("yes, at rest".to_string()), Some("  ".to_string())];

        let entries = record_answers(&questions, answers);
        assert_eq!(
            entries,
            vec!["[Security] Need encryption?\nAnswer: yes, at rest".to_string()]
        );
    }

    #[test]
    fn test_record_answers_skips_unanswered_questions() {
        let questions = vec![FollowUpQuestion::fallback()];
        let entries = record_answers(&questions, vec![None]);
        assert!(entries.is_empty());
    }
}
