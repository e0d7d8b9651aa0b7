//! Source column configuration
//!
//! The survey export uses the full question text as its column headers. This
//! module maps every field of [`SurveyResponse`](crate::response::SurveyResponse)
//! to the header it is read from. The mapping is resolved once, during
//! [`transform`](crate::transform::transform); nothing downstream ever sees
//! question text.
//!
//! The built-in [`ColumnMap::default`] matches the current questionnaire.
//! A different export can be supported by deserializing a `ColumnMap` from
//! JSON. Omitted entries keep their default:
//!
//! ```json
//! {
//!   "status": "State",
//!   "tools": { "cursor": "Tools - Cursor IDE" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::response::{QualityStrategy, SdlcPhase, Tool};

macro_rules! tool_question {
    ($name:literal) => {
        concat!(
            "Which AI-powered development tools have you already tried? (multiple select) - ",
            $name
        )
    };
}

macro_rules! quality_question {
    ($name:literal) => {
        concat!(
            "What strategies do you use to ensure the quality of AI-generated code? - ",
            $name
        )
    };
}

/// Maps short field names to the headers of the source export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnMap {
    pub id: String,
    pub status: String,
    pub experience: String,
    pub role: String,
    pub organization_type: String,
    pub industry: String,
    pub compliance: String,
    pub regulatory_influence: String,
    pub ai_experience: String,
    pub sdlc_self_assessment: String,
    pub tools: ToolColumns,
    pub sdlc_phases: SdlcPhaseColumns,
    pub challenges: String,
    pub interaction_pattern: String,
    pub correction_frequency: String,
    pub quality_strategies: QualityStrategyColumns,
    pub transformation_belief: String,
    pub productivity_change: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "#".to_owned(),
            status: "Status".to_owned(),
            experience: "How many years of professional experience do you have in software development or a technically related field?".to_owned(),
            role: "Which role best describes your current position?".to_owned(),
            organization_type: "What type of organization do you work for?".to_owned(),
            industry: "What industry do you primarily work in?".to_owned(),
            compliance: "Do you work in an environment with industry-specific compliance or regulatory requirements?".to_owned(),
            regulatory_influence: "How strongly do regulatory requirements influence your willingness to use Agentic AI in software development?".to_owned(),
            ai_experience: "How would you describe your experience with AI-assisted software development?".to_owned(),
            sdlc_self_assessment: "How would you rate your ability to assess the potential of AI tools across SDLC phases?".to_owned(),
            tools: ToolColumns::default(),
            sdlc_phases: SdlcPhaseColumns::default(),
            challenges: "What do you see as the biggest challenges when using Agentic AI in software development?".to_owned(),
            interaction_pattern: "How would you describe your typical interaction with AI development tools?".to_owned(),
            correction_frequency: "How often do you need to correct or rework AI-generated results?".to_owned(),
            quality_strategies: QualityStrategyColumns::default(),
            transformation_belief: "To what extent do you agree with the following statement: \"Agentic AI will fundamentally change how software is developed within the next 3 years.\"".to_owned(),
            productivity_change: "Thinking about your own work: How has the use of AI tools changed your productivity?".to_owned(),
        }
    }
}

/// Checkbox columns of the tool adoption question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolColumns {
    pub github_copilot: String,
    pub cursor: String,
    pub codex: String,
    pub claude_code: String,
    pub windsurf: String,
    pub gemini: String,
    pub devin: String,
    pub lovable: String,
    pub amazon_q: String,
}

impl Default for ToolColumns {
    fn default() -> Self {
        Self {
            github_copilot: tool_question!("GitHub Copilot").to_owned(),
            cursor: tool_question!("Cursor").to_owned(),
            codex: tool_question!("OpenAI Codex").to_owned(),
            claude_code: tool_question!("Claude Code").to_owned(),
            windsurf: tool_question!("Windsurf").to_owned(),
            gemini: tool_question!("Google Gemini CLI / Antigravity").to_owned(),
            devin: tool_question!("Devin").to_owned(),
            lovable: tool_question!("Lovable").to_owned(),
            amazon_q: tool_question!("Amazon Q Developer").to_owned(),
        }
    }
}

impl ToolColumns {
    #[must_use]
    pub fn column(&self, tool: Tool) -> &str {
        match tool {
            Tool::GithubCopilot => &self.github_copilot,
            Tool::Cursor => &self.cursor,
            Tool::Codex => &self.codex,
            Tool::ClaudeCode => &self.claude_code,
            Tool::Windsurf => &self.windsurf,
            Tool::Gemini => &self.gemini,
            Tool::Devin => &self.devin,
            Tool::Lovable => &self.lovable,
            Tool::AmazonQ => &self.amazon_q,
        }
    }
}

/// Rating columns of the SDLC phase matrix question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdlcPhaseColumns {
    pub phase1: String,
    pub phase2: String,
    pub phase3: String,
    pub phase4: String,
    pub phase5: String,
    pub phase6: String,
}

impl Default for SdlcPhaseColumns {
    fn default() -> Self {
        Self {
            phase1: "Phase 1: Requirements Analysis & Planning".to_owned(),
            phase2: "Phase 2: System Design / Architecture".to_owned(),
            // The export really contains the double space and stray parenthesis.
            phase3: "Phase 3: Coding  / Implementation)".to_owned(),
            phase4: "Phase 4: Testing & Quality Assurance".to_owned(),
            phase5: "Phase 5: Deployment & Integration".to_owned(),
            phase6: "Phase 6: Maintenance & Operations".to_owned(),
        }
    }
}

impl SdlcPhaseColumns {
    #[must_use]
    pub fn column(&self, phase: SdlcPhase) -> &str {
        match phase {
            SdlcPhase::Requirements => &self.phase1,
            SdlcPhase::Design => &self.phase2,
            SdlcPhase::Coding => &self.phase3,
            SdlcPhase::Testing => &self.phase4,
            SdlcPhase::Deployment => &self.phase5,
            SdlcPhase::Maintenance => &self.phase6,
        }
    }
}

/// Checkbox columns of the quality strategy question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityStrategyColumns {
    pub manual_review: String,
    pub automated_tests: String,
    pub static_analysis: String,
    pub optimize_prompts: String,
    pub architecture_specs: String,
    pub pair_programming: String,
    pub cross_check: String,
}

impl Default for QualityStrategyColumns {
    fn default() -> Self {
        Self {
            manual_review: quality_question!("Manual code reviews").to_owned(),
            automated_tests: quality_question!("Automated tests (unit, integration, E2E)").to_owned(),
            static_analysis: quality_question!("Static code analysis / linting").to_owned(),
            optimize_prompts: quality_question!("Optimizing prompts through iteration and examples")
                .to_owned(),
            architecture_specs: quality_question!(
                "Providing architecture specs / context files to the AI"
            )
            .to_owned(),
            pair_programming: quality_question!("Pair-programming mode with AI").to_owned(),
            cross_check: quality_question!("Cross-checking results with a second AI tool")
                .to_owned(),
        }
    }
}

impl QualityStrategyColumns {
    #[must_use]
    pub fn column(&self, strategy: QualityStrategy) -> &str {
        match strategy {
            QualityStrategy::ManualReview => &self.manual_review,
            QualityStrategy::AutomatedTests => &self.automated_tests,
            QualityStrategy::StaticAnalysis => &self.static_analysis,
            QualityStrategy::OptimizePrompts => &self.optimize_prompts,
            QualityStrategy::ArchitectureSpecs => &self.architecture_specs,
            QualityStrategy::PairProgramming => &self.pair_programming,
            QualityStrategy::CrossCheck => &self.cross_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_columns_share_question_prefix() {
        let columns = ToolColumns::default();
        for tool in Tool::ALL {
            assert!(
                columns
                    .column(tool)
                    .starts_with("Which AI-powered development tools have you already tried?"),
                "unexpected column for {tool:?}"
            );
        }
        assert!(columns.column(Tool::AmazonQ).ends_with(" - Amazon Q Developer"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "status": "State", "tools": { "cursor": "Cursor IDE" } }"#;
        let columns: ColumnMap = serde_json::from_str(json).unwrap();

        assert_eq!(columns.status, "State");
        assert_eq!(columns.tools.cursor, "Cursor IDE");
        assert_eq!(columns.tools.devin, ToolColumns::default().devin);
        assert_eq!(columns.id, "#");
        assert_eq!(columns.sdlc_phases, SdlcPhaseColumns::default());
    }

    #[test]
    fn test_round_trips_through_json() {
        let columns = ColumnMap::default();
        let json = serde_json::to_string(&columns).unwrap();
        let parsed: ColumnMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, columns);
    }
}
