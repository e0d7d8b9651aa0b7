//! Typed survey records
//!
//! A [`SurveyResponse`] is built once per submission by
//! [`transform`](crate::transform::transform) and never mutated afterwards.
//! Optional numeric answers are `Option<f64>`: a missing or unparsable cell is
//! `None`, never `0`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical experience labels, in ascending order of seniority.
pub const EXPERIENCE_LEVELS: [&str; 4] = ["< 2 years", "2–5 years", "6–10 years", "> 10 years"];

/// One survey submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: String,
    pub status: ResponseStatus,
    pub experience: String,
    pub role: String,
    pub organization_type: String,
    pub industry: String,
    pub compliance: Compliance,
    /// 1–5
    pub regulatory_influence: Option<f64>,
    pub ai_experience: String,
    pub sdlc_self_assessment: String,
    pub tools: ToolFlags,
    pub sdlc_phases: SdlcPhaseRatings,
    /// Challenges in rank order; the first entry is the most important one.
    pub challenges: Vec<String>,
    pub interaction_pattern: String,
    pub correction_frequency: String,
    pub quality_strategies: QualityStrategyFlags,
    /// 1–10
    pub transformation_belief: Option<f64>,
    /// 1–10
    pub productivity_change: Option<f64>,
}

impl SurveyResponse {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == ResponseStatus::Completed
    }
}

/// Returns the completed responses, the population of almost every analysis.
#[must_use]
pub fn completed(responses: &[SurveyResponse]) -> Vec<&SurveyResponse> {
    responses.iter().filter(|r| r.is_completed()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    Completed,
    Incomplete,
}

impl ResponseStatus {
    /// Only the exact value `Completed` marks a completed submission.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "Completed" {
            ResponseStatus::Completed
        } else {
            ResponseStatus::Incomplete
        }
    }
}

/// Whether the respondent works under industry-specific regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    Yes,
    No,
    NotSure,
}

impl Compliance {
    /// Parses a free-text answer.
    ///
    /// `yes` and `1` (case-insensitive, trimmed) are [`Compliance::Yes`],
    /// `not sure` is [`Compliance::NotSure`]; anything else, including an
    /// empty cell, counts as [`Compliance::No`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "yes" | "1" => Compliance::Yes,
            "not sure" => Compliance::NotSure,
            _ => Compliance::No,
        }
    }
}

/// AI development tools covered by the adoption question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    GithubCopilot,
    Cursor,
    Codex,
    ClaudeCode,
    Windsurf,
    Gemini,
    Devin,
    Lovable,
    AmazonQ,
}

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::GithubCopilot,
        Tool::Cursor,
        Tool::Codex,
        Tool::ClaudeCode,
        Tool::Windsurf,
        Tool::Gemini,
        Tool::Devin,
        Tool::Lovable,
        Tool::AmazonQ,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tool::GithubCopilot => "githubCopilot",
            Tool::Cursor => "cursor",
            Tool::Codex => "codex",
            Tool::ClaudeCode => "claudeCode",
            Tool::Windsurf => "windsurf",
            Tool::Gemini => "gemini",
            Tool::Devin => "devin",
            Tool::Lovable => "lovable",
            Tool::AmazonQ => "amazonQ",
        }
    }

    /// Full product name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tool::GithubCopilot => "GitHub Copilot",
            Tool::Cursor => "Cursor",
            Tool::Codex => "OpenAI Codex",
            Tool::ClaudeCode => "Claude Code",
            Tool::Windsurf => "Windsurf",
            Tool::Gemini => "Gemini / Antigravity",
            Tool::Devin => "Devin",
            Tool::Lovable => "Lovable",
            Tool::AmazonQ => "Amazon Q",
        }
    }

    /// Compact name for matrix axes.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Tool::GithubCopilot => "Copilot",
            Tool::Cursor => "Cursor",
            Tool::Codex => "Codex",
            Tool::ClaudeCode => "Claude",
            Tool::Windsurf => "Windsurf",
            Tool::Gemini => "Gemini",
            Tool::Devin => "Devin",
            Tool::Lovable => "Lovable",
            Tool::AmazonQ => "Amazon Q",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

/// Which tools a respondent has tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[expect(clippy::struct_excessive_bools)]
pub struct ToolFlags {
    pub github_copilot: bool,
    pub cursor: bool,
    pub codex: bool,
    pub claude_code: bool,
    pub windsurf: bool,
    pub gemini: bool,
    pub devin: bool,
    pub lovable: bool,
    pub amazon_q: bool,
}

impl ToolFlags {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Tool) -> bool,
    {
        Self {
            github_copilot: f(Tool::GithubCopilot),
            cursor: f(Tool::Cursor),
            codex: f(Tool::Codex),
            claude_code: f(Tool::ClaudeCode),
            windsurf: f(Tool::Windsurf),
            gemini: f(Tool::Gemini),
            devin: f(Tool::Devin),
            lovable: f(Tool::Lovable),
            amazon_q: f(Tool::AmazonQ),
        }
    }

    #[must_use]
    pub fn get(&self, tool: Tool) -> bool {
        match tool {
            Tool::GithubCopilot => self.github_copilot,
            Tool::Cursor => self.cursor,
            Tool::Codex => self.codex,
            Tool::ClaudeCode => self.claude_code,
            Tool::Windsurf => self.windsurf,
            Tool::Gemini => self.gemini,
            Tool::Devin => self.devin,
            Tool::Lovable => self.lovable,
            Tool::AmazonQ => self.amazon_q,
        }
    }

    /// Number of tools tried (0–9).
    #[must_use]
    pub fn count(&self) -> usize {
        Tool::ALL.into_iter().filter(|&t| self.get(t)).count()
    }
}

/// Lifecycle phases rated in the SDLC matrix question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SdlcPhase {
    Requirements,
    Design,
    Coding,
    Testing,
    Deployment,
    Maintenance,
}

impl SdlcPhase {
    pub const ALL: [SdlcPhase; 6] = [
        SdlcPhase::Requirements,
        SdlcPhase::Design,
        SdlcPhase::Coding,
        SdlcPhase::Testing,
        SdlcPhase::Deployment,
        SdlcPhase::Maintenance,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SdlcPhase::Requirements => "phase1",
            SdlcPhase::Design => "phase2",
            SdlcPhase::Coding => "phase3",
            SdlcPhase::Testing => "phase4",
            SdlcPhase::Deployment => "phase5",
            SdlcPhase::Maintenance => "phase6",
        }
    }

    /// Descriptive phase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SdlcPhase::Requirements => "Requirements & Planning",
            SdlcPhase::Design => "System Design",
            SdlcPhase::Coding => "Coding & Implementation",
            SdlcPhase::Testing => "Testing & QA",
            SdlcPhase::Deployment => "Deployment",
            SdlcPhase::Maintenance => "Maintenance",
        }
    }

    /// One-word phase name for compact charts.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            SdlcPhase::Requirements => "Requirements",
            SdlcPhase::Design => "Design",
            SdlcPhase::Coding => "Coding",
            SdlcPhase::Testing => "Testing",
            SdlcPhase::Deployment => "Deployment",
            SdlcPhase::Maintenance => "Maintenance",
        }
    }
}

/// Per-phase AI potential ratings on a 1–5 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SdlcPhaseRatings {
    pub phase1: Option<f64>,
    pub phase2: Option<f64>,
    pub phase3: Option<f64>,
    pub phase4: Option<f64>,
    pub phase5: Option<f64>,
    pub phase6: Option<f64>,
}

impl SdlcPhaseRatings {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(SdlcPhase) -> Option<f64>,
    {
        Self {
            phase1: f(SdlcPhase::Requirements),
            phase2: f(SdlcPhase::Design),
            phase3: f(SdlcPhase::Coding),
            phase4: f(SdlcPhase::Testing),
            phase5: f(SdlcPhase::Deployment),
            phase6: f(SdlcPhase::Maintenance),
        }
    }

    #[must_use]
    pub fn get(&self, phase: SdlcPhase) -> Option<f64> {
        match phase {
            SdlcPhase::Requirements => self.phase1,
            SdlcPhase::Design => self.phase2,
            SdlcPhase::Coding => self.phase3,
            SdlcPhase::Testing => self.phase4,
            SdlcPhase::Deployment => self.phase5,
            SdlcPhase::Maintenance => self.phase6,
        }
    }

    /// Ratings in phase order.
    #[must_use]
    pub fn values(&self) -> [Option<f64>; 6] {
        SdlcPhase::ALL.map(|p| self.get(p))
    }
}

/// Strategies used to assure the quality of AI-generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualityStrategy {
    ManualReview,
    AutomatedTests,
    StaticAnalysis,
    OptimizePrompts,
    ArchitectureSpecs,
    PairProgramming,
    CrossCheck,
}

impl QualityStrategy {
    pub const ALL: [QualityStrategy; 7] = [
        QualityStrategy::ManualReview,
        QualityStrategy::AutomatedTests,
        QualityStrategy::StaticAnalysis,
        QualityStrategy::OptimizePrompts,
        QualityStrategy::ArchitectureSpecs,
        QualityStrategy::PairProgramming,
        QualityStrategy::CrossCheck,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            QualityStrategy::ManualReview => "manualReview",
            QualityStrategy::AutomatedTests => "automatedTests",
            QualityStrategy::StaticAnalysis => "staticAnalysis",
            QualityStrategy::OptimizePrompts => "optimizePrompts",
            QualityStrategy::ArchitectureSpecs => "architectureSpecs",
            QualityStrategy::PairProgramming => "pairProgramming",
            QualityStrategy::CrossCheck => "crossCheck",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            QualityStrategy::ManualReview => "Manual Code Reviews",
            QualityStrategy::AutomatedTests => "Automated Tests",
            QualityStrategy::StaticAnalysis => "Static Analysis / Linting",
            QualityStrategy::OptimizePrompts => "Prompt Optimization",
            QualityStrategy::ArchitectureSpecs => "Architecture Specs",
            QualityStrategy::PairProgramming => "Pair Programming with AI",
            QualityStrategy::CrossCheck => "Cross-Check with 2nd AI",
        }
    }
}

/// Which quality strategies a respondent uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[expect(clippy::struct_excessive_bools)]
pub struct QualityStrategyFlags {
    pub manual_review: bool,
    pub automated_tests: bool,
    pub static_analysis: bool,
    pub optimize_prompts: bool,
    pub architecture_specs: bool,
    pub pair_programming: bool,
    pub cross_check: bool,
}

impl QualityStrategyFlags {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(QualityStrategy) -> bool,
    {
        Self {
            manual_review: f(QualityStrategy::ManualReview),
            automated_tests: f(QualityStrategy::AutomatedTests),
            static_analysis: f(QualityStrategy::StaticAnalysis),
            optimize_prompts: f(QualityStrategy::OptimizePrompts),
            architecture_specs: f(QualityStrategy::ArchitectureSpecs),
            pair_programming: f(QualityStrategy::PairProgramming),
            cross_check: f(QualityStrategy::CrossCheck),
        }
    }

    #[must_use]
    pub fn get(&self, strategy: QualityStrategy) -> bool {
        match strategy {
            QualityStrategy::ManualReview => self.manual_review,
            QualityStrategy::AutomatedTests => self.automated_tests,
            QualityStrategy::StaticAnalysis => self.static_analysis,
            QualityStrategy::OptimizePrompts => self.optimize_prompts,
            QualityStrategy::ArchitectureSpecs => self.architecture_specs,
            QualityStrategy::PairProgramming => self.pair_programming,
            QualityStrategy::CrossCheck => self.cross_check,
        }
    }

    /// Number of strategies used (0–7).
    #[must_use]
    pub fn count(&self) -> usize {
        QualityStrategy::ALL
            .into_iter()
            .filter(|&s| self.get(s))
            .count()
    }
}
