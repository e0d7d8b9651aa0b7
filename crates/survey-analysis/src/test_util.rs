use survey_data::{
    Compliance, QualityStrategyFlags, ResponseStatus, SdlcPhaseRatings, SurveyResponse, ToolFlags,
};

/// A completed response with every answer left blank.
pub(crate) fn respondent() -> SurveyResponse {
    SurveyResponse {
        id: String::new(),
        status: ResponseStatus::Completed,
        experience: String::new(),
        role: String::new(),
        organization_type: String::new(),
        industry: String::new(),
        compliance: Compliance::No,
        regulatory_influence: None,
        ai_experience: String::new(),
        sdlc_self_assessment: String::new(),
        tools: ToolFlags::default(),
        sdlc_phases: SdlcPhaseRatings::default(),
        challenges: Vec::new(),
        interaction_pattern: String::new(),
        correction_frequency: String::new(),
        quality_strategies: QualityStrategyFlags::default(),
        transformation_belief: None,
        productivity_change: None,
    }
}
