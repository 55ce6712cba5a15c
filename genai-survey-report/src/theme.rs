//! Report color palette.

use genai_survey_model::question::SurveyTopic;

pub const BLUE: &str = "#4361ee";
pub const PURPLE: &str = "#7b2cbf";
pub const TEAL: &str = "#2a9d8f";

/// Pale card backgrounds for callouts and quote cards.
pub const BLUE_TINT: &str = "#eff6ff";
pub const PURPLE_TINT: &str = "#faf5ff";
pub const TEAL_TINT: &str = "#f0fdfa";

/// Borders matching the tinted backgrounds.
pub const BLUE_BORDER: &str = "#bfdbfe";
pub const PURPLE_BORDER: &str = "#e9d5ff";
pub const TEAL_BORDER: &str = "#99f6e4";

pub const TEXT: &str = "#212529";
pub const MUTED_TEXT: &str = "#666666";

/// Accent color for a question's chart and highlighted figures.
pub fn accent(topic: SurveyTopic) -> &'static str {
    match topic {
        SurveyTopic::Usage => BLUE,
        SurveyTopic::Submission => PURPLE,
        SurveyTopic::Ethics => TEAL,
    }
}

#[cfg(test)]
mod tests {
    use super::accent;
    use genai_survey_model::question::SurveyTopic;

    #[test]
    fn each_topic_has_its_own_accent() {
        let accents: Vec<&str> = SurveyTopic::ALL.iter().map(|t| accent(*t)).collect();
        assert_eq!(accents, vec!["#4361ee", "#7b2cbf", "#2a9d8f"]);
    }
}
