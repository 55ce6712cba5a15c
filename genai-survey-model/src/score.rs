//! Likert score labels and response buckets.

use serde::{Deserialize, Serialize};

/// One ordinal category of the 5-point Likert scale.
///
/// The scale runs from `One` ("전혀 그렇지 않다") to `Five` ("매우 그렇다").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl ScoreLabel {
    /// All labels in ascending scale order.
    pub const ALL: [ScoreLabel; 5] = [
        ScoreLabel::One,
        ScoreLabel::Two,
        ScoreLabel::Three,
        ScoreLabel::Four,
        ScoreLabel::Five,
    ];

    /// Short axis caption, e.g. "3점".
    pub fn caption(self) -> &'static str {
        match self {
            ScoreLabel::One => "1점",
            ScoreLabel::Two => "2점",
            ScoreLabel::Three => "3점",
            ScoreLabel::Four => "4점",
            ScoreLabel::Five => "5점",
        }
    }

    /// Descriptive anchor text for the ordinal value.
    pub fn anchor(self) -> &'static str {
        match self {
            ScoreLabel::One => "전혀 그렇지 않다",
            ScoreLabel::Two => "그렇지 않은 편이다",
            ScoreLabel::Three => "보통이다",
            ScoreLabel::Four => "그런 편이다",
            ScoreLabel::Five => "매우 그렇다",
        }
    }
}

/// Respondent count for one score label of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub label: ScoreLabel,
    pub count: u32,
}

impl ScoreBucket {
    /// Anchor text for this bucket's label.
    pub fn anchor(&self) -> &'static str {
        self.label.anchor()
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreLabel;

    #[test]
    fn labels_are_in_scale_order() {
        let captions: Vec<&str> = ScoreLabel::ALL.iter().map(|l| l.caption()).collect();
        assert_eq!(captions, vec!["1점", "2점", "3점", "4점", "5점"]);
        assert!(ScoreLabel::One < ScoreLabel::Five);
    }

    #[test]
    fn anchors_match_the_questionnaire() {
        assert_eq!(ScoreLabel::One.anchor(), "전혀 그렇지 않다");
        assert_eq!(ScoreLabel::Three.anchor(), "보통이다");
        assert_eq!(ScoreLabel::Five.anchor(), "매우 그렇다");
    }
}
