//! The three survey questions and their fixed response distributions.

use serde::{Deserialize, Serialize};

use crate::score::{ScoreBucket, ScoreLabel};

/// Number of students in the surveyed class.
pub const SAMPLE_SIZE: u32 = 18;

/// Count with the respondent unit, e.g. "10명".
pub fn respondents_label(count: u32) -> String {
    format!("{}명", count)
}

/// Identifies one of the three survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyTopic {
    /// 문항 1: use of generative AI on assignments
    Usage,
    /// 문항 2: submitting AI output unedited or as one's own
    Submission,
    /// 문항 3: whether doing so is perceived as a problem
    Ethics,
}

impl SurveyTopic {
    /// All topics in report order.
    pub const ALL: [SurveyTopic; 3] = [
        SurveyTopic::Usage,
        SurveyTopic::Submission,
        SurveyTopic::Ethics,
    ];

    /// The full question record for this topic.
    pub fn question(self) -> SurveyQuestion {
        match self {
            SurveyTopic::Usage => SurveyQuestion::new(
                self,
                "문항 1. 생성형 AI 활용 범위",
                "스스로 해결해야 할 과제를 생성형 AI의 도움을 받아 완성한 적이 있다.",
                [0, 1, 1, 6, 10],
            ),
            SurveyTopic::Submission => SurveyQuestion::new(
                self,
                "문항 2. 생성형 AI 산출물 제출 방식",
                "생성형 AI가 작성한 내용을 별다른 수정 없이 제출하거나, 내가 직접 쓴 것처럼 제출한 적이 있다.",
                [1, 2, 3, 7, 5],
            ),
            SurveyTopic::Ethics => SurveyQuestion::new(
                self,
                "문항 3. 생성형 AI 활용에 대한 윤리적 인식",
                "생성형 AI가 작성한 내용을 제출하더라도, 문제될 것이 없다고 느낀 적이 있다.",
                [1, 3, 7, 4, 3],
            ),
        }
    }
}

/// One survey question with its Likert response distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyQuestion {
    pub topic: SurveyTopic,
    /// Section heading, e.g. "문항 1. 생성형 AI 활용 범위"
    pub title: &'static str,
    /// The statement respondents rated.
    pub prompt: &'static str,
    pub buckets: [ScoreBucket; 5],
}

impl SurveyQuestion {
    fn new(
        topic: SurveyTopic,
        title: &'static str,
        prompt: &'static str,
        counts: [u32; 5],
    ) -> Self {
        let mut buckets = [ScoreBucket {
            label: ScoreLabel::One,
            count: 0,
        }; 5];
        for (bucket, (label, count)) in buckets
            .iter_mut()
            .zip(ScoreLabel::ALL.into_iter().zip(counts))
        {
            bucket.label = label;
            bucket.count = count;
        }
        Self {
            topic,
            title,
            prompt,
            buckets,
        }
    }

    /// Sum of all bucket counts.
    pub fn total_responses(&self) -> u32 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Respondents who answered `label` or higher.
    pub fn count_at_or_above(&self, label: ScoreLabel) -> u32 {
        self.buckets
            .iter()
            .filter(|b| b.label >= label)
            .map(|b| b.count)
            .sum()
    }

    /// Respondents who answered `label` or lower.
    pub fn count_at_or_below(&self, label: ScoreLabel) -> u32 {
        self.buckets
            .iter()
            .filter(|b| b.label <= label)
            .map(|b| b.count)
            .sum()
    }

    /// Share of respondents at or above `label`, in percent.
    pub fn percent_at_or_above(&self, label: ScoreLabel) -> f64 {
        self.share(self.count_at_or_above(label))
    }

    /// Share of respondents at or below `label`, in percent.
    pub fn percent_at_or_below(&self, label: ScoreLabel) -> f64 {
        self.share(self.count_at_or_below(label))
    }

    /// Share of respondents who answered exactly `label`, in percent.
    pub fn percent_at(&self, label: ScoreLabel) -> f64 {
        let count = self
            .buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.count)
            .unwrap_or(0);
        self.share(count)
    }

    fn share(&self, count: u32) -> f64 {
        let total = self.total_responses();
        if total == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::{respondents_label, SurveyTopic, SAMPLE_SIZE};
    use crate::score::ScoreLabel;

    #[test]
    fn every_dataset_covers_the_whole_class() {
        for topic in SurveyTopic::ALL {
            let question = topic.question();
            assert_eq!(question.buckets.len(), 5);
            assert_eq!(question.total_responses(), SAMPLE_SIZE, "{:?}", topic);
            let labels: Vec<ScoreLabel> = question.buckets.iter().map(|b| b.label).collect();
            assert_eq!(labels, ScoreLabel::ALL.to_vec());
        }
    }

    #[test]
    fn fixed_counts_match_the_collected_responses() {
        let counts = |topic: SurveyTopic| -> Vec<u32> {
            topic.question().buckets.iter().map(|b| b.count).collect()
        };
        assert_eq!(counts(SurveyTopic::Usage), vec![0, 1, 1, 6, 10]);
        assert_eq!(counts(SurveyTopic::Submission), vec![1, 2, 3, 7, 5]);
        assert_eq!(counts(SurveyTopic::Ethics), vec![1, 3, 7, 4, 3]);
    }

    #[test]
    fn shares_reproduce_the_report_figures() {
        let pct = |v: f64| format!("{:.1}", v);

        let usage = SurveyTopic::Usage.question();
        assert_eq!(pct(usage.percent_at_or_above(ScoreLabel::Four)), "88.9");

        let submission = SurveyTopic::Submission.question();
        assert_eq!(pct(submission.percent_at_or_above(ScoreLabel::Four)), "66.7");

        let ethics = SurveyTopic::Ethics.question();
        assert_eq!(pct(ethics.percent_at_or_above(ScoreLabel::Four)), "38.9");
        assert_eq!(pct(ethics.percent_at_or_below(ScoreLabel::Two)), "22.2");
        assert_eq!(pct(ethics.percent_at(ScoreLabel::Three)), "38.9");
    }

    #[test]
    fn top_usage_bucket_holds_most_of_the_class() {
        let usage = SurveyTopic::Usage.question();
        let top = usage.buckets[4];
        assert_eq!(top.label, ScoreLabel::Five);
        assert_eq!(top.count, 10);
        assert_eq!(top.anchor(), "매우 그렇다");
        assert_eq!(respondents_label(top.count), "10명");
    }
}
