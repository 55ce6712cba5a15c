//! Section 3: survey results, one chart and analysis note per question.
//!
//! The highlighted percentage figures are computed from the datasets
//! rather than written into the prose.

use dioxus::prelude::*;

use genai_survey_model::question::{respondents_label, SurveyTopic};
use genai_survey_model::score::ScoreLabel;

use crate::components::{AnalysisNote, QuestionChart};
use crate::theme;

const HEADING: &str = "margin: 0 0 24px 0; font-size: 24px; font-weight: bold; color: #1f2937; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px;";
const SUBHEADING: &str = "margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #1f2937;";
const NOTE_TEXT: &str = "margin: 0; line-height: 1.8; color: #374151;";

fn pct(value: f64) -> String {
    format!("{:.1}%", value)
}

#[component]
pub fn SurveySection() -> Element {
    let usage = SurveyTopic::Usage.question();
    let submission = SurveyTopic::Submission.question();
    let ethics = SurveyTopic::Ethics.question();

    let usage_accent = theme::accent(SurveyTopic::Usage);
    let submission_accent = theme::accent(SurveyTopic::Submission);
    let ethics_accent = theme::accent(SurveyTopic::Ethics);

    let usage_high = pct(usage.percent_at_or_above(ScoreLabel::Four));
    let submission_high = pct(submission.percent_at_or_above(ScoreLabel::Four));
    let submission_top = respondents_label(submission.buckets[4].count);
    let ethics_high = pct(ethics.percent_at_or_above(ScoreLabel::Four));
    let ethics_low = pct(ethics.percent_at_or_below(ScoreLabel::Two));
    let ethics_mid = pct(ethics.percent_at(ScoreLabel::Three));

    rsx! {
        div {
            class: "section-survey",

            h2 { style: HEADING, "3. 설문 조사 결과" }

            h3 { style: SUBHEADING, "가. AI 활용 경험에 대한 응답 분석" }
            QuestionChart { topic: SurveyTopic::Usage }
            AnalysisNote {
                p {
                    style: NOTE_TEXT,
                    "전체의 "
                    span { style: "color: {usage_accent}; font-weight: 600;", "{usage_high}" }
                    "가 4점 이상(그런 편이다~매우 그렇다)으로 응답하였다. 이는 생성형 AI가 단순 참고 도구를 넘어 실제 학습 수행 과정에 깊숙이 통합되고 있음을 의미한다. AI는 글쓰기, 코딩, 아이디어 발상 등 다양한 방식으로 학생들의 과제 수행을 실질적으로 보조하고 있으며, 학습 과정 전반에 영향을 미치고 있다."
                }
            }

            h3 { style: SUBHEADING, "나. AI 결과물 제출 방식과 윤리 경계" }
            QuestionChart { topic: SurveyTopic::Submission }
            AnalysisNote {
                p {
                    style: NOTE_TEXT,
                    span { style: "color: {submission_accent}; font-weight: 600;", "{submission_high}" }
                    "가 4점 이상으로 응답하였다. 이는 단순히 AI를 활용하는 것을 넘어서, AI가 생성한 결과물을 학습자의 창작물로 오인하거나 그대로 제출하는 경험이 광범위하게 존재함을 시사한다. 특히 5점(매우 그렇다) 응답자도 "
                    span { style: "color: {submission_accent}; font-weight: 600;", "{submission_top}" }
                    "에 달하여, 일정 비율의 학생은 창작과 표절의 경계를 명확히 인식하지 못하거나 윤리적으로 용인하는 태도를 보이는 것으로 해석된다."
                }
            }

            h3 { style: SUBHEADING, "다. AI 활용에 대한 윤리적 인식" }
            QuestionChart { topic: SurveyTopic::Ethics }
            AnalysisNote {
                p {
                    style: NOTE_TEXT,
                    span { style: "color: {ethics_accent}; font-weight: 600;", "{ethics_high}" }
                    "가 4점 이상으로 응답하였으며, 반대로 "
                    span { style: "color: {ethics_accent}; font-weight: 600;", "{ethics_low}" }
                    "는 1-2점(그렇지 않은 편이다-전혀 그렇지 않다)으로 명확한 부정적 인식을 드러냈다. 특히 중간 응답(3점)이 "
                    span { style: "color: {ethics_accent}; font-weight: 600;", "{ethics_mid}" }
                    "에 달한 점은 많은 학생들이 AI 활용에 대한 윤리 판단을 유보하거나 혼란을 경험하고 있음을 보여준다. 이는 AI 활용이 보편화되고 있음에도 불구하고, 교육적 차원에서 이에 대한 윤리적 기준이나 실천적 지침이 충분히 제시되지 않았음을 반증한다."
                }
            }
        }
    }
}
