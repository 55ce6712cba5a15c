//! Self-contained chart block for one survey question.

use dioxus::prelude::*;

use genai_survey_chart_ui::components::{BarChart, ChartCard};
use genai_survey_model::question::SurveyTopic;

use crate::renderers::{count_bar_label, score_axis_tick, survey_tooltip};
use crate::theme;

/// Card with the question's title, its prompt, and the response bar chart
/// wired to the report's custom renderers.
#[component]
pub fn QuestionChart(topic: SurveyTopic) -> Element {
    let question = topic.question();

    rsx! {
        ChartCard {
            title: question.title.to_string(),
            caption: question.prompt.to_string(),
            BarChart {
                buckets: question.buckets.to_vec(),
                topic,
                fill: theme::accent(topic).to_string(),
                tick: score_axis_tick,
                bar_label: count_bar_label,
                tooltip: survey_tooltip,
            }
        }
    }
}
