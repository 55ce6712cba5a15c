//! Section 5: conclusions and recommendations.

use dioxus::prelude::*;

use crate::components::AnalysisNote;
use crate::theme;

const HEADING: &str = "margin: 0 0 24px 0; font-size: 24px; font-weight: bold; color: #1f2937; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px;";
const SUBHEADING: &str = "margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #1f2937;";
const POINT_TITLE: &str = "margin: 0 0 8px 0; font-size: 17px; font-weight: 600; color: #1f2937;";
const POINT_LIST: &str = "margin: 0 0 12px 0; padding-left: 20px; line-height: 1.8;";
const POINT_TEXT: &str = "margin: 0; line-height: 1.7;";

/// One recommendation callout: bullet points plus the expanded argument.
#[component]
fn Recommendation(
    title: String,
    tint: String,
    border: String,
    points: Vec<String>,
    body: String,
) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h4 { style: POINT_TITLE, "{title}" }
            div {
                style: "padding: 16px; background: {tint}; border: 1px solid {border}; border-radius: 8px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);",
                ul {
                    style: POINT_LIST,
                    for point in points {
                        li { "{point}" }
                    }
                }
                p { style: POINT_TEXT, "{body}" }
            }
        }
    }
}

#[component]
pub fn ConclusionSection() -> Element {
    rsx! {
        div {
            class: "section-conclusion",
            style: "color: #374151;",

            h2 { style: HEADING, "5. 결론 및 제언" }

            div {
                style: "margin-bottom: 32px;",
                h3 { style: SUBHEADING, "가. 결론 요약" }
                AnalysisNote {
                    p {
                        style: "margin: 0; line-height: 1.8; color: #374151;",
                        "조사 결과, 우리 반 학생들은 생성형 AI를 학습 수행에 활발히 활용하고 있으며, 일부는 수정 없는 제출이나 자기 창작물처럼 제출하는 경험도 보유하고 있었다. 그러나 이에 대한 윤리 인식은 뚜렷하게 양분되어 있었다. 일부 학생은 AI 결과물 제출을 문제로 인식하지 않았으며, 반면 다른 학생은 명확한 윤리적 거부감을 드러냈다. 또한 인터뷰를 통해 확인된 바와 같이, AI에 대한 무비판적 사용은 무력감과 자기 상실의 정서를 유발하기도 하였다."
                    }
                }
            }

            h3 { style: SUBHEADING, "나. 교육적 제언" }

            Recommendation {
                title: "1) AI 활용 기준의 명확화".to_string(),
                tint: theme::BLUE_TINT.to_string(),
                border: theme::BLUE_BORDER.to_string(),
                points: vec![
                    "과제 수행 시 AI 사용 여부를 명시하도록 유도".to_string(),
                    "학교 차원의 출처 표기, 재작성 기준 가이드 제공".to_string(),
                ],
                body: "생성형 AI 활용에 대한 윤리적 기준을 명문화해야 한다. 학교는 학생들이 AI를 활용한 학습에서 '어디까지가 허용되는가'에 대한 명확한 기준과 실천 원칙을 제시해야 하며, 출처 표기 및 재작성 가이드라인을 도입할 필요가 있다.".to_string(),
            }

            Recommendation {
                title: "2) 창작과 표절의 차이에 대한 교육 강화".to_string(),
                tint: theme::PURPLE_TINT.to_string(),
                border: theme::PURPLE_BORDER.to_string(),
                points: vec![
                    "단순 사용 금지가 아닌, 책임 있는 활용 방법 제시".to_string(),
                    "AI가 제공한 내용에 대한 재구성·출처 표시 연습 포함".to_string(),
                ],
                body: "창작과 표절의 경계를 명확히 하는 윤리 교육이 병행되어야 한다. 단순 금지보다는 책임 있는 활용 방식을 교육하는 것이 효과적이며, AI가 작성한 내용에 대해 어떻게 수정하고 출처를 명시해야 하는지에 대한 실제적인 훈련이 필요하다.".to_string(),
            }

            Recommendation {
                title: "3) 디지털 시민성과 자율성 교육 통합".to_string(),
                tint: theme::TEAL_TINT.to_string(),
                border: theme::TEAL_BORDER.to_string(),
                points: vec![
                    "AI에 대한 비판적 수용 역량과 윤리적 판단력을 함께 기르기".to_string(),
                    "\"AI 덕분에 가능성을 넓혔다\"는 경험과 \"내가 사라지는 느낌\"이라는 감정을 동시에 수용하는 복합적 교육 설계 필요".to_string(),
                ],
                body: "디지털 시민성 교육과 자율적 학습 태도 강화가 요구된다. 생성형 AI는 학습의 주체가 아니라 보조 도구임을 명확히 인식시켜야 하며, 학생이 결과물에 대한 비판적 검토 능력과 자기 기여도에 대한 판단력을 갖출 수 있도록 교육과정이 설계되어야 한다.".to_string(),
            }
        }
    }
}
