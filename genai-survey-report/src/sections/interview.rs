//! Section 4: qualitative analysis of the three interviews.

use dioxus::prelude::*;

use crate::components::QuoteCard;
use crate::theme;

const HEADING: &str = "margin: 0 0 24px 0; font-size: 24px; font-weight: bold; color: #1f2937; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px;";
const SUBHEADING: &str = "margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #1f2937;";
const PARAGRAPH: &str = "margin: 0 0 16px 0; line-height: 1.7; color: #374151;";
const QUOTE_GRID: &str = "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 16px;";

static INTERVIEW_ILLUSTRATION: Asset = asset!("/assets/students-interview-illustration.jpg");

#[component]
pub fn InterviewSection() -> Element {
    rsx! {
        div {
            class: "section-interview",
            style: "color: #374151;",

            h2 { style: HEADING, "4. 인터뷰 기반 질적 분석" }

            div {
                style: "display: flex; justify-content: center; margin-bottom: 24px;",
                img {
                    src: INTERVIEW_ILLUSTRATION,
                    alt: "학생 인터뷰 장면 일러스트",
                    style: "max-width: 100%; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);",
                }
            }

            div {
                style: "margin-bottom: 40px;",
                h3 { style: SUBHEADING, "1) 활용 기준 인식" }
                div {
                    style: QUOTE_GRID,
                    QuoteCard {
                        quote: "AI 결과물이 너무 티 나면 점수 깎일까 봐 수정함".to_string(),
                        tint: theme::PURPLE_TINT.to_string(),
                        border: theme::PURPLE_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "AI가 똑똑할수록 오히려 더 위험하다".to_string(),
                        tint: theme::PURPLE_TINT.to_string(),
                        border: theme::PURPLE_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "직접 해야 과제의 의미가 있다".to_string(),
                        tint: theme::PURPLE_TINT.to_string(),
                        border: theme::PURPLE_BORDER.to_string(),
                    }
                }
                p {
                    style: PARAGRAPH,
                    "심층 인터뷰를 통해 학생들은 생성형 AI의 활용 과정에서 다양한 심리적 반응과 자기 정당화 논리를 표현하였다. 한 학생은 \"시간이 없을 때 그냥 제출했지만 찝찝했다\"라고 응답하며 내면적 갈등을 표출하였고, 또 다른 학생은 \"그 시간에 다른 공부를 하는 것이 더 낫다고 생각했다\"며 효율성에 기반한 판단을 강조하였다."
                }
            }

            div {
                style: "margin-bottom: 40px;",
                h3 { style: SUBHEADING, "2) 감정적 반응" }
                div {
                    style: QUOTE_GRID,
                    QuoteCard {
                        quote: "계속 쓰다 보면 내가 바보가 되는 느낌".to_string(),
                        tint: theme::BLUE_TINT.to_string(),
                        border: theme::BLUE_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "뇌가 쪼그라드는 느낌, 무력감이 든다".to_string(),
                        tint: theme::BLUE_TINT.to_string(),
                        border: theme::BLUE_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "덕분에 앱 개발 프로젝트를 처음으로 혼자 완성했다!".to_string(),
                        tint: theme::BLUE_TINT.to_string(),
                        border: theme::BLUE_BORDER.to_string(),
                    }
                }
                p {
                    style: PARAGRAPH,
                    "이와 동시에, AI 활용에 대한 부정적 정서도 확인되었다. \"계속 AI에 의존하니 내가 바보가 되는 느낌이 들었다\", \"뇌가 쪼그라드는 것 같았다\", \"무력감을 느꼈다\"는 응답은 도구에 대한 의존이 학습자의 자기 정체성과 능동성에 미치는 심리적 영향을 보여준다. 반면, 유료 사용자였던 학생은 \"이전에는 혼자 하기 어려웠던 앱 개발 프로젝트를 AI 덕분에 완성할 수 있었다\"고 응답하며, AI가 학습의 확장성과 창의적 도전을 가능케 하는 긍정적 자극이 될 수 있음을 언급하였다."
                }
            }

            div {
                style: "margin-bottom: 40px;",
                h3 { style: SUBHEADING, "3) 윤리 판단 기준" }
                div {
                    style: QUOTE_GRID,
                    QuoteCard {
                        quote: "다들 쓰니까 괜찮지 않나 싶다".to_string(),
                        tint: theme::TEAL_TINT.to_string(),
                        border: theme::TEAL_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "출처도 안 밝히고 제출하면 당연히 표절이다".to_string(),
                        tint: theme::TEAL_TINT.to_string(),
                        border: theme::TEAL_BORDER.to_string(),
                    }
                    QuoteCard {
                        quote: "그 기준을 학교에서 정확히 알려준 적은 없다".to_string(),
                        tint: theme::TEAL_TINT.to_string(),
                        border: theme::TEAL_BORDER.to_string(),
                    }
                }
                p {
                    style: PARAGRAPH,
                    "이러한 응답은 AI 활용이 단순히 '윤리적이냐, 아니냐'의 이분법적 문제가 아니라, 학습자의 심리, 정체성, 자율성과 깊이 연결된 복합적 현상임을 시사한다."
                }
            }
        }
    }
}
