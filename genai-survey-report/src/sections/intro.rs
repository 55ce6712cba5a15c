//! Section 1–2: motivation, goals, and the survey plan.

use dioxus::prelude::*;

const HEADING: &str = "margin: 0 0 20px 0; font-size: 24px; font-weight: bold; color: #1f2937; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px;";
const PARAGRAPH: &str = "margin: 0 0 16px 0; line-height: 1.7; color: #374151;";
const PLAN_CARD: &str = "padding: 16px; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);";
const PLAN_CARD_TITLE: &str = "margin: 0 0 8px 0; font-size: 16px; font-weight: bold; color: #1f2937;";

#[component]
pub fn IntroSection() -> Element {
    rsx! {
        div {
            class: "section-intro",
            style: "color: #374151;",

            h2 { style: HEADING, "1. 조사 동기 및 목적" }
            p {
                style: PARAGRAPH,
                "최근 생성형 인공지능(Generative AI)의 빠른 확산은 학습과 과제 수행 방식에 커다란 변화를 일으키고 있다. ChatGPT, Gemini, Claude와 같은 도구는 고등학생들에게도 익숙한 존재가 되었고, 이를 통해 학생들은 과제를 더 빠르게, 더 다양하게 수행할 수 있는 기회를 얻고 있다."
            }
            p {
                style: PARAGRAPH,
                "하지만 이러한 기술 활용은 동시에 윤리적 문제를 수반한다. 예를 들어 생성형 AI의 답변을 그대로 제출하는 것이 과연 표절인지, AI가 작성한 내용을 내가 쓴 것처럼 제출해도 되는지 등은 아직 명확한 기준이 부족하다. 학생들 사이에서도 이러한 문제에 대한 인식 차이가 존재하며, 그로 인해 공정성, 창작성, 책임성에 대한 갈등이 발생하고 있다."
            }
            p {
                style: "margin: 0 0 24px 0; line-height: 1.7; color: #374151;",
                "따라서 본 조사는 우리 반 학생들이 생성형 AI를 과제 수행에 어느 정도 활용하고 있으며, 그에 대해 어떤 윤리적 인식을 가지고 있는지를 구체적으로 파악하고자 기획되었다."
            }

            div {
                style: "margin-bottom: 32px; padding: 16px; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px;",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 18px; font-weight: bold; color: #1f2937;",
                    "조사 주요 질문"
                }
                ul {
                    style: "margin: 0; padding-left: 20px; line-height: 1.8;",
                    li { "생성형 AI를 실제 과제에 얼마나 활용하고 있는가?" }
                    li { "생성형 AI가 작성한 내용을 수정 없이 제출한 경험이 있는가?" }
                    li { "그러한 제출이 윤리적으로 문제가 없다고 느끼는가?" }
                }
            }

            h2 { style: HEADING, "2. 조사 계획" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px;",
                div {
                    style: PLAN_CARD,
                    h3 { style: PLAN_CARD_TITLE, "조사 기간" }
                    p { style: "margin: 0;", "2025년 5월 12일 ~ 5월 16일 (5일간)" }
                }
                div {
                    style: PLAN_CARD,
                    h3 { style: PLAN_CARD_TITLE, "대상" }
                    p { style: "margin: 0;", "미림마이스터고등학교 1학년 4반 학생 18명 전원" }
                }
                div {
                    style: PLAN_CARD,
                    h3 { style: PLAN_CARD_TITLE, "방법" }
                    ul {
                        style: "margin: 0; padding-left: 20px;",
                        li { "설문조사: Google Forms (Likert 5점 척도)" }
                        li { "심층 인터뷰: AI 활용 경험이 다양한 3인 선정" }
                    }
                }
            }

            p {
                style: PARAGRAPH,
                "조사는 2025년 5월 12일부터 5월 16일까지 5일간 실시되었으며, 서울시 소재 미림마이스터고등학교 1학년 4반 학생 18명을 대상으로 하였다. 조사 방법은 양적·질적 접근을 혼합한 형태로 구성되었으며, 설문조사와 심층 인터뷰가 병행되었다."
            }
            p {
                style: PARAGRAPH,
                "설문은 Google Forms를 통해 Likert 5점 척도 문항 3개로 구성되었으며, 문항의 구성은 다음과 같다. 첫째, 생성형 AI를 과제 수행에 활용한 경험 여부(행동), 둘째, AI 산출물을 수정 없이 제출하거나 자신이 쓴 것처럼 제출한 경험(윤리 경계), 셋째, AI 결과물 제출이 문제되지 않는다는 인식(윤리 판단)을 다루었다."
            }
            p {
                style: PARAGRAPH,
                "이와 함께, 생성형 AI 활용 양상과 인식의 스펙트럼을 심층적으로 탐색하기 위해 3인을 선정하여 개별 인터뷰를 실시하였다. 인터뷰 대상자는 ▲AI 활용해서 코딩을 잘하는 학생, ▲유료 AI를 사용하는 학생, ▲AI를 잘 쓰지 않는 학생으로 구성되었으며, 질문은 공통 문항 2개와 개인화 문항 1개로 이루어졌다."
            }
        }
    }
}
