//! Report masthead.

use dioxus::prelude::*;

/// Report title and the class/date line.
#[component]
pub fn ReportHeader() -> Element {
    rsx! {
        header {
            style: "text-align: center; margin-bottom: 40px;",
            h1 {
                style: "margin: 0 0 12px 0; font-size: 30px; font-weight: bold; color: #111827;",
                "생성형 인공지능 활용과 윤리 인식에 대한 고등학생 실태 조사 보고서"
            }
            p {
                style: "margin: 0; font-size: 17px; color: #666;",
                "미림마이스터고등학교 1학년 4반 | 2025년 5월"
            }
        }
    }
}
