//! Report footer.

use dioxus::prelude::*;

#[component]
pub fn ReportFooter() -> Element {
    rsx! {
        footer {
            style: "margin-top: 48px; padding: 32px 16px; border-top: 1px solid #d0d0d0; text-align: center; color: #888; font-size: 14px;",
            p {
                style: "margin: 0;",
                "© 2025 미림마이스터고등학교 1학년 4반 | 생성형 AI 윤리 조사 프로젝트"
            }
        }
    }
}
