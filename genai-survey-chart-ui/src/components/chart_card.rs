//! Titled card wrapper for one chart block.

use dioxus::prelude::*;

/// Props for ChartCard
#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// Chart title shown above the plot
    pub title: String,
    /// The statement respondents rated, shown quoted under the title
    pub caption: String,
    pub children: Element,
}

/// White card holding a chart with its title and caption.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    rsx! {
        div {
            class: "chart-card",
            style: "margin: 32px 0 48px 0; padding: 16px; background: #ffffff; border-radius: 12px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 20px; font-weight: bold; text-align: center; color: #212529;",
                "{props.title}"
            }
            p {
                style: "margin: 0 0 24px 0; text-align: center; font-style: italic; color: #666;",
                "\"{props.caption}\""
            }
            {props.children}
        }
    }
}
