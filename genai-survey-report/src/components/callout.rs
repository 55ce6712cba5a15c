//! Small presentational callouts used across the prose sections.

use dioxus::prelude::*;

/// Props for AnalysisNote
#[derive(Props, Clone, PartialEq)]
pub struct AnalysisNoteProps {
    pub children: Element,
}

/// Gray framed note holding an analysis paragraph.
#[component]
pub fn AnalysisNote(props: AnalysisNoteProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 32px; padding: 20px; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);",
            {props.children}
        }
    }
}

/// Props for QuoteCard
#[derive(Props, Clone, PartialEq)]
pub struct QuoteCardProps {
    /// Interviewee quote, rendered italic
    pub quote: String,
    /// Card background color
    pub tint: String,
    /// Card border color
    pub border: String,
}

/// Tinted card holding one interviewee quote.
#[component]
pub fn QuoteCard(props: QuoteCardProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px; background: {props.tint}; border: 1px solid {props.border}; border-radius: 8px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);",
            p {
                style: "margin: 0; font-style: italic; color: #444;",
                "\"{props.quote}\""
            }
        }
    }
}
