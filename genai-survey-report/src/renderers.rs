//! Custom chart renderers: axis ticks, bar value labels, and tooltips.

use dioxus::prelude::*;

use genai_survey_chart_ui::render::{BarLabelContext, TickContext, TooltipContext};
use genai_survey_model::question::respondents_label;

use crate::theme;

/// Viewport width below which the tick anchor line is omitted.
const WIDE_VIEWPORT_MIN_PX: f64 = 640.0;

/// Whether the window is wide enough for two-line ticks. Falls back to
/// wide when no window is available.
fn viewport_is_wide() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width >= WIDE_VIEWPORT_MIN_PX)
        .unwrap_or(true)
}

/// Two-line x-axis tick: the score caption, and on wide viewports the
/// anchor text beneath it.
pub fn score_axis_tick(ctx: TickContext) -> Element {
    let caption = ctx.label.caption();
    let anchor = ctx.label.anchor();
    rsx! {
        g {
            transform: "translate({ctx.x}, {ctx.y})",
            text {
                x: "0",
                y: "0",
                dy: "16",
                text_anchor: "middle",
                fill: theme::MUTED_TEXT,
                font_size: "12",
                "{caption}"
            }
            if viewport_is_wide() {
                text {
                    class: "tick-anchor",
                    x: "0",
                    y: "16",
                    dy: "16",
                    text_anchor: "middle",
                    fill: theme::MUTED_TEXT,
                    font_size: "10",
                    "{anchor}"
                }
            }
        }
    }
}

/// Respondent count centered above a bar. Renders nothing while the chart
/// has not resolved the bar's geometry.
pub fn count_bar_label(ctx: BarLabelContext) -> Element {
    let (Some(x), Some(y), Some(width), Some(value)) = (ctx.x, ctx.y, ctx.width, ctx.value) else {
        return rsx! {};
    };
    let center_x = x + width / 2.0;
    let label_y = y - 6.0;
    let label = respondents_label(value);
    rsx! {
        text {
            x: "{center_x}",
            y: "{label_y}",
            dy: "0.32em",
            text_anchor: "middle",
            fill: "#555",
            font_size: "12",
            "{label}"
        }
    }
}

/// Tooltip card for the hovered bar: caption, anchor text, and the count
/// tinted with the question's accent color.
pub fn survey_tooltip(ctx: TooltipContext) -> Element {
    let accent = theme::accent(ctx.topic);
    let text_color = theme::TEXT;
    let muted = theme::MUTED_TEXT;
    let caption = ctx.label.caption();
    let anchor = ctx.label.anchor();
    let count = respondents_label(ctx.count);
    rsx! {
        div {
            class: "chart-tooltip",
            style: "background: #ffffff; padding: 12px 16px; border-radius: 8px; border: 1px solid #e5e7eb; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); white-space: nowrap;",
            p {
                style: "margin: 0 0 4px 0; font-weight: bold; color: {text_color};",
                "{caption} ({anchor})"
            }
            p {
                style: "margin: 0; font-size: 13px; color: {muted};",
                "인원: "
                span {
                    style: "color: {accent}; font-weight: 600;",
                    "{count}"
                }
            }
        }
    }
}
