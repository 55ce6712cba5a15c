//! Renderer callback contracts: geometry in, markup out.
//!
//! Callers customize the chart by supplying one plain function per render
//! point. Function pointers keep component props cheap to compare, and the
//! chart stays in charge of when each renderer runs.

use genai_survey_model::question::SurveyTopic;
use genai_survey_model::score::ScoreLabel;

use dioxus::prelude::*;

/// Payload for an x-axis tick. `x`/`y` locate the tick's anchor point on
/// the axis line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub x: f64,
    pub y: f64,
    pub label: ScoreLabel,
}

/// Payload for a bar-top value label.
///
/// Every field is optional: the chart invokes the renderer on every pass,
/// including passes where geometry is unresolved (degenerate scale), and
/// expects the renderer to emit nothing in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLabelContext {
    /// Left edge of the bar.
    pub x: Option<f64>,
    /// Top edge of the bar.
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub value: Option<u32>,
}

/// Payload for the tooltip shown while a bar is hovered or focused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipContext {
    pub topic: SurveyTopic,
    pub label: ScoreLabel,
    pub count: u32,
}

/// Renders one x-axis tick.
pub type AxisTickRenderer = fn(TickContext) -> Element;

/// Renders the value label above one bar.
pub type BarLabelRenderer = fn(BarLabelContext) -> Element;

/// Renders the hover/focus tooltip for one bar.
pub type TooltipRenderer = fn(TooltipContext) -> Element;
