//! Bar chart rendered as inline SVG.
//!
//! The chart owns layout and scaling and invokes the caller-supplied
//! renderers for axis ticks, bar-top labels, and the hover tooltip.

use dioxus::prelude::*;

use genai_survey_model::question::{respondents_label, SurveyTopic};
use genai_survey_model::score::ScoreBucket;

use crate::layout::{bar_rect, rounded_top_bar_path, ChartLayout};
use crate::render::{
    AxisTickRenderer, BarLabelContext, BarLabelRenderer, TickContext, TooltipContext,
    TooltipRenderer,
};

/// Stroke for grid and axis lines.
const AXIS_GRAY: &str = "#e0e0e0";
/// Band highlight behind the hovered bar.
const CURSOR_FILL: &str = "rgba(206, 206, 206, 0.2)";
const BAR_CORNER_RADIUS: f64 = 6.0;

/// Props for BarChart
#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    /// Ordered response buckets, one bar per bucket.
    pub buckets: Vec<ScoreBucket>,
    /// Question the chart belongs to; forwarded to the tooltip renderer.
    pub topic: SurveyTopic,
    /// Uniform bar fill color.
    pub fill: String,
    /// Upper bound on bar width, in viewBox units.
    #[props(default = 50.0)]
    pub bar_size: f64,
    /// Renders one x-axis tick.
    pub tick: AxisTickRenderer,
    /// Renders the value label above one bar.
    pub bar_label: BarLabelRenderer,
    /// Renders the tooltip for the hovered or focused bar.
    pub tooltip: TooltipRenderer,
}

struct BarView {
    index: usize,
    band_x: f64,
    band_width: f64,
    path: String,
    visible: bool,
}

struct YTick {
    y: f64,
    text_y: f64,
    caption: String,
}

struct TooltipOverlay {
    left_pct: f64,
    top_pct: f64,
    context: TooltipContext,
}

#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let layout = ChartLayout::default();
    let plot_left = layout.plot_left();
    let plot_right = layout.plot_right();
    let plot_top = layout.plot_top();
    let baseline = layout.plot_bottom();
    let plot_height = baseline - plot_top;
    let y_label_x = plot_left - 8.0;
    let axis_title_y = (plot_top + baseline) / 2.0;
    let view_box = format!("0 0 {} {}", layout.width, layout.height);

    let data_max = props.buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let band = layout.band_scale(props.buckets.len());
    let counts = layout.count_scale(data_max);

    let geoms: Vec<_> = props
        .buckets
        .iter()
        .enumerate()
        .map(|(i, b)| bar_rect(&band, &counts, i, b.count, props.bar_size, baseline))
        .collect();

    let bars: Vec<BarView> = geoms
        .iter()
        .enumerate()
        .filter_map(|(i, geom)| {
            let bar = (*geom)?;
            Some(BarView {
                index: i,
                band_x: band.band_start(i)?,
                band_width: band.band_width(),
                path: rounded_top_bar_path(&bar, BAR_CORNER_RADIUS),
                visible: bar.height > 0.0,
            })
        })
        .collect();

    // The label renderer runs for every bucket; geometry is absent when a
    // scale declined and the renderer is expected to emit nothing.
    let labels: Vec<BarLabelContext> = props
        .buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| match geoms[i] {
            Some(bar) => BarLabelContext {
                x: Some(bar.x),
                y: Some(bar.y),
                width: Some(bar.width),
                value: Some(bucket.count),
            },
            None => BarLabelContext {
                x: None,
                y: None,
                width: None,
                value: Some(bucket.count),
            },
        })
        .collect();

    let ticks: Vec<TickContext> = props
        .buckets
        .iter()
        .enumerate()
        .filter_map(|(i, bucket)| {
            band.center(i).map(|x| TickContext {
                x,
                y: baseline,
                label: bucket.label,
            })
        })
        .collect();

    let y_ticks: Vec<YTick> = counts
        .tick_values()
        .into_iter()
        .filter_map(|value| {
            counts.position(value).map(|y| YTick {
                y,
                text_y: y + 4.0,
                caption: respondents_label(value),
            })
        })
        .collect();

    // Tooltip overlay anchored above the hovered bar; positions are
    // fractions of the rendered size so they track the responsive SVG.
    let overlay: Option<TooltipOverlay> = hovered().and_then(|i| {
        let bar = geoms.get(i).copied().flatten()?;
        let bucket = props.buckets.get(i)?;
        Some(TooltipOverlay {
            left_pct: bar.center_x() / layout.width * 100.0,
            top_pct: bar.y / layout.height * 100.0,
            context: TooltipContext {
                topic: props.topic,
                label: bucket.label,
                count: bucket.count,
            },
        })
    });

    rsx! {
        div {
            class: "bar-chart",
            style: "position: relative; width: 100%;",

            svg {
                view_box: "{view_box}",
                width: "100%",
                role: "img",

                // Horizontal grid only, dashed.
                for t in y_ticks.iter() {
                    line {
                        x1: "{plot_left}",
                        y1: "{t.y}",
                        x2: "{plot_right}",
                        y2: "{t.y}",
                        stroke: AXIS_GRAY,
                        stroke_dasharray: "3 3",
                    }
                }

                for t in y_ticks.iter() {
                    text {
                        x: "{y_label_x}",
                        y: "{t.text_y}",
                        text_anchor: "end",
                        fill: "#212529",
                        font_size: "12",
                        "{t.caption}"
                    }
                }

                g {
                    transform: "translate(16, {axis_title_y})",
                    text {
                        transform: "rotate(-90)",
                        text_anchor: "middle",
                        fill: "#555",
                        font_size: "14",
                        "응답자 수 (명)"
                    }
                }

                line {
                    x1: "{plot_left}",
                    y1: "{plot_top}",
                    x2: "{plot_left}",
                    y2: "{baseline}",
                    stroke: AXIS_GRAY,
                }
                line {
                    x1: "{plot_left}",
                    y1: "{baseline}",
                    x2: "{plot_right}",
                    y2: "{baseline}",
                    stroke: AXIS_GRAY,
                }

                for view in bars {
                    if hovered() == Some(view.index) {
                        rect {
                            x: "{view.band_x}",
                            y: "{plot_top}",
                            width: "{view.band_width}",
                            height: "{plot_height}",
                            fill: CURSOR_FILL,
                        }
                    }
                    if view.visible {
                        path {
                            d: "{view.path}",
                            fill: "{props.fill}",
                            tabindex: "0",
                            onmouseenter: move |_| hovered.set(Some(view.index)),
                            onmouseleave: move |_| hovered.set(None),
                            onfocus: move |_| hovered.set(Some(view.index)),
                            onblur: move |_| hovered.set(None),
                        }
                    }
                }

                {labels.into_iter().map(|ctx| (props.bar_label)(ctx))}

                {ticks.into_iter().map(|ctx| (props.tick)(ctx))}
            }

            if let Some(tip) = overlay {
                div {
                    class: "chart-tooltip-anchor",
                    style: "position: absolute; left: {tip.left_pct}%; top: {tip.top_pct}%; transform: translate(-50%, -100%); pointer-events: none;",
                    {(props.tooltip)(tip.context)}
                }
            }
        }
    }
}
