//! SVG bar chart components for the survey report.
//!
//! This crate provides:
//! - `scale`: band and linear scales with nice tick steps
//! - `layout`: the chart coordinate system and per-bar geometry
//! - `render`: renderer callback contracts (geometry in, markup out)
//! - `components`: the `BarChart` and `ChartCard` RSX components
//!
//! The chart owns layout and scaling; callers supply the data plus one
//! renderer per customization point (axis tick, bar-top label, tooltip).

pub mod components;
pub mod layout;
pub mod render;
pub mod scale;
