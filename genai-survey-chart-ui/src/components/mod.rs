//! RSX components for the survey charts.

mod bar_chart;
mod chart_card;

pub use bar_chart::BarChart;
pub use chart_card::ChartCard;
