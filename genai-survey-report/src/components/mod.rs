//! Reusable RSX components for the report view.

mod callout;
mod question_chart;
mod report_footer;
mod report_header;
mod tab_bar;

pub use callout::{AnalysisNote, QuoteCard};
pub use question_chart::QuestionChart;
pub use report_footer::ReportFooter;
pub use report_header::ReportHeader;
pub use tab_bar::TabBar;
