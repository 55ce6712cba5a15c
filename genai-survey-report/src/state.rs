//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the report's reactive state into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Report sections addressable from the tab bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Intro,
    Survey,
    Interview,
    Conclusion,
}

impl Tab {
    /// All tabs in bar order.
    pub const ALL: [Tab; 4] = [Tab::Intro, Tab::Survey, Tab::Interview, Tab::Conclusion];

    /// Caption on the tab button.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Intro => "조사 개요",
            Tab::Survey => "설문 결과",
            Tab::Interview => "심층 인터뷰",
            Tab::Conclusion => "결론 및 제언",
        }
    }
}

/// Shared state for the report view.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently displayed report section
    pub active_tab: Signal<Tab>,
}

impl AppState {
    /// Create a new AppState opened on the intro section.
    pub fn new() -> Self {
        Self {
            active_tab: Signal::new(Tab::Intro),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn tab_bar_order_and_titles() {
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["조사 개요", "설문 결과", "심층 인터뷰", "결론 및 제언"]);
    }
}
