use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

mod components;
mod renderers;
mod sections;
mod state;
mod theme;

use components::{ReportFooter, ReportHeader, TabBar};
use sections::{ConclusionSection, InterviewSection, IntroSection, SurveySection};
use state::{AppState, Tab};

static STYLE_CSS: Asset = asset!("/assets/style.css");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting survey report application");
    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);
    let state = use_context::<AppState>();
    let active = (state.active_tab)();

    // Exactly one section is mounted at a time.
    let section = match active {
        Tab::Intro => rsx! { IntroSection {} },
        Tab::Survey => rsx! { SurveySection {} },
        Tab::Interview => rsx! { InterviewSection {} },
        Tab::Conclusion => rsx! { ConclusionSection {} },
    };

    rsx! {
        document::Stylesheet { href: STYLE_CSS }
        div {
            class: "report",
            style: "max-width: 960px; margin: 0 auto; padding: 32px 16px; font-family: sans-serif;",
            ReportHeader {}
            TabBar {}
            div {
                class: "report-body",
                style: "padding: 24px; background: #ffffff; border-radius: 8px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);",
                {section}
            }
            ReportFooter {}
        }
    }
}
