//! Tab bar for switching report sections.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::state::{AppState, Tab};

/// Row of section buttons. The active tab's button carries the
/// highlighted class; clicking any button switches the displayed section.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            class: "tab-bar",
            style: "display: flex; flex-wrap: wrap; justify-content: center; border-bottom: 1px solid #d0d0d0; margin-bottom: 32px;",
            for tab in Tab::ALL {
                button {
                    class: if tab == active { "tab-button active" } else { "tab-button" },
                    onclick: move |_| {
                        info!("Switching to section {:?}", tab);
                        state.active_tab.set(tab);
                    },
                    {tab.title()}
                }
            }
        }
    }
}
