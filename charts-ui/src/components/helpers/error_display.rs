//! Error display component

use dioxus::prelude::*;

/// Page-level error box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "error-display", role: "alert",
            p { "{message}" }
        }
    }
}
