//! Titled chart section

use crate::components::helpers::LoadingSpinner;
use dioxus::prelude::*;

/// A titled block on the home page. While `loading`, a spinner stands in for
/// the children.
#[component]
pub fn ChartSection(
    title: String,
    #[props(default)] loading: bool,
    children: Element,
) -> Element {
    rsx! {
        section { class: "chart-section", "aria-busy": "{loading}",
            h2 { class: "section-title", "{title}" }
            if loading {
                LoadingSpinner {}
            } else {
                {children}
            }
        }
    }
}
