//! Home view - pure rendering of the chart sections

use crate::components::chart_section::ChartSection;
use crate::components::helpers::ErrorDisplay;
use crate::components::section_cards::{CardItems, SectionCards};
use charts_common::Section;
use charts_core::HomeState;
use dioxus::prelude::*;

/// Home page body: heading, page-level error, then the four sections in
/// display order. Each section shows its own spinner until it settles.
#[component]
pub fn HomeView(state: ReadSignal<HomeState>) -> Element {
    let home = state.read();
    let error = home.error.clone();
    let sections: Vec<(Section, bool, CardItems)> = home
        .sections()
        .map(|view| (view.section, view.loading, CardItems::from(view.items)))
        .collect();
    drop(home);

    rsx! {
        div { class: "home",
            h1 { class: "page-title", "Music Charts" }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            for (section, loading, items) in sections {
                ChartSection {
                    key: "{section}",
                    title: section.title().to_string(),
                    loading,
                    SectionCards { items }
                }
            }
        }
    }
}
