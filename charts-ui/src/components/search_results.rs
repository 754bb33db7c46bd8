//! Search results view

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{MusicIcon, SearchIcon};
use crate::components::section_cards::{CardItems, SectionCards};
use charts_core::{Artist, Track};
use dioxus::prelude::*;

#[component]
pub fn SearchResultsView(
    query: String,
    tracks: Vec<Track>,
    artists: Vec<Artist>,
    #[props(default)] loading: bool,
) -> Element {
    let query = query.trim().to_string();

    if query.is_empty() {
        return rsx! {
            div { class: "search-empty",
                SearchIcon { class: "icon icon-large" }
                p { "Type an artist, track or genre to search the charts" }
            }
        };
    }

    if loading {
        return rsx! {
            LoadingSpinner { message: "Searching..." }
        };
    }

    let nothing_found = tracks.is_empty() && artists.is_empty();

    rsx! {
        div { class: "search-results",
            h1 { class: "page-title", "Results for \"{query}\"" }
            if nothing_found {
                div { class: "search-empty",
                    MusicIcon { class: "icon icon-large" }
                    p { "Nothing matched \"{query}\"" }
                }
            } else {
                if !tracks.is_empty() {
                    section { class: "chart-section",
                        h2 { class: "section-title", "Tracks" }
                        SectionCards { items: CardItems::Tracks(tracks) }
                    }
                }
                if !artists.is_empty() {
                    section { class: "chart-section",
                        h2 { class: "section-title", "Artists" }
                        SectionCards { items: CardItems::Artists(artists) }
                    }
                }
            }
        }
    }
}
