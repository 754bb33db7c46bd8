//! Artist card component - pure view with local hover state

use crate::components::card_hover::CardHover;
use crate::components::utils::format_followers;
use charts_core::Artist;
use dioxus::prelude::*;

/// Optional details shown under an artist's name. None when empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistMeta {
    pub genre: Option<String>,
    /// Formatted, e.g. "2.5M followers"
    pub followers: Option<String>,
}

impl ArtistMeta {
    pub fn from_artist(artist: &Artist) -> Option<Self> {
        let genre = artist
            .genre
            .as_ref()
            .filter(|g| !g.trim().is_empty())
            .cloned();
        let followers = format_followers(artist.followers);

        if genre.is_none() && followers.is_none() {
            None
        } else {
            Some(Self { genre, followers })
        }
    }
}

/// Card for one ranked artist. Shows a follow overlay while hovered.
#[component]
pub fn ArtistCard(artist: Artist) -> Element {
    let mut hover = use_signal(CardHover::default);

    let meta = ArtistMeta::from_artist(&artist);
    let name = artist.name.clone();
    let thumbnail = artist.thumbnail.clone();

    rsx! {
        div {
            class: "artist-card card",
            "aria-label": "{name} artist profile",
            "data-testid": "artist-card",
            onmouseenter: move |_| hover.write().enter(),
            onmouseleave: move |_| hover.write().leave(),
            div { class: "thumbnail-container round",
                img {
                    class: "thumbnail",
                    src: "{thumbnail}",
                    alt: "{name} profile picture",
                    "loading": "lazy",
                }
                if hover().shows_overlay() {
                    div { class: "follow-overlay overlay",
                        button {
                            class: "follow-button overlay-button",
                            r#type: "button",
                            "aria-label": "Follow {name}",
                            "Follow"
                        }
                    }
                }
            }
            div { class: "artist-info card-info",
                h3 { class: "artist-name card-title", title: "{name}", "{name}" }
                if let Some(meta) = &meta {
                    div { class: "artist-meta card-meta",
                        if let Some(genre) = &meta.genre {
                            span { class: "artist-genre", "{genre}" }
                        }
                        if let Some(followers) = &meta.followers {
                            span { class: "followers", "{followers}" }
                        }
                    }
                }
            }
        }
    }
}
