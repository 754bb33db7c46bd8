//! Card grid for one section's items

use crate::components::artist_card::ArtistCard;
use crate::components::track_card::TrackCard;
use charts_core::home::SectionItems;
use charts_core::{Artist, Track};
use dioxus::prelude::*;

/// Owned items of a section, as component props
#[derive(Clone, Debug, PartialEq)]
pub enum CardItems {
    Tracks(Vec<Track>),
    Artists(Vec<Artist>),
}

impl CardItems {
    pub fn len(&self) -> usize {
        match self {
            CardItems::Tracks(tracks) => tracks.len(),
            CardItems::Artists(artists) => artists.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shown in place of the grid when there is nothing to list
    pub fn empty_message(&self) -> &'static str {
        match self {
            CardItems::Tracks(_) => "No tracks to show",
            CardItems::Artists(_) => "No artists to show",
        }
    }
}

impl From<SectionItems<'_>> for CardItems {
    fn from(items: SectionItems<'_>) -> Self {
        match items {
            SectionItems::Tracks(tracks) => CardItems::Tracks(tracks.to_vec()),
            SectionItems::Artists(artists) => CardItems::Artists(artists.to_vec()),
        }
    }
}

/// Grid of track or artist cards, one per item in input order
#[component]
pub fn SectionCards(items: CardItems) -> Element {
    if items.is_empty() {
        let message = items.empty_message();
        return rsx! {
            p { class: "empty-section", "{message}" }
        };
    }

    rsx! {
        div { class: "card-grid",
            match items {
                CardItems::Tracks(tracks) => rsx! {
                    for track in tracks {
                        TrackCard { key: "{track.id}", track: track.clone() }
                    }
                },
                CardItems::Artists(artists) => rsx! {
                    for artist in artists {
                        ArtistCard { key: "{artist.id}", artist: artist.clone() }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts_core::{HomeState, Section};

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Song {id}"),
            artist: "Someone".to_string(),
            thumbnail: format!("https://example.com/{id}.jpg"),
            duration: None,
            plays: None,
        }
    }

    #[test]
    fn converts_borrowed_section_items() {
        let mut state = HomeState::default();
        state.most_loved = vec![track("m1"), track("m2")];

        let items = CardItems::from(state.items(Section::MostLoved));
        assert_eq!(items, CardItems::Tracks(vec![track("m1"), track("m2")]));

        let items = CardItems::from(state.items(Section::TopArtists));
        assert_eq!(items, CardItems::Artists(vec![]));
        assert!(items.is_empty());
    }

    #[test]
    fn empty_message_names_the_kind() {
        assert_eq!(CardItems::Tracks(vec![]).empty_message(), "No tracks to show");
        assert_eq!(
            CardItems::Artists(vec![]).empty_message(),
            "No artists to show"
        );
    }
}
