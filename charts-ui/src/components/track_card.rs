//! Track card component - pure view with local hover state

use crate::components::card_hover::CardHover;
use crate::components::utils::format_plays;
use charts_core::Track;
use dioxus::prelude::*;

/// Optional details shown under a track's title.
///
/// Only built when at least one field has something to show, so a card with
/// neither duration nor plays renders no metadata row at all.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackMeta {
    pub duration: Option<String>,
    /// Formatted, e.g. "1.5M plays"
    pub plays: Option<String>,
}

impl TrackMeta {
    pub fn from_track(track: &Track) -> Option<Self> {
        let duration = track
            .duration
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .cloned();
        let plays = format_plays(track.plays);

        if duration.is_none() && plays.is_none() {
            None
        } else {
            Some(Self { duration, plays })
        }
    }
}

/// Accessible name for the card: "<title> by <artist>"
pub fn track_label(track: &Track) -> String {
    format!("{} by {}", track.title, track.artist)
}

/// Alt text for the cover image
pub fn cover_alt(track: &Track) -> String {
    format!("{} album cover", track.title)
}

/// Card for one ranked track. Shows a play overlay while hovered.
#[component]
pub fn TrackCard(track: Track) -> Element {
    let mut hover = use_signal(CardHover::default);

    let label = track_label(&track);
    let alt = cover_alt(&track);
    let meta = TrackMeta::from_track(&track);
    let title = track.title.clone();
    let artist = track.artist.clone();
    let thumbnail = track.thumbnail.clone();

    rsx! {
        div {
            class: "track-card card",
            "aria-label": "{label}",
            "data-testid": "track-card",
            onmouseenter: move |_| hover.write().enter(),
            onmouseleave: move |_| hover.write().leave(),
            div { class: "thumbnail-container",
                img {
                    class: "thumbnail",
                    src: "{thumbnail}",
                    alt: "{alt}",
                    "loading": "lazy",
                }
                if hover().shows_overlay() {
                    div { class: "play-overlay overlay",
                        button {
                            class: "play-button overlay-button",
                            r#type: "button",
                            "aria-label": "Play {title}",
                            "▶"
                        }
                    }
                }
            }
            div { class: "track-info card-info",
                h3 { class: "track-title card-title", title: "{title}", "{title}" }
                p { class: "track-artist card-subtitle", title: "{artist}", "{artist}" }
                if let Some(meta) = &meta {
                    div { class: "track-meta card-meta",
                        if let Some(duration) = &meta.duration {
                            span { class: "duration", "{duration}" }
                        }
                        if let Some(plays) = &meta.plays {
                            span { class: "plays", "{plays}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_track() -> Track {
        Track {
            id: "1".to_string(),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            thumbnail: "https://example.com/test-image.jpg".to_string(),
            duration: Some("3:45".to_string()),
            plays: Some(1_500_000),
        }
    }

    fn minimal_track() -> Track {
        Track {
            id: "2".to_string(),
            title: "Minimal Song".to_string(),
            artist: "Minimal Artist".to_string(),
            thumbnail: "https://example.com/minimal-image.jpg".to_string(),
            duration: None,
            plays: None,
        }
    }

    #[test]
    fn meta_with_both_fields() {
        let meta = TrackMeta::from_track(&full_track()).unwrap();
        assert_eq!(meta.duration.as_deref(), Some("3:45"));
        assert_eq!(meta.plays.as_deref(), Some("1.5M plays"));
    }

    #[test]
    fn meta_omitted_without_optional_fields() {
        assert_eq!(TrackMeta::from_track(&minimal_track()), None);
    }

    #[test]
    fn meta_omitted_for_empty_duration_and_zero_plays() {
        let track = Track {
            duration: Some(String::new()),
            plays: Some(0),
            ..minimal_track()
        };
        assert_eq!(TrackMeta::from_track(&track), None);
    }

    #[test]
    fn meta_with_only_plays() {
        let track = Track {
            plays: Some(500_000),
            ..minimal_track()
        };
        let meta = TrackMeta::from_track(&track).unwrap();
        assert_eq!(meta.duration, None);
        assert_eq!(meta.plays.as_deref(), Some("500K plays"));
    }

    #[test]
    fn meta_with_only_duration() {
        let track = Track {
            duration: Some("2:30".to_string()),
            ..minimal_track()
        };
        let meta = TrackMeta::from_track(&track).unwrap();
        assert_eq!(meta.duration.as_deref(), Some("2:30"));
        assert_eq!(meta.plays, None);
    }

    #[test]
    fn accessible_text() {
        let track = full_track();
        assert_eq!(track_label(&track), "Test Song by Test Artist");
        assert_eq!(cover_alt(&track), "Test Song album cover");
    }
}
