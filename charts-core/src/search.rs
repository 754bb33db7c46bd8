//! Lookup and search over the chart collections
//!
//! Like the home page load, these never fail: a fetch error is logged and
//! reported as "nothing found".

use crate::client::ChartsClient;
use crate::models::{Artist, Track};
use tracing::error;

fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Tracks whose title or artist name contains `query`, ignoring case.
/// A blank query matches nothing.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<Track> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };
    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query) || t.artist.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Artists whose name or genre contains `query`, ignoring case.
/// A blank query matches nothing.
pub fn filter_artists(artists: &[Artist], query: &str) -> Vec<Artist> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };
    artists
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&query)
                || a
                    .genre
                    .as_ref()
                    .is_some_and(|g| g.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Find a track among the top tracks
pub async fn track_by_id<C: ChartsClient>(client: &C, id: &str) -> Option<Track> {
    match client.top_tracks().await {
        Ok(tracks) => tracks.into_iter().find(|t| t.id == id),
        Err(e) => {
            error!("Error fetching track {}: {}", id, e);
            None
        }
    }
}

/// Find an artist among the top artists
pub async fn artist_by_id<C: ChartsClient>(client: &C, id: &str) -> Option<Artist> {
    match client.top_artists().await {
        Ok(artists) => artists.into_iter().find(|a| a.id == id),
        Err(e) => {
            error!("Error fetching artist {}: {}", id, e);
            None
        }
    }
}

pub async fn search_tracks<C: ChartsClient>(client: &C, query: &str) -> Vec<Track> {
    match client.top_tracks().await {
        Ok(tracks) => filter_tracks(&tracks, query),
        Err(e) => {
            error!("Error searching tracks: {}", e);
            Vec::new()
        }
    }
}

pub async fn search_artists<C: ChartsClient>(client: &C, query: &str) -> Vec<Artist> {
    match client.top_artists().await {
        Ok(artists) => filter_artists(&artists, query),
        Err(e) => {
            error!("Error searching artists: {}", e);
            Vec::new()
        }
    }
}
