use crate::pages::home::data_client;
use charts_core::search::{search_artists, search_tracks};
use charts_ui::SearchResultsView;
use dioxus::prelude::*;
use futures::join;
use tracing::{debug, error};

#[component]
pub fn Search(q: String) -> Element {
    let results = use_resource(use_reactive((&q,), |(query,)| async move {
        if query.trim().is_empty() {
            return (Vec::new(), Vec::new());
        }
        let client = match data_client() {
            Ok(client) => client,
            Err(e) => {
                error!("No usable chart data source: {}", e);
                return (Vec::new(), Vec::new());
            }
        };
        let (tracks, artists) = join!(
            search_tracks(&client, &query),
            search_artists(&client, &query)
        );
        debug!(
            "Search {:?}: {} tracks, {} artists",
            query,
            tracks.len(),
            artists.len()
        );
        (tracks, artists)
    }));

    let (tracks, artists, loading) = match &*results.read() {
        Some((tracks, artists)) => (tracks.clone(), artists.clone(), false),
        None => (Vec::new(), Vec::new(), true),
    };

    rsx! {
        SearchResultsView { query: q, tracks, artists, loading }
    }
}
