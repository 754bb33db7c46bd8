//! HTTP client against an in-process data server.

mod support;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use charts_core::search::{artist_by_id, search_tracks};
use charts_core::{
    ChartsClient, ChartsConfig, FetchError, HomeLoader, HomeState, HttpChartsClient, Section,
    LOAD_ERROR_MESSAGE,
};
use serde_json::json;
use support::tracing_init;

async fn tracks() -> impl IntoResponse {
    Json(json!([
        {
            "id": "1",
            "title": "Blinding Lights",
            "artist": "The Weeknd",
            "thumbnail": "https://example.com/blinding.jpg",
            "duration": "3:20",
            "plays": 2500000
        },
        {
            "id": "2",
            "title": "Levitating",
            "artist": "Dua Lipa",
            "thumbnail": "https://example.com/levitating.jpg"
        }
    ]))
}

async fn artists() -> impl IntoResponse {
    Json(json!({
        "data": [
            {
                "id": "a1",
                "name": "The Weeknd",
                "thumbnail": "https://example.com/weeknd.jpg",
                "followers": 1500000,
                "genre": "R&B"
            }
        ],
        "pagination": { "page": 1, "per_page": 20, "total": 1 }
    }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::OK, "this is not json")
}

/// Serve `/data/*` on a random local port and return the base URL.
async fn start_data_server(with_failures: bool) -> String {
    let mut app = Router::new()
        .route("/data/tracks.json", get(tracks))
        .route("/data/artists.json", get(artists));

    if with_failures {
        // new-releases is left unrouted and answers 404
        app = app.route("/data/most-loved.json", get(broken));
    } else {
        app = app
            .route("/data/new-releases.json", get(tracks))
            .route("/data/most-loved.json", get(tracks));
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind data server");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://127.0.0.1:{}/data", port)
}

#[tokio::test]
async fn fetches_bare_and_enveloped_collections() {
    tracing_init();
    let base_url = start_data_server(false).await;
    let client = HttpChartsClient::new(ChartsConfig::new(base_url, "json")).unwrap();

    let tracks = client.top_tracks().await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].plays, Some(2_500_000));
    assert_eq!(tracks[1].duration, None);

    let artists = client.top_artists().await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].followers, Some(1_500_000));
}

#[tokio::test]
async fn missing_resource_is_a_status_error() {
    tracing_init();
    let base_url = start_data_server(true).await;
    let client = HttpChartsClient::new(ChartsConfig::new(base_url, "json")).unwrap();

    match client.new_releases().await {
        Err(FetchError::Status { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/data/new-releases.json"));
        }
        other => panic!("expected status error, got {other:?}"),
    }

    assert!(matches!(
        client.most_loved().await,
        Err(FetchError::Parse(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    tracing_init();
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = HttpChartsClient::new(ChartsConfig::new(
        format!("http://127.0.0.1:{port}/data"),
        "json",
    ))
    .unwrap();
    assert!(matches!(
        client.top_tracks().await,
        Err(FetchError::Http(_))
    ));
}

#[tokio::test]
async fn home_load_over_http_with_failures() {
    tracing_init();
    let base_url = start_data_server(true).await;
    let client = HttpChartsClient::new(ChartsConfig::new(base_url, "json")).unwrap();
    let loader = HomeLoader::new(client);

    let mut state = HomeState::default();
    loader.load(&mut state).await;

    assert!(!state.is_loading());
    assert_eq!(state.top_tracks.len(), 2);
    assert_eq!(state.top_artists.len(), 1);
    assert!(state.new_releases.is_empty());
    assert!(state.most_loved.is_empty());
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
}

#[tokio::test]
async fn home_load_over_http() {
    tracing_init();
    let base_url = start_data_server(false).await;
    let client = HttpChartsClient::new(ChartsConfig::new(base_url, "json")).unwrap();
    let loader = HomeLoader::new(client);

    let mut state = HomeState::default();
    loader.load(&mut state).await;

    assert!(!state.is_loading());
    assert_eq!(state.error, None);
    assert_eq!(state.new_releases.len(), 2);
    assert_eq!(state.most_loved.len(), 2);
}

#[tokio::test]
async fn search_and_lookup_over_http() {
    tracing_init();
    let base_url = start_data_server(false).await;
    let client = HttpChartsClient::new(ChartsConfig::new(base_url, "json")).unwrap();

    let found = search_tracks(&client, "dua").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Levitating");

    let artist = artist_by_id(&client, "a1").await.unwrap();
    assert_eq!(artist.genre.as_deref(), Some("R&B"));
}

#[tokio::test]
async fn default_config_loads_from_the_serving_page() {
    tracing_init();
    let base_url = start_data_server(false).await;
    let origin = base_url.trim_end_matches("/data");
    let page = format!("{origin}/search?q=pop");

    let client = HttpChartsClient::for_page(ChartsConfig::default(), Some(&page)).unwrap();
    assert_eq!(
        client.resource_url(Section::TopTracks),
        format!("{origin}/data/tracks.json")
    );

    let tracks = client.top_tracks().await;
    assert!(tracks.is_ok(), "default config fetch failed: {tracks:?}");

    let loader = HomeLoader::new(client);
    let mut state = HomeState::default();
    loader.load(&mut state).await;
    assert!(!state.is_loading());
    assert_eq!(state.error, None);
    assert_eq!(state.top_tracks.len(), 2);
    assert_eq!(state.top_artists.len(), 1);
}
