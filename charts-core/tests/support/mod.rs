use charts_core::{Artist, Track};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

#[allow(dead_code)]
pub fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Song {id}"),
        artist: "Test Artist".to_string(),
        thumbnail: format!("https://example.com/{id}.jpg"),
        duration: Some("3:45".to_string()),
        plays: Some(1_000_000),
    }
}

#[allow(dead_code)]
pub fn artist(id: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("Artist {id}"),
        thumbnail: format!("https://example.com/{id}.jpg"),
        followers: Some(2_000_000),
        genre: Some("Rock".to_string()),
    }
}
