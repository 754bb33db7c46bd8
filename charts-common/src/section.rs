use std::fmt;

/// One of the four independently loaded chart collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    TopTracks,
    TopArtists,
    NewReleases,
    MostLoved,
}

impl Section {
    /// Display order on the home page. Never depends on which fetch lands first.
    pub const ALL: [Section; 4] = [
        Section::TopTracks,
        Section::TopArtists,
        Section::NewReleases,
        Section::MostLoved,
    ];

    /// Heading shown above the section's cards
    pub fn title(self) -> &'static str {
        match self {
            Section::TopTracks => "Top Tracks",
            Section::TopArtists => "Top Artists",
            Section::NewReleases => "Top New Releases",
            Section::MostLoved => "Most Loved",
        }
    }

    /// Resource name on the data source
    pub fn resource(self) -> &'static str {
        match self {
            Section::TopTracks => "tracks",
            Section::TopArtists => "artists",
            Section::NewReleases => "new-releases",
            Section::MostLoved => "most-loved",
        }
    }

    /// Position in [`Section::ALL`]
    pub fn index(self) -> usize {
        match self {
            Section::TopTracks => 0,
            Section::TopArtists => 1,
            Section::NewReleases => 2,
            Section::MostLoved => 3,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
