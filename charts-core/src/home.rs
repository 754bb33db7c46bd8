//! Home page load orchestration
//!
//! [`HomeState`] is the plain state the home page renders: four collections,
//! four loading flags and an error slot. [`HomeLoader`] issues the four fetches
//! concurrently and folds each outcome into the state as it arrives. Arrival
//! order never affects presentation order, which is always [`Section::ALL`].

use crate::client::{ChartsClient, FetchError};
use crate::models::{Artist, Track};
use charts_common::Section;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::pin::pin;
use tracing::{debug, error, info};

/// Page-level message shown when any section fails to load
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load music data";

/// A successfully fetched collection, tagged with the slot it fills
#[derive(Clone, Debug, PartialEq)]
pub enum SectionData {
    TopTracks(Vec<Track>),
    TopArtists(Vec<Artist>),
    NewReleases(Vec<Track>),
    MostLoved(Vec<Track>),
}

impl SectionData {
    pub fn section(&self) -> Section {
        match self {
            SectionData::TopTracks(_) => Section::TopTracks,
            SectionData::TopArtists(_) => Section::TopArtists,
            SectionData::NewReleases(_) => Section::NewReleases,
            SectionData::MostLoved(_) => Section::MostLoved,
        }
    }

    fn len(&self) -> usize {
        match self {
            SectionData::TopArtists(artists) => artists.len(),
            SectionData::TopTracks(tracks)
            | SectionData::NewReleases(tracks)
            | SectionData::MostLoved(tracks) => tracks.len(),
        }
    }
}

/// How one section's fetch settled.
///
/// A successful outcome takes its section from the data, so an outcome can
/// never fill one slot and settle another.
#[derive(Debug)]
pub struct SectionOutcome {
    section: Section,
    result: Result<SectionData, FetchError>,
}

impl SectionOutcome {
    pub fn loaded(data: SectionData) -> Self {
        Self {
            section: data.section(),
            result: Ok(data),
        }
    }

    pub fn failed(section: Section, error: FetchError) -> Self {
        Self {
            section,
            result: Err(error),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn result(&self) -> Result<&SectionData, &FetchError> {
        self.result.as_ref()
    }
}

/// Borrowed items of one section, for rendering
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionItems<'a> {
    Tracks(&'a [Track]),
    Artists(&'a [Artist]),
}

impl SectionItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            SectionItems::Tracks(tracks) => tracks.len(),
            SectionItems::Artists(artists) => artists.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One section as the home page presents it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionView<'a> {
    pub section: Section,
    pub loading: bool,
    pub items: SectionItems<'a>,
}

/// State for the home page
#[derive(Clone, Debug, PartialEq)]
pub struct HomeState {
    pub top_tracks: Vec<Track>,
    pub top_artists: Vec<Artist>,
    pub new_releases: Vec<Track>,
    pub most_loved: Vec<Track>,
    /// Indexed by [`Section::index`]
    loading: [bool; 4],
    /// Error message if any section failed to load
    pub error: Option<String>,
}

impl Default for HomeState {
    /// Nothing fetched yet, every section loading.
    fn default() -> Self {
        Self {
            top_tracks: Vec::new(),
            top_artists: Vec::new(),
            new_releases: Vec::new(),
            most_loved: Vec::new(),
            loading: [true; 4],
            error: None,
        }
    }
}

impl HomeState {
    /// True while any section is still loading
    pub fn is_loading(&self) -> bool {
        self.loading.iter().any(|&l| l)
    }

    pub fn is_section_loading(&self, section: Section) -> bool {
        self.loading[section.index()]
    }

    pub fn items(&self, section: Section) -> SectionItems<'_> {
        match section {
            Section::TopTracks => SectionItems::Tracks(&self.top_tracks),
            Section::TopArtists => SectionItems::Artists(&self.top_artists),
            Section::NewReleases => SectionItems::Tracks(&self.new_releases),
            Section::MostLoved => SectionItems::Tracks(&self.most_loved),
        }
    }

    pub fn section_len(&self, section: Section) -> usize {
        self.items(section).len()
    }

    /// Sections in display order
    pub fn sections(&self) -> impl Iterator<Item = SectionView<'_>> + '_ {
        Section::ALL.into_iter().map(move |section| SectionView {
            section,
            loading: self.is_section_loading(section),
            items: self.items(section),
        })
    }

    /// Start a load cycle: every section loading, error cleared.
    pub fn begin_load(&mut self) {
        self.loading = [true; 4];
        self.error = None;
    }

    /// Fold one settled fetch into the state.
    ///
    /// A failed section is emptied and raises the page-level error; the other
    /// sections are unaffected. The section's loading flag clears either way.
    pub fn apply(&mut self, outcome: SectionOutcome) {
        let SectionOutcome { section, result } = outcome;
        match result {
            Ok(data) => self.store(data),
            Err(_) => self.fail(section),
        }
        self.loading[section.index()] = false;
    }

    /// Settle every section as failed without fetching anything, for when no
    /// data source can be reached at all.
    pub fn fail_all(&mut self) {
        for section in Section::ALL {
            self.fail(section);
        }
        self.loading = [false; 4];
    }

    fn fail(&mut self, section: Section) {
        self.clear(section);
        self.error = Some(LOAD_ERROR_MESSAGE.to_string());
    }

    fn store(&mut self, data: SectionData) {
        match data {
            SectionData::TopTracks(tracks) => self.top_tracks = tracks,
            SectionData::TopArtists(artists) => self.top_artists = artists,
            SectionData::NewReleases(tracks) => self.new_releases = tracks,
            SectionData::MostLoved(tracks) => self.most_loved = tracks,
        }
    }

    fn clear(&mut self, section: Section) {
        match section {
            Section::TopTracks => self.top_tracks.clear(),
            Section::TopArtists => self.top_artists.clear(),
            Section::NewReleases => self.new_releases.clear(),
            Section::MostLoved => self.most_loved.clear(),
        }
    }
}

/// Issues the four section fetches for the home page
pub struct HomeLoader<C> {
    client: C,
}

impl<C: ChartsClient> HomeLoader<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Start all four fetches at once. Outcomes are yielded in arrival order.
    ///
    /// Failures are logged here and delivered as outcomes; the stream itself
    /// never errors.
    pub fn fetch_all(&self) -> impl Stream<Item = SectionOutcome> + '_ {
        Section::ALL
            .into_iter()
            .map(|section| self.fetch_section(section))
            .collect::<FuturesUnordered<_>>()
    }

    /// Fetch one section, logging a failure with the section it belongs to.
    pub async fn fetch_section(&self, section: Section) -> SectionOutcome {
        let result = match section {
            Section::TopTracks => self.client.top_tracks().await.map(SectionData::TopTracks),
            Section::TopArtists => self.client.top_artists().await.map(SectionData::TopArtists),
            Section::NewReleases => self
                .client
                .new_releases()
                .await
                .map(SectionData::NewReleases),
            Section::MostLoved => self.client.most_loved().await.map(SectionData::MostLoved),
        };

        match result {
            Ok(data) => {
                debug!("{} loaded: {} items", section, data.len());
                SectionOutcome::loaded(data)
            }
            Err(e) => {
                error!("Error loading {}: {}", section, e);
                SectionOutcome::failed(section, e)
            }
        }
    }

    /// Run one load cycle to completion.
    pub async fn load(&self, state: &mut HomeState) {
        self.load_with(state, |_| {}).await
    }

    /// Run one load cycle, calling `on_change` after the reset and after every
    /// settled section.
    pub async fn load_with<F>(&self, state: &mut HomeState, mut on_change: F)
    where
        F: FnMut(&HomeState),
    {
        info!("Loading charts");
        state.begin_load();
        on_change(state);

        let mut outcomes = pin!(self.fetch_all());
        while let Some(outcome) = outcomes.next().await {
            state.apply(outcome);
            on_change(state);
        }

        info!(
            "Charts loaded: {} tracks, {} artists, {} new releases, {} most loved{}",
            state.top_tracks.len(),
            state.top_artists.len(),
            state.new_releases.len(),
            state.most_loved.len(),
            if state.error.is_some() {
                " (with errors)"
            } else {
                ""
            }
        );
    }
}
