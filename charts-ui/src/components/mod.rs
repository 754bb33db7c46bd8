//! Shared UI components

pub mod artist_card;
pub mod card_hover;
pub mod chart_section;
pub mod helpers;
pub mod home;
pub mod icons;
pub mod search_results;
pub mod section_cards;
pub mod track_card;
pub mod utils;

pub use artist_card::{ArtistCard, ArtistMeta};
pub use card_hover::CardHover;
pub use chart_section::ChartSection;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use home::HomeView;
pub use icons::{MusicIcon, SearchIcon};
pub use search_results::SearchResultsView;
pub use section_cards::{CardItems, SectionCards};
pub use track_card::{TrackCard, TrackMeta};
pub use utils::{format_count, format_followers, format_plays};
