//! charts-core - Data model, fetch client and load orchestration for the charts front end
//!
//! Contains no UI code. The view crates render the types defined here and the
//! web app drives [`HomeLoader`] to fill a [`HomeState`].

pub mod client;
pub mod config;
pub mod home;
pub mod models;
pub mod search;

pub use charts_common::Section;
pub use client::{ChartsClient, FetchError, HttpChartsClient};
pub use config::{ChartsConfig, ConfigError};
pub use home::{HomeLoader, HomeState, SectionData, SectionOutcome, LOAD_ERROR_MESSAGE};
pub use models::{Artist, Track};
