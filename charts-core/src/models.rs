//! Chart records as served by the data source

use serde::{Deserialize, Serialize};

/// A ranked track
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    /// Display name of the performing artist
    pub artist: String,
    /// Cover image URI
    pub thumbnail: String,
    /// Free-form length, e.g. "3:20"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<u64>,
}

/// A ranked artist
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// Profile image URI
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}
