//! Search hits, as returned by `/search` and grouped by `/search/multi`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nullable;
use super::song::Song;

/// One search match
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Hit {
    /// Highlight spans; their shape is not documented, kept as raw JSON
    #[serde(deserialize_with = "nullable")]
    pub highlights: Vec<Value>,
    /// Search index that produced the hit, e.g. "song"
    pub index: Option<String>,
    /// Kind of the matched entity, e.g. "song"
    #[serde(rename = "type")]
    pub hit_type: Option<String>,
    /// The matched song. Non-song hits from `/search/multi` decode into the
    /// fields they share with a song.
    #[serde(deserialize_with = "nullable")]
    pub result: Song,
}

/// Hits grouped by category ("top_hit", "song", "lyric", "artist"...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Section {
    /// Category name
    #[serde(rename = "type")]
    pub section_type: Option<String>,
    /// Hits in rank order
    #[serde(deserialize_with = "nullable")]
    pub hits: Vec<Hit>,
}

/// Search payload: flat `hits`, grouped `sections`, or both
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResult {
    /// Flat hit list from `/search`
    #[serde(deserialize_with = "nullable")]
    pub hits: Vec<Hit>,
    /// Grouped hits from `/search/multi`
    #[serde(deserialize_with = "nullable")]
    pub sections: Vec<Section>,
}

impl SearchResult {
    /// Songs from the flat hit list, in rank order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.hits.iter().map(|hit| &hit.result)
    }

    pub fn section(&self, section_type: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.section_type.as_deref() == Some(section_type))
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.sections.iter().all(|s| s.hits.is_empty())
    }
}
