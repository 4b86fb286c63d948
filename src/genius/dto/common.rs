//! Small value shapes shared by several entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Image with its pixel size
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
    /// Image URL
    pub url: Option<String>,
    /// Rendered size in pixels
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoundingBox {
    /// Width in pixels
    pub width: Option<u32>,
    /// Height in pixels
    pub height: Option<u32>,
}

/// User avatar in the sizes the API renders
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Avatar {
    /// 16x16
    pub tiny: Option<Image>,
    /// 32x32
    pub thumb: Option<Image>,
    /// 100x100
    pub small: Option<Image>,
    /// 300x400
    pub medium: Option<Image>,
}

impl Avatar {
    /// Largest available image URL.
    pub fn best_url(&self) -> Option<&str> {
        [&self.medium, &self.small, &self.thumb, &self.tiny]
            .into_iter()
            .flatten()
            .find_map(|image| image.url.as_deref())
    }
}

/// "Listen on ..." call to action attached to songs
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FactTrack {
    /// Service name (e.g., "spotify")
    pub provider: Option<String>,
    /// Link to the track on that service
    pub external_url: Option<String>,
    /// Call-to-action label
    pub button_text: Option<String>,
    /// Label of the "what is this?" link
    pub help_link_text: Option<String>,
    /// Target of the "what is this?" link
    pub help_link_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Stats {
    /// Annotations accepted by editors
    pub accepted_annotations: Option<u64>,
    /// Users who edited the page
    pub contributors: Option<u64>,
    /// Trending right now
    pub hot: Option<bool>,
    /// Users who earned IQ on the page
    pub iq_earners: Option<u64>,
    /// Users who transcribed lyrics
    pub transcribers: Option<u64>,
    /// Annotations waiting for review
    pub unreviewed_annotations: Option<u64>,
    /// Annotations by verified artists
    pub verified_annotations: Option<u64>,
    /// Readers on the page right now
    pub concurrents: Option<u64>,
    /// Lifetime page views
    pub pageviews: Option<u64>,
}

/// External media link (YouTube, Spotify, SoundCloud...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Media {
    /// Service name ("youtube", "spotify", "soundcloud"...)
    pub provider: Option<String>,
    /// ID on that service
    pub provider_id: Option<String>,
    /// App URI (e.g., "spotify:track:...")
    pub native_uri: Option<String>,
    /// Offset in seconds where playback should start
    pub start: Option<u32>,
    /// "video" or "audio"
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Web URL
    pub url: Option<String>,
}

/// Release date split into parts; month and day may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReleaseDateComponents {
    /// Four-digit year
    pub year: Option<i32>,
    /// 1 to 12
    pub month: Option<u32>,
    /// Day of month
    pub day: Option<u32>,
}

impl ReleaseDateComponents {
    /// Full calendar date, only when all three parts are present and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}
