//! Songs, albums and the song lists returned by `/artists/:id/songs`.

use serde::{Deserialize, Serialize};

use super::annotation::DescriptionAnnotation;
use super::artist::Artist;
use super::common::{FactTrack, Media, ReleaseDateComponents, Stats};
use super::nullable;
use super::user::{User, UserMetadata};
use crate::genius::body::AnnotatedBody;

/// Genius song
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Song {
    /// Object type tag, "song"
    #[serde(rename = "_type")]
    pub object_type: Option<String>,
    /// Number of annotations on the lyrics
    pub annotation_count: Option<u64>,
    /// API path (e.g., "/songs/378195")
    pub api_path: Option<String>,
    /// Display credit (e.g., "Kendrick Lamar (Ft. SZA)")
    pub artist_names: Option<String>,
    /// About text in the requested text format
    pub description: AnnotatedBody,
    /// HTML snippet for embedding the lyrics
    pub embed_content: Option<String>,
    /// Spotify/Apple Music fact track, if any
    pub fact_track: Option<FactTrack>,
    /// Whether a video is featured on the page. Also read from the older
    /// `features_video` name; a payload carrying both names is rejected as a
    /// duplicate field
    #[serde(alias = "features_video")]
    pub featured_video: Option<bool>,
    /// Title with artist credit
    pub full_title: Option<String>,
    /// Small header image URL
    pub header_image_thumbnail_url: Option<String>,
    /// Header image URL
    pub header_image_url: Option<String>,
    /// Genius song ID
    pub id: Option<u64>,
    pub instrumental: Option<bool>,
    /// Language code (e.g., "en")
    pub language: Option<String>,
    pub lyrics: Option<String>,
    /// User ID of the lyrics transcriber
    pub lyrics_owner_id: Option<u64>,
    /// "complete", "unreleased"...
    pub lyrics_state: Option<String>,
    /// Unix timestamp of the last lyrics edit
    pub lyrics_updated_at: Option<i64>,
    pub name: Option<String>,
    /// Web path (e.g., "/Artist-song-lyrics")
    pub path: Option<String>,
    /// Times the song was shared. Also read from the older `pyong_count`
    /// name; both at once is a duplicate field
    #[serde(alias = "pyong_count")]
    pub pyongs_count: Option<u64>,
    /// Studio or venue
    pub recording_location: Option<String>,
    /// ISO date, e.g. "1975-10-31"
    pub release_date: Option<String>,
    /// API URL listing related songs
    pub relationships_index_url: Option<String>,
    /// Release date split into parts, any of which may be missing
    pub release_date_components: Option<ReleaseDateComponents>,
    /// Release date as shown on the site (e.g., "October 31, 1975")
    pub release_date_for_display: Option<String>,
    /// Release date with short month (e.g., "Oct. 31, 1975")
    pub release_date_with_abbreviated_month_for_display: Option<String>,
    /// Small cover art URL
    pub song_art_image_thumbnail_url: Option<String>,
    /// Cover art URL
    pub song_art_image_url: Option<String>,
    /// Page view counters
    pub stats: Option<Stats>,
    /// Song title
    pub title: Option<String>,
    /// Title including featured artists (e.g., "Song (Ft. Guest)")
    pub title_with_featured: Option<String>,
    /// Song page URL
    pub url: Option<String>,
    /// What the authenticated user may do with this song
    pub current_user_metadata: Option<UserMetadata>,
    /// Album the song appears on
    pub album: Option<Album>,
    /// Extra credits grouped by role
    #[serde(deserialize_with = "nullable")]
    pub custom_performances: Vec<CustomPerformance>,
    /// Referent holding the song's description annotations
    pub description_annotation: Option<DescriptionAnnotation>,
    /// Credit order as returned by the API. Also read from the older
    /// `featured_artist` name; both at once is a duplicate field
    #[serde(deserialize_with = "nullable", alias = "featured_artist")]
    pub featured_artists: Vec<Artist>,
    /// Streaming and video links
    #[serde(deserialize_with = "nullable")]
    pub media: Vec<Media>,
    /// Main credited artist
    pub primary_artist: Option<Artist>,
    /// Producers in credit order
    #[serde(deserialize_with = "nullable")]
    pub producer_artists: Vec<Artist>,
    /// Samples, covers, remixes and other related songs
    #[serde(deserialize_with = "nullable")]
    pub song_relationships: Vec<SongRelationship>,
    /// Artists who verified annotations on this song
    #[serde(deserialize_with = "nullable")]
    pub verified_annotations_by: Vec<User>,
    /// Verified contributors and what they contributed
    #[serde(deserialize_with = "nullable")]
    pub verified_contributors: Vec<Contributor>,
    /// Users who verified the lyrics
    #[serde(deserialize_with = "nullable")]
    pub verified_lyrics_by: Vec<User>,
    /// Songwriters in credit order
    #[serde(deserialize_with = "nullable")]
    pub writer_artists: Vec<Artist>,
}

impl Song {
    /// Primary artist followed by featured artists, in credit order.
    pub fn performing_artists(&self) -> impl Iterator<Item = &Artist> {
        self.primary_artist.iter().chain(self.featured_artists.iter())
    }

    /// First media link from `provider` ("youtube", "spotify"...).
    pub fn media_url(&self, provider: &str) -> Option<&str> {
        self.media
            .iter()
            .find(|m| m.provider.as_deref() == Some(provider))
            .and_then(|m| m.url.as_deref())
    }

    /// Related songs of one relation type ("samples", "covered_by"...).
    pub fn related(&self, relation: &str) -> &[Song] {
        self.song_relationships
            .iter()
            .find(|r| r.relationship_type.as_deref() == Some(relation))
            .map(|r| r.songs.as_slice())
            .unwrap_or_default()
    }
}

/// Album a song appears on
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Album {
    /// API path (e.g., "/albums/1")
    pub api_path: Option<String>,
    /// Cover art URL
    pub cover_art_url: Option<String>,
    /// Album name with artist credit
    pub full_title: Option<String>,
    /// Genius album ID
    pub id: Option<u64>,
    /// Album name
    pub name: Option<String>,
    /// Album page URL
    pub url: Option<String>,
    /// Album artist
    pub artist: Option<Artist>,
}

/// Extra credit line such as "Mixing Engineer"
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomPerformance {
    /// Role name
    pub label: Option<String>,
    /// Artists credited in this role
    #[serde(deserialize_with = "nullable")]
    pub artists: Vec<Artist>,
}

/// Verified contributor to a song page
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contributor {
    /// What they contributed ("annotations", "lyrics"...)
    #[serde(deserialize_with = "nullable")]
    pub contributions: Vec<String>,
    /// Artist profile, when the contributor is a credited artist
    pub artist: Option<Artist>,
    /// User account
    pub user: Option<User>,
}

/// Group of songs related to this one in the same way
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SongRelationship {
    /// "samples", "sampled_in", "interpolates", "cover_of"...
    #[serde(rename = "type")]
    pub relationship_type: Option<String>,
    /// Related songs, usually sparse
    #[serde(deserialize_with = "nullable")]
    pub songs: Vec<Song>,
}

/// One page of an artist's songs
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SongList {
    /// Songs on this page
    #[serde(deserialize_with = "nullable")]
    pub songs: Vec<Song>,
    /// Page number to request next; absent on the last page
    pub next_page: Option<u32>,
}

impl SongList {
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}
