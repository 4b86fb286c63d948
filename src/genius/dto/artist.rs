//! Artists.

use serde::{Deserialize, Serialize};

use super::annotation::DescriptionAnnotation;
use super::nullable;
use super::user::{User, UserMetadata};
use crate::genius::body::AnnotatedBody;

/// Genius artist
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Artist {
    /// Other names the artist is known by
    #[serde(deserialize_with = "nullable")]
    pub alternate_names: Vec<String>,
    /// API path (e.g., "/artists/1")
    pub api_path: Option<String>,
    /// Bio in the requested text format
    pub description: AnnotatedBody,
    /// Facebook handle
    pub facebook_name: Option<String>,
    /// Genius followers
    pub followers_count: Option<u64>,
    /// Profile header image URL
    pub header_image_url: Option<String>,
    /// Genius artist ID
    pub id: Option<u64>,
    /// Artist image URL
    pub image_url: Option<String>,
    /// Instagram handle
    pub instagram_name: Option<String>,
    /// Verified through a meme video
    pub is_meme_verified: Option<bool>,
    /// Verified artist account
    pub is_verified: Option<bool>,
    /// Artist name
    pub name: Option<String>,
    /// Twitter handle
    pub twitter_name: Option<String>,
    /// Artist page URL
    pub url: Option<String>,
    /// What the authenticated user may do with this artist
    pub current_user_metadata: Option<UserMetadata>,
    /// IQ of the linked account
    pub iq: Option<i64>,
    /// Referent holding the bio annotations
    pub description_annotation: Option<DescriptionAnnotation>,
    /// Snapshot of the account behind a verified artist, not a live link
    pub user: Option<User>,
}

impl Artist {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Artist")
    }
}
