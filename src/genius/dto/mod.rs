//! Genius API entity shapes
//!
//! These types match what the Genius API returns, field for field.
//! Wire names are a hard compatibility surface: rename, never reformat.
//!
//! API Reference: https://docs.genius.com
//!
//! Every scalar is optional and every list decodes `null` to empty, so a
//! sparse or partially-null object still decodes. Unknown keys are ignored.
//! Body-like fields are [`AnnotatedBody`](super::AnnotatedBody) and stay
//! raw until normalized.

mod annotation;
mod artist;
mod common;
mod search;
mod song;
mod user;
mod web_page;

pub use annotation::{
    Annotatable, Annotation, Author, ClientTimestamps, DescriptionAnnotation, Range,
};
pub use artist::Artist;
pub use common::{Avatar, BoundingBox, FactTrack, Image, Media, ReleaseDateComponents, Stats};
pub use search::{Hit, SearchResult, Section};
pub use song::{Album, Contributor, CustomPerformance, Song, SongList, SongRelationship};
pub use user::{IqAction, IqByAction, Primary, User, UserInteractions, UserMetadata, UserRelationships};
pub use web_page::WebPage;

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default (used for lists the API sometimes nulls).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
