//! One normalization pass over a decoded payload.
//!
//! Every entity that can (transitively) hold an [`AnnotatedBody`] implements
//! [`Normalize`], so a single call on a [`Payload`] resolves every annotation
//! body and song/artist description with the request's text format. The
//! first [`ShapeError`] aborts the pass.

use super::body::{AnnotatedBody, TextFormat};
use super::dto::{
    Album, Annotation, Artist, Contributor, CustomPerformance, DescriptionAnnotation, Hit,
    SearchResult, Section, Song, SongList, SongRelationship,
};
use super::kind::Payload;
use crate::error::ShapeError;

/// Resolve every body-like field reachable from `self`.
pub trait Normalize {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError>;
}

impl Normalize for AnnotatedBody {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        AnnotatedBody::normalize(self, format)
    }
}

impl<T: Normalize> Normalize for Option<T> {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        match self {
            Some(inner) => inner.normalize(format),
            None => Ok(()),
        }
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.iter_mut().try_for_each(|item| item.normalize(format))
    }
}

impl Normalize for Annotation {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.body.normalize(format).inspect_err(|e| {
            tracing::debug!(annotation_id = ?self.id, error = %e, "Annotation body rejected");
        })
    }
}

impl Normalize for DescriptionAnnotation {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.annotations.normalize(format)
    }
}

impl Normalize for Artist {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.description.normalize(format).inspect_err(|e| {
            tracing::debug!(artist_id = ?self.id, error = %e, "Artist description rejected");
        })?;
        self.description_annotation.normalize(format)
    }
}

impl Normalize for Album {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.artist.normalize(format)
    }
}

impl Normalize for CustomPerformance {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.artists.normalize(format)
    }
}

impl Normalize for Contributor {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.artist.normalize(format)
    }
}

impl Normalize for SongRelationship {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.songs.normalize(format)
    }
}

impl Normalize for Song {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.description.normalize(format).inspect_err(|e| {
            tracing::debug!(song_id = ?self.id, error = %e, "Song description rejected");
        })?;
        self.description_annotation.normalize(format)?;
        self.primary_artist.normalize(format)?;
        self.featured_artists.normalize(format)?;
        self.producer_artists.normalize(format)?;
        self.writer_artists.normalize(format)?;
        self.album.normalize(format)?;
        self.custom_performances.normalize(format)?;
        self.verified_contributors.normalize(format)?;
        self.song_relationships.normalize(format)
    }
}

impl Normalize for SongList {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.songs.normalize(format)
    }
}

impl Normalize for Hit {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.result.normalize(format)
    }
}

impl Normalize for Section {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.hits.normalize(format)
    }
}

impl Normalize for SearchResult {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        self.hits.normalize(format)?;
        self.sections.normalize(format)
    }
}

impl Normalize for Payload {
    fn normalize(&mut self, format: TextFormat) -> Result<(), ShapeError> {
        match self {
            Payload::Artist(artist) => artist.normalize(format),
            Payload::SongList(list) => list.normalize(format),
            Payload::Song(song) => song.normalize(format),
            Payload::Search(search) => search.normalize(format),
            Payload::Annotation(annotation) => annotation.normalize(format),
            // Users and web pages carry no bodies
            Payload::User(_) | Payload::WebPage(_) => Ok(()),
        }
    }
}
