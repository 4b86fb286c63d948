//! Annotations and the referents that carry them.

use serde::{Deserialize, Serialize};

use super::nullable;
use super::user::{User, UserMetadata};
use crate::genius::body::AnnotatedBody;

/// A single annotation: an explanation attached to a fragment of text
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Annotation {
    /// Format-dependent body, see [`AnnotatedBody`]
    pub body: AnnotatedBody,
    /// API path (e.g., "/annotations/66")
    pub api_path: Option<String>,
    /// Replies under the annotation
    pub comment_count: Option<u64>,
    /// Written by the community rather than the artist
    pub community: Option<bool>,
    /// Short preview text, when set
    pub custom_preview: Option<String>,
    /// Anyone has voted
    pub has_voters: Option<bool>,
    /// Genius annotation ID
    pub id: Option<u64>,
    /// Pinned to the top of the referent
    pub pinned: Option<bool>,
    /// Short share link
    pub share_url: Option<String>,
    /// Citation for the annotation
    pub source: Option<String>,
    /// "accepted", "pending", "rejected"...
    pub state: Option<String>,
    /// Annotation page URL
    pub url: Option<String>,
    /// Written or approved by a verified artist
    pub verified: Option<bool>,
    /// Net votes, can be negative. Also read from the older `voters_total`
    /// name; both at once is a duplicate field
    #[serde(alias = "voters_total")]
    pub votes_total: Option<i64>,
    /// What the authenticated user may do with this annotation
    pub current_user_metadata: Option<UserMetadata>,
    /// Contributors in attribution order
    #[serde(deserialize_with = "nullable")]
    pub authors: Vec<Author>,
    /// Verified users who endorsed it
    #[serde(deserialize_with = "nullable")]
    pub cosigned_by: Vec<User>,
    /// Verified artist who approved it
    pub verified_by: Option<User>,
}

/// Contributor to an annotation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Author {
    /// Share of the annotation written by this user (0.0 to 1.0)
    pub attribution: Option<f64>,
    /// Role pinned on the author (e.g., "artist")
    pub pinned_role: Option<String>,
    /// Author's account
    pub user: Option<User>,
}

/// Referent holding an artist's or song's description (bio) annotations
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DescriptionAnnotation {
    /// Always "referent" for this shape
    #[serde(rename = "_type")]
    pub object_type: Option<String>,
    /// User ID of the first annotator
    pub annotator_id: Option<u64>,
    /// Login of the first annotator
    pub annotator_login: Option<String>,
    /// API path (e.g., "/referents/123")
    pub api_path: Option<String>,
    /// "accepted", "unreviewed"...
    pub classification: Option<String>,
    /// Text the referent is attached to
    pub fragment: Option<String>,
    /// Genius referent ID
    pub id: Option<u64>,
    /// Always true for description referents
    pub is_description: Option<bool>,
    /// Web path
    pub path: Option<String>,
    /// Song ID, null for artist bios
    pub song_id: Option<u64>,
    /// Referent page URL
    pub url: Option<String>,
    /// IDs of verified artists who annotated
    #[serde(deserialize_with = "nullable")]
    pub verified_annotator_ids: Vec<u64>,
    /// Artist or song the referent belongs to
    pub annotatable: Option<Annotatable>,
    /// Annotations in display order
    #[serde(deserialize_with = "nullable")]
    pub annotations: Vec<Annotation>,
    /// Annotated span
    pub range: Option<Range>,
}

impl DescriptionAnnotation {
    /// The first annotation, which carries the description text.
    pub fn primary(&self) -> Option<&Annotation> {
        self.annotations.first()
    }
}

/// Entity a referent is attached to, identified by `type` and `id`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Annotatable {
    /// API path of the artist or song
    pub api_path: Option<String>,
    /// Owning artist name, for songs
    pub context: Option<String>,
    /// ID of the artist or song
    pub id: Option<u64>,
    /// Artist image or cover art URL
    pub image_url: Option<String>,
    /// Title used in links
    pub link_title: Option<String>,
    /// Artist name or song title
    pub title: Option<String>,
    /// "Artist" or "Song"
    #[serde(rename = "type")]
    pub annotatable_type: Option<String>,
    /// Artist or song page URL
    pub url: Option<String>,
    /// Last edit times
    pub client_timestamps: Option<ClientTimestamps>,
}

impl Annotatable {
    pub fn is_artist(&self) -> bool {
        self.annotatable_type.as_deref() == Some("Artist")
    }

    pub fn is_song(&self) -> bool {
        self.annotatable_type.as_deref() == Some("Song")
    }
}

/// Unix timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientTimestamps {
    /// Last manual edit
    pub updated_by_human_at: Option<i64>,
    /// Last lyrics edit
    pub lyrics_updated_at: Option<i64>,
}

/// Annotated span of the annotatable's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Range {
    /// Annotated text
    pub content: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our shapes match what the real API returns.
// If these fail, the API has changed and the shapes need updating.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::genius::TextFormat;

    #[test]
    fn test_parse_annotation() {
        let json = r#"{
            "api_path": "/annotations/10225840",
            "body": {"plain": "Annotation body"},
            "comment_count": 3,
            "community": true,
            "custom_preview": null,
            "has_voters": true,
            "id": 10225840,
            "pinned": false,
            "share_url": "https://genius.com/10225840",
            "source": null,
            "state": "accepted",
            "url": "https://genius.com/10225840/Annotated",
            "verified": false,
            "votes_total": -2,
            "current_user_metadata": {"permissions": ["vote"]},
            "authors": [
                {"attribution": 0.75, "pinned_role": null, "user": {"id": 1, "login": "first"}},
                {"attribution": 0.25, "pinned_role": "editor", "user": {"id": 2, "login": "second"}}
            ],
            "cosigned_by": [],
            "rejection_comment": null,
            "verified_by": {"id": 3, "login": "artist"}
        }"#;

        let annotation: Annotation = serde_json::from_str(json).expect("Should parse annotation");
        assert_eq!(annotation.id, Some(10225840));
        assert_eq!(annotation.state.as_deref(), Some("accepted"));
        assert_eq!(annotation.votes_total, Some(-2));
        assert_eq!(annotation.authors.len(), 2);
        assert_eq!(annotation.authors[0].attribution, Some(0.75));
        assert_eq!(
            annotation.authors[1].user.as_ref().and_then(|u| u.login.as_deref()),
            Some("second")
        );
        assert_eq!(annotation.authors[1].pinned_role.as_deref(), Some("editor"));
        assert_eq!(annotation.verified_by.and_then(|u| u.id), Some(3));
        assert!(!annotation.body.is_empty());
    }

    #[test]
    fn test_legacy_voters_total_name() {
        let annotation: Annotation =
            serde_json::from_str(r#"{"voters_total": 12}"#).expect("Should accept legacy name");
        assert_eq!(annotation.votes_total, Some(12));
    }

    #[test]
    fn test_parse_description_annotation() {
        let json = r#"{
            "_type": "referent",
            "annotator_id": 4,
            "annotator_login": "editor",
            "api_path": "/referents/123",
            "classification": "accepted",
            "fragment": "Artist",
            "id": 123,
            "is_description": true,
            "path": "/123/Artist",
            "range": {"content": "Artist"},
            "song_id": null,
            "url": "https://genius.com/123/Artist",
            "verified_annotator_ids": [5, 6],
            "annotatable": {
                "api_path": "/artists/16775",
                "context": null,
                "id": 16775,
                "image_url": "https://images.genius.com/artist.jpg",
                "link_title": "Artist",
                "title": "Artist",
                "type": "Artist",
                "url": "https://genius.com/artists/Artist",
                "client_timestamps": {"updated_by_human_at": 1599000000, "lyrics_updated_at": null}
            },
            "annotations": [{"id": 1, "body": {"html": "<p>Bio</p>"}}]
        }"#;

        let referent: DescriptionAnnotation =
            serde_json::from_str(json).expect("Should parse description annotation");
        assert_eq!(referent.object_type.as_deref(), Some("referent"));
        assert_eq!(referent.is_description, Some(true));
        assert!(referent.song_id.is_none());
        assert_eq!(referent.verified_annotator_ids, vec![5, 6]);
        assert_eq!(referent.range.unwrap().content.as_deref(), Some("Artist"));

        let annotatable = referent.annotatable.expect("annotatable present");
        assert!(annotatable.is_artist());
        assert!(!annotatable.is_song());
        assert_eq!(annotatable.id, Some(16775));
        assert_eq!(
            annotatable.client_timestamps.unwrap().updated_by_human_at,
            Some(1599000000)
        );

        let mut primary = referent.annotations[0].clone();
        primary.body.normalize(TextFormat::Html).unwrap();
        assert_eq!(primary.body.normalized_text(), Some("<p>Bio</p>"));
    }

    #[test]
    fn test_body_wrong_json_type_fails_decode() {
        let result = serde_json::from_str::<Annotation>(r#"{"body": 42}"#);
        assert!(result.is_err());
    }
}
