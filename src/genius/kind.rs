//! Endpoint kinds and the payload each one decodes into.
//!
//! The `response` object carries no type tag: `/songs/:id` nests a `song`
//! key, `/search` a `hits` list, and so on. The caller knows which endpoint
//! it hit and says so with a [`ResponseKind`]. Decoding with the wrong kind
//! yields an all-empty entity rather than an error.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::dto::{Annotation, Artist, SearchResult, Song, SongList, User, WebPage};
use crate::error::DecodeError;

/// Endpoint family a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// `/artists/:id`
    Artist,
    /// `/artists/:id/songs`
    ArtistSongs,
    /// `/songs/:id`
    Song,
    /// `/search`, `/search/multi`
    Search,
    /// `/annotations/:id`
    Annotation,
    /// `/users/:id`, `/account`
    User,
    /// `/web_pages/lookup`
    WebPage,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 7] = [
        ResponseKind::Artist,
        ResponseKind::ArtistSongs,
        ResponseKind::Song,
        ResponseKind::Search,
        ResponseKind::Annotation,
        ResponseKind::User,
        ResponseKind::WebPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseKind::Artist => "artist",
            ResponseKind::ArtistSongs => "artist-songs",
            ResponseKind::Song => "song",
            ResponseKind::Search => "search",
            ResponseKind::Annotation => "annotation",
            ResponseKind::User => "user",
            ResponseKind::WebPage => "web-page",
        }
    }

    /// Keys under `response` this kind reads.
    pub fn response_keys(self) -> &'static [&'static str] {
        match self {
            ResponseKind::Artist => &["artist"],
            ResponseKind::ArtistSongs => &["songs", "next_page"],
            ResponseKind::Song => &["song"],
            ResponseKind::Search => &["hits", "sections"],
            ResponseKind::Annotation => &["annotation"],
            ResponseKind::User => &["user"],
            ResponseKind::WebPage => &["web_page"],
        }
    }

    /// Whether `response` holds at least one key this kind reads.
    pub fn matches(self, response: &Map<String, Value>) -> bool {
        self.response_keys()
            .iter()
            .any(|key| response.contains_key(*key))
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ResponseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = ResponseKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown response kind \"{s}\" (expected one of: {})", names.join(", "))
            })
    }
}

/// Decoded `response` object, one variant per [`ResponseKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Artist(Artist),
    SongList(SongList),
    Song(Song),
    Search(SearchResult),
    Annotation(Annotation),
    User(User),
    WebPage(WebPage),
}

impl Payload {
    /// Decode `response` as `kind`. Missing keys give an empty entity.
    pub fn from_response(
        kind: ResponseKind,
        mut response: Map<String, Value>,
    ) -> Result<Self, DecodeError> {
        Ok(match kind {
            ResponseKind::Artist => Payload::Artist(take(kind, &mut response, "artist")?),
            ResponseKind::ArtistSongs => Payload::SongList(whole(kind, response)?),
            ResponseKind::Song => Payload::Song(take(kind, &mut response, "song")?),
            ResponseKind::Search => Payload::Search(whole(kind, response)?),
            ResponseKind::Annotation => {
                Payload::Annotation(take(kind, &mut response, "annotation")?)
            }
            ResponseKind::User => Payload::User(take(kind, &mut response, "user")?),
            ResponseKind::WebPage => Payload::WebPage(take(kind, &mut response, "web_page")?),
        })
    }

    pub fn kind(&self) -> ResponseKind {
        match self {
            Payload::Artist(_) => ResponseKind::Artist,
            Payload::SongList(_) => ResponseKind::ArtistSongs,
            Payload::Song(_) => ResponseKind::Song,
            Payload::Search(_) => ResponseKind::Search,
            Payload::Annotation(_) => ResponseKind::Annotation,
            Payload::User(_) => ResponseKind::User,
            Payload::WebPage(_) => ResponseKind::WebPage,
        }
    }

    pub fn as_artist(&self) -> Option<&Artist> {
        match self {
            Payload::Artist(artist) => Some(artist),
            _ => None,
        }
    }

    pub fn as_song_list(&self) -> Option<&SongList> {
        match self {
            Payload::SongList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_song(&self) -> Option<&Song> {
        match self {
            Payload::Song(song) => Some(song),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchResult> {
        match self {
            Payload::Search(search) => Some(search),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Payload::Annotation(annotation) => Some(annotation),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Payload::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_web_page(&self) -> Option<&WebPage> {
        match self {
            Payload::WebPage(page) => Some(page),
            _ => None,
        }
    }
}

/// Decode the entity nested under `key`; absent or `null` is the empty entity.
fn take<T>(kind: ResponseKind, response: &mut Map<String, Value>, key: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    match response.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value).map_err(|source| DecodeError::Payload { kind, source })
        }
    }
}

/// Decode the `response` object itself (song lists and search results).
fn whole<T: DeserializeOwned>(kind: ResponseKind, response: Map<String, Value>) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(response))
        .map_err(|source| DecodeError::Payload { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_kind_parse_and_display() {
        for kind in ResponseKind::ALL {
            assert_eq!(kind.as_str().parse::<ResponseKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!("web_page".parse::<ResponseKind>(), Ok(ResponseKind::WebPage));
        assert_eq!("Artist_Songs".parse::<ResponseKind>(), Ok(ResponseKind::ArtistSongs));
        assert!("album".parse::<ResponseKind>().is_err());
    }

    #[test]
    fn test_dispatch_song() {
        let payload =
            Payload::from_response(ResponseKind::Song, object(json!({"song": {"id": 1, "title": "X"}})))
                .unwrap();
        assert_eq!(payload.kind(), ResponseKind::Song);
        let song = payload.as_song().unwrap();
        assert_eq!(song.id, Some(1));
        assert_eq!(song.title.as_deref(), Some("X"));
        assert!(payload.as_artist().is_none());
    }

    #[test]
    fn test_dispatch_song_list_and_search_read_whole_response() {
        let list = Payload::from_response(
            ResponseKind::ArtistSongs,
            object(json!({"songs": [{"id": 1}], "next_page": 2})),
        )
        .unwrap();
        assert_eq!(list.as_song_list().unwrap().next_page, Some(2));

        let search = Payload::from_response(
            ResponseKind::Search,
            object(json!({"hits": [{"type": "song", "result": {"id": 5}}]})),
        )
        .unwrap();
        assert_eq!(search.as_search().unwrap().hits[0].result.id, Some(5));
    }

    #[test]
    fn test_wrong_kind_yields_empty_entity() {
        let payload =
            Payload::from_response(ResponseKind::Artist, object(json!({"song": {"id": 1}}))).unwrap();
        assert_eq!(payload.as_artist(), Some(&Artist::default()));
    }

    #[test]
    fn test_null_entity_is_empty() {
        let payload =
            Payload::from_response(ResponseKind::User, object(json!({"user": null}))).unwrap();
        assert_eq!(payload.as_user(), Some(&User::default()));
    }

    #[test]
    fn test_wrong_json_type_is_payload_error() {
        let err = Payload::from_response(ResponseKind::Song, object(json!({"song": {"id": "one"}})))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Payload { kind: ResponseKind::Song, .. }));
    }

    #[test]
    fn test_matches_checks_expected_keys() {
        let response = object(json!({"sections": []}));
        assert!(ResponseKind::Search.matches(&response));
        assert!(!ResponseKind::Song.matches(&response));
    }

    #[test]
    fn test_legacy_and_current_name_together_is_payload_error() {
        let response = object(json!({"song": {"id": 1, "featured_artists": [], "featured_artist": []}}));
        let err = Payload::from_response(ResponseKind::Song, response).unwrap_err();
        assert!(matches!(err, DecodeError::Payload { kind: ResponseKind::Song, .. }));
        assert!(err.to_string().contains("featured_artists"));
    }
}
