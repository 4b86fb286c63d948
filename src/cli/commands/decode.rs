//! Decode a saved response file.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result, ResultExt};
use crate::genius::{AnnotatedBody, BodyContent, Decoder, Payload, ResponseKind};

/// Longest body preview printed in summaries
const PREVIEW_CHARS: usize = 80;

/// Decode `path` as a `kind` response and print the result
pub fn cmd_decode(path: &Path, kind: ResponseKind, decoder: Decoder, json: bool) -> anyhow::Result<()> {
    let bytes = read_input(path)?;
    tracing::debug!(
        path = %path.display(),
        %kind,
        format = %decoder.text_format,
        "Decoding response file"
    );

    let envelope = decoder
        .decode(&bytes, kind)
        .with_context(format!("Failed to decode {} as a {} response", path.display(), kind))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&envelope.payload)?);
    } else {
        for line in summarize(&envelope.payload) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Read a response from `path`, or stdin for "-"
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .with_context("Failed to read stdin")?;
        return Ok(bytes);
    }
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    std::fs::read(path).with_context(format!("Failed to read {}", path.display()))
}

/// Human-readable summary of a decoded payload, one entry per line
pub fn summarize(payload: &Payload) -> Vec<String> {
    let mut lines = Vec::new();
    match payload {
        Payload::Artist(artist) => {
            lines.push(format!("Artist:    {}{}", artist.display_name(), id_suffix(artist.id)));
            if let Some(followers) = artist.followers_count {
                lines.push(format!("Followers: {}", followers));
            }
            if !artist.alternate_names.is_empty() {
                lines.push(format!("Also:      {}", artist.alternate_names.join(", ")));
            }
            lines.push(format!("About:     {}", preview(&artist.description)));
        }
        Payload::SongList(list) => {
            lines.push(format!("{} songs", list.songs.len()));
            for song in &list.songs {
                lines.push(format!(
                    "  {:>8}  {}",
                    song.id.map(|id| id.to_string()).unwrap_or_default(),
                    song.full_title.as_deref().or(song.title.as_deref()).unwrap_or("?")
                ));
            }
            match list.next_page {
                Some(page) => lines.push(format!("Next page: {}", page)),
                None => lines.push("Last page".to_string()),
            }
        }
        Payload::Song(song) => {
            lines.push(format!(
                "Song:      {}{}",
                song.title.as_deref().unwrap_or("?"),
                id_suffix(song.id)
            ));
            let artists: Vec<_> = song.performing_artists().map(|a| a.display_name()).collect();
            if !artists.is_empty() {
                lines.push(format!("Artists:   {}", artists.join(", ")));
            }
            if let Some(name) = song.album.as_ref().and_then(|a| a.name.as_deref()) {
                lines.push(format!("Album:     {}", name));
            }
            if let Some(date) = song.release_date_components.and_then(|c| c.to_naive_date()) {
                lines.push(format!("Released:  {}", date));
            }
            lines.push(format!("About:     {}", preview(&song.description)));
            if let Some(referent) = &song.description_annotation {
                lines.push(format!("Notes:     {} annotation(s)", referent.annotations.len()));
            }
        }
        Payload::Search(search) => {
            lines.push(format!("{} hits", search.hits.len()));
            for hit in &search.hits {
                lines.push(format!(
                    "  [{}] {}",
                    hit.hit_type.as_deref().unwrap_or("?"),
                    hit.result.full_title.as_deref().or(hit.result.title.as_deref()).unwrap_or("?")
                ));
            }
            for section in &search.sections {
                lines.push(format!(
                    "Section {}: {} hits",
                    section.section_type.as_deref().unwrap_or("?"),
                    section.hits.len()
                ));
            }
        }
        Payload::Annotation(annotation) => {
            lines.push(format!(
                "Annotation:{}  state={}  votes={}",
                id_suffix(annotation.id),
                annotation.state.as_deref().unwrap_or("?"),
                annotation.votes_total.unwrap_or_default()
            ));
            let authors: Vec<_> = annotation
                .authors
                .iter()
                .filter_map(|a| a.user.as_ref().and_then(|u| u.login.as_deref()))
                .collect();
            if !authors.is_empty() {
                lines.push(format!("Authors:   {}", authors.join(", ")));
            }
            lines.push(format!("Body:      {}", preview(&annotation.body)));
        }
        Payload::User(user) => {
            lines.push(format!(
                "User:      {}{}",
                user.login.as_deref().unwrap_or("?"),
                id_suffix(user.id)
            ));
            if let Some(role) = &user.human_readable_role_for_display {
                lines.push(format!("Role:      {}", role));
            }
            if let Some(iq) = user.iq {
                lines.push(format!("IQ:        {}", iq));
            }
        }
        Payload::WebPage(page) => {
            lines.push(format!(
                "Web page:  {}{}",
                page.title.as_deref().unwrap_or("?"),
                id_suffix(page.id)
            ));
            if let Some(url) = &page.url {
                lines.push(format!("URL:       {}", url));
            }
            lines.push(format!(
                "Annotations: {}",
                page.annotation_count.unwrap_or_default()
            ));
        }
    }
    lines
}

fn id_suffix(id: Option<u64>) -> String {
    id.map(|id| format!(" (#{})", id)).unwrap_or_default()
}

fn preview(body: &AnnotatedBody) -> String {
    let text = match body.content() {
        BodyContent::Absent => return "(none)".to_string(),
        BodyContent::Text(text) => text.clone(),
        BodyContent::Document(_) => body.dom().map(|d| d.to_plain_text()).unwrap_or_default(),
    };
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > PREVIEW_CHARS {
        let cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        single_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genius::{TextFormat, decode_normalized};
    use crate::test_utils::{envelope_bytes, song_response};
    use serde_json::json;

    #[test]
    fn test_summarize_song() {
        let bytes = envelope_bytes(song_response("plain", json!("A song about things.")), None);
        let envelope = decode_normalized(&bytes, ResponseKind::Song, TextFormat::Plain).unwrap();

        let lines = summarize(&envelope.payload);
        assert_eq!(lines[0], "Song:      Sample Song (#378195)");
        assert!(lines.contains(&"Artists:   Lead Artist, Guest".to_string()));
        assert!(lines.contains(&"Album:     Sample Album".to_string()));
        assert!(lines.contains(&"Released:  2012-07-17".to_string()));
        assert!(lines.contains(&"About:     A song about things.".to_string()));
        assert!(lines.contains(&"Notes:     1 annotation(s)".to_string()));
    }

    #[test]
    fn test_summarize_dom_body_flattens_tree() {
        let tree = json!({"tag": "root", "children": [{"tag": "p", "children": ["Flattened"]}]});
        let bytes = envelope_bytes(json!({"annotation": {"id": 4, "body": {"dom": tree}}}), None);
        let envelope = decode_normalized(&bytes, ResponseKind::Annotation, TextFormat::Dom).unwrap();

        let lines = summarize(&envelope.payload);
        assert_eq!(lines.last().unwrap(), "Body:      Flattened");
    }

    #[test]
    fn test_summarize_song_list_pagination() {
        let bytes = envelope_bytes(json!({"songs": [{"id": 1, "title": "One"}], "next_page": null}), None);
        let envelope = decode_normalized(&bytes, ResponseKind::ArtistSongs, TextFormat::Dom).unwrap();

        let lines = summarize(&envelope.payload);
        assert_eq!(lines[0], "1 songs");
        assert_eq!(lines.last().unwrap(), "Last page");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "word ".repeat(40);
        let mut body = AnnotatedBody::from_value(json!({"plain": long})).unwrap();
        body.normalize(TextFormat::Plain).unwrap();

        let shown = preview(&body);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert_eq!(preview(&AnnotatedBody::default()), "(none)");
    }

    #[test]
    fn test_cmd_decode_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        std::fs::write(&path, envelope_bytes(json!({"user": {"id": 1, "login": "x"}}), None)).unwrap();

        let decoder = Decoder::new(TextFormat::Html);
        assert!(cmd_decode(&path, ResponseKind::User, decoder, false).is_ok());

        let missing = dir.path().join("missing.json");
        assert!(cmd_decode(&missing, ResponseKind::User, decoder, true).is_err());
        assert!(matches!(read_input(&missing), Err(Error::NotFound(_))));
    }
}
