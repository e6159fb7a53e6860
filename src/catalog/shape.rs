//! Maps upstream song records into the internal [`Song`] shape.
//!
//! Identifier and title are required; everything else degrades to `None`.
//! Artwork arrays collapse to their first usable URL, multi-artist values
//! collapse to one comma-separated string.

use serde_json::Value;

use crate::{
    error::{Error, Result},
    types::{CatalogTrack, SaavnSong, Song},
};

fn required(field: Option<&str>, name: &str) -> Result<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(Error::UpstreamShapeMismatch(format!(
            "song record missing {name}"
        ))),
    }
}

fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map
            .get("url")
            .or_else(|| map.get("link"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// First usable artwork URL from a string, object or array value.
pub fn first_image(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.first().and_then(image_url),
        other => image_url(other),
    }
}

/// Joins a multi-artist value into one comma-separated string. Plain
/// strings pass through untouched.
pub fn join_artists(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let names: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.is_empty() => Some(s.as_str()),
                    Value::Object(map) => map.get("name").and_then(Value::as_str),
                    _ => None,
                })
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(", "))
            }
        }
        _ => None,
    }
}

fn text_or_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Shapes a free-catalog song record.
pub fn saavn_song(raw: &SaavnSong) -> Result<Song> {
    Ok(Song {
        id: required(raw.id.as_deref(), "id")?,
        title: required(raw.title.as_deref(), "title")?,
        artists: join_artists(&raw.primary_artists).or_else(|| join_artists(&raw.singers)),
        album: text_or_name(&raw.album),
        url: raw.url.clone(),
        image: first_image(&raw.image),
    })
}

/// Shapes an authenticated-catalog track record.
pub fn catalog_track(raw: &CatalogTrack) -> Result<Song> {
    let names: Vec<&str> = raw.artists.iter().map(|a| a.name.as_str()).collect();
    Ok(Song {
        id: required(raw.id.as_deref(), "id")?,
        title: required(raw.name.as_deref(), "name")?,
        artists: if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        },
        album: raw.album.as_ref().and_then(|a| a.name.clone()),
        url: raw.external_urls.get("spotify").cloned(),
        image: raw
            .album
            .as_ref()
            .and_then(|a| a.images.first())
            .map(|i| i.url.clone()),
    })
}
