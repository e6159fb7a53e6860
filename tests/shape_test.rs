use moodify::catalog::shape::{catalog_track, first_image, join_artists, saavn_song};
use moodify::types::{CatalogTrack, SaavnSong};
use serde_json::json;

// Helper function to build a raw free-catalog song from JSON
fn create_test_saavn_song(value: serde_json::Value) -> SaavnSong {
    serde_json::from_value(value).unwrap()
}

// Helper function to build a raw catalog track from JSON
fn create_test_catalog_track(value: serde_json::Value) -> CatalogTrack {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_saavn_song_maps_all_fields() {
    let raw = create_test_saavn_song(json!({
        "id": "song1",
        "title": "Midnight Drive",
        "image": ["https://img.example/50.jpg", "https://img.example/150.jpg"],
        "album": {"name": "Night Album"},
        "url": "https://songs.example/song1",
        "primaryArtists": "First Artist, Second Artist",
        "singers": "Someone Else"
    }));

    let song = saavn_song(&raw).unwrap();
    assert_eq!(song.id, "song1");
    assert_eq!(song.title, "Midnight Drive");
    assert_eq!(song.artists.as_deref(), Some("First Artist, Second Artist"));
    assert_eq!(song.album.as_deref(), Some("Night Album"));
    assert_eq!(song.url.as_deref(), Some("https://songs.example/song1"));
    assert_eq!(song.image.as_deref(), Some("https://img.example/50.jpg"));
}

#[test]
fn test_saavn_song_falls_back_to_singers() {
    let raw = create_test_saavn_song(json!({
        "id": "song2",
        "title": "Fallback",
        "singers": ["Singer A", "Singer B"]
    }));

    let song = saavn_song(&raw).unwrap();
    assert_eq!(song.artists.as_deref(), Some("Singer A, Singer B"));
    // Fields the record never had are simply absent
    assert!(song.album.is_none());
    assert!(song.url.is_none());
    assert!(song.image.is_none());
}

#[test]
fn test_missing_identifier_or_title_is_a_shape_mismatch() {
    let no_id = create_test_saavn_song(json!({ "title": "No Id" }));
    let err = saavn_song(&no_id).unwrap_err();
    assert!(err.to_string().contains("missing id"));

    let no_title = create_test_saavn_song(json!({ "id": "song3" }));
    let err = saavn_song(&no_title).unwrap_err();
    assert!(err.to_string().contains("missing title"));

    let blank_title = create_test_saavn_song(json!({ "id": "song4", "title": "   " }));
    assert!(saavn_song(&blank_title).is_err());
}

#[test]
fn test_first_image_takes_the_first_usable_url() {
    // Array of plain strings
    assert_eq!(
        first_image(&json!(["https://a.jpg", "https://b.jpg"])),
        Some("https://a.jpg".to_string())
    );

    // Array of quality/link objects
    assert_eq!(
        first_image(&json!([
            {"quality": "50x50", "url": "https://small.jpg"},
            {"quality": "500x500", "url": "https://large.jpg"}
        ])),
        Some("https://small.jpg".to_string())
    );

    // Plain string passes through, absent values stay absent
    assert_eq!(
        first_image(&json!("https://only.jpg")),
        Some("https://only.jpg".to_string())
    );
    assert_eq!(first_image(&json!(null)), None);
    assert_eq!(first_image(&json!([])), None);
}

#[test]
fn test_join_artists_collapses_arrays() {
    assert_eq!(
        join_artists(&json!(["One", "Two", "Three"])),
        Some("One, Two, Three".to_string())
    );
    assert_eq!(
        join_artists(&json!([{"name": "One"}, {"name": "Two"}])),
        Some("One, Two".to_string())
    );
    assert_eq!(join_artists(&json!("Solo")), Some("Solo".to_string()));
    assert_eq!(join_artists(&json!(null)), None);
    assert_eq!(join_artists(&json!([])), None);
}

#[test]
fn test_catalog_track_maps_all_fields() {
    let raw = create_test_catalog_track(json!({
        "id": "track1",
        "name": "Catalog Song",
        "artists": [{"name": "One"}, {"name": "Two"}],
        "album": {
            "name": "Catalog Album",
            "images": [{"url": "https://cover.jpg"}, {"url": "https://cover-small.jpg"}]
        },
        "external_urls": {"spotify": "https://open.example/track1"}
    }));

    let song = catalog_track(&raw).unwrap();
    assert_eq!(song.id, "track1");
    assert_eq!(song.title, "Catalog Song");
    assert_eq!(song.artists.as_deref(), Some("One, Two"));
    assert_eq!(song.album.as_deref(), Some("Catalog Album"));
    assert_eq!(song.url.as_deref(), Some("https://open.example/track1"));
    assert_eq!(song.image.as_deref(), Some("https://cover.jpg"));
}

#[test]
fn test_catalog_track_requires_identifier_and_name() {
    let no_id = create_test_catalog_track(json!({ "name": "No Id" }));
    assert!(catalog_track(&no_id).is_err());

    let no_name = create_test_catalog_track(json!({ "id": "track2" }));
    assert!(catalog_track(&no_name).is_err());
}

#[test]
fn test_shaped_songs_always_have_non_empty_id_and_title() {
    let records = vec![
        json!({"id": "a", "title": "A"}),
        json!({"id": "b", "title": "B", "image": [], "primaryArtists": []}),
        json!({"id": "c", "title": "C", "album": "Plain Album"}),
    ];

    for record in records {
        let song = saavn_song(&create_test_saavn_song(record)).unwrap();
        assert!(!song.id.is_empty());
        assert!(!song.title.is_empty());
    }
}
