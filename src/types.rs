use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One song as delivered to clients. Ephemeral: lives for the duration of a
/// single fetch response unless explicitly saved to a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artists: Option<String>,
    pub album: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// Account created on first successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub oauth_id: String,
    pub provider: String,
}

/// Fields collected from the identity provider for a first sign-in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub oauth_id: String,
    pub provider: Provider,
}

/// Session payload exposed to the application once a token is verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlaylist {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub songs: Vec<SavedSong>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSong {
    pub id: i64,
    pub name: String,
    pub artist: String,
    pub url: String,
    pub playlist_id: i64,
}

/// Identity providers accepted for sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Spotify,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Spotify => "spotify",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "spotify" => Ok(Provider::Spotify),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---- HTTP API request bodies ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRequest {
    #[serde(default)]
    pub mood: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    #[serde(default)]
    pub name: String,
}

// ---- Free catalog (search) wire shapes ----

#[derive(Debug, Clone, Deserialize)]
pub struct SaavnSearchResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<SaavnSearchData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaavnSearchData {
    pub songs: Option<SaavnSongMatches>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaavnSongMatches {
    #[serde(default)]
    pub results: Vec<SaavnSong>,
}

/// Raw song record from the free catalog. Several fields vary in shape
/// between catalog versions (string vs array vs object), so they are kept
/// as JSON values and normalized by the result shaper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaavnSong {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub image: Value,
    #[serde(default)]
    pub album: Value,
    pub url: Option<String>,
    #[serde(rename = "primaryArtists", default)]
    pub primary_artists: Value,
    #[serde(default)]
    pub singers: Value,
}

// ---- Authenticated catalog (Spotify) wire shapes ----

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSearchResponse {
    pub playlists: Option<PlaylistPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    // Search pages may contain null entries.
    #[serde(default)]
    pub items: Vec<Option<PlaylistRef>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    #[serde(default)]
    pub items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<CatalogTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<CatalogArtistRef>,
    pub album: Option<CatalogAlbumRef>,
    #[serde(default)]
    pub external_urls: std::collections::HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogArtistRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogAlbumRef {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogImage {
    pub url: String,
}

// ---- OAuth identity wire shapes ----

#[derive(Debug, Clone, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}
