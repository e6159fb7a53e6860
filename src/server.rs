use std::{collections::HashMap, net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    api::{self, auth::PendingLogin},
    config, error,
    management::{SessionManager, TokenCache},
    store::PlaylistStore,
};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlaylistStore>,
    pub sessions: SessionManager,
    pub tokens: Arc<TokenCache>,
    pub http: Client,
    pub logins: Arc<Mutex<HashMap<String, PendingLogin>>>,
}

impl AppState {
    pub fn new(store: PlaylistStore, sessions: SessionManager) -> Self {
        AppState {
            store: Arc::new(store),
            sessions,
            tokens: Arc::new(TokenCache::new()),
            http: Client::new(),
            logins: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/getPlaylist", post(api::get_playlist))
        .route("/api/auth/{provider}/login", get(api::auth::login))
        .route("/api/auth/{provider}/callback", get(api::auth::callback))
        .route(
            "/api/playlists",
            get(api::list_playlists).post(api::create_playlist),
        )
        .with_state(state)
}

pub async fn start_api_server(state: AppState) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
