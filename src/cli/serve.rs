use crate::{
    config, error, info,
    management::SessionManager,
    server::{self, AppState},
    store::PlaylistStore,
};

pub async fn serve() {
    let database_url = config::database_url();
    let store = match PlaylistStore::connect(&database_url).await {
        Ok(store) => store,
        Err(e) => error!("Failed to open playlist store at {}: {}", database_url, e),
    };

    let state = AppState::new(store, SessionManager::new(config::session_secret()));

    info!("Listening on {}", config::server_addr());
    server::start_api_server(state).await;
}
