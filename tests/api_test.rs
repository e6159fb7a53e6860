use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use moodify::{
    management::SessionManager,
    server::{AppState, router},
    store::PlaylistStore,
    types::{NewUser, Provider},
};

async fn create_test_state() -> AppState {
    let store = PlaylistStore::in_memory().await.unwrap();
    AppState::new(store, SessionManager::new("test-secret".to_string()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = router(create_test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_empty_mood_is_rejected_before_any_upstream_call() {
    let app = router(create_test_state().await);

    for body in [json!({ "mood": "" }), json!({ "mood": "   " }), json!({})] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/getPlaylist", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Mood is required");
    }
}

#[tokio::test]
async fn test_saved_playlists_require_a_session() {
    let app = router(create_test_state().await);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/playlists")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/playlists", json!({"name": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A token signed with another secret reads as not signed in
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/playlists")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_saved_playlists() {
    let state = create_test_state().await;
    let user = state
        .store
        .find_or_create_user(NewUser {
            name: Some("Test User".to_string()),
            email: "api@example.com".to_string(),
            image: None,
            oauth_id: "oauth-api".to_string(),
            provider: Provider::Spotify,
        })
        .await
        .unwrap();
    let token = state.sessions.issue(&user).unwrap();
    let bearer = format!("Bearer {}", token);

    let app = router(state);

    let authed_create = || {
        let mut request = json_request("POST", "/api/playlists", json!({ "name": "Chill" }));
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, bearer.parse().unwrap());
        request
    };

    // First create inserts the row
    let response = app.clone().oneshot(authed_create()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["name"], "Chill");
    assert_eq!(created["user_id"], user.id);

    // Second create with the same name is an idempotent no-op
    let response = app.clone().oneshot(authed_create()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reused = response_json(response).await;
    assert_eq!(reused["id"], created["id"]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/playlists")
                .header(header::AUTHORIZATION, bearer.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = response_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Chill");
    assert_eq!(listed[0]["songs"], json!([]));
}

#[tokio::test]
async fn test_empty_playlist_name_is_rejected() {
    let state = create_test_state().await;
    let user = state
        .store
        .find_or_create_user(NewUser {
            name: None,
            email: "noname@example.com".to_string(),
            image: None,
            oauth_id: "oauth-noname".to_string(),
            provider: Provider::Google,
        })
        .await
        .unwrap();
    let token = state.sessions.issue(&user).unwrap();

    let app = router(state);
    let mut request = json_request("POST", "/api/playlists", json!({ "name": "  " }));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Playlist name is required");
}

#[tokio::test]
async fn test_session_tokens_round_trip() {
    let state = create_test_state().await;
    let user = state
        .store
        .find_or_create_user(NewUser {
            name: Some("Round Trip".to_string()),
            email: "session@example.com".to_string(),
            image: Some("https://avatar.example/rt.png".to_string()),
            oauth_id: "oauth-rt".to_string(),
            provider: Provider::Google,
        })
        .await
        .unwrap();

    let token = state.sessions.issue(&user).unwrap();
    let session = state.sessions.verify(&token).unwrap();

    assert_eq!(session.id, user.id);
    assert_eq!(session.email, "session@example.com");
    assert_eq!(session.name.as_deref(), Some("Round Trip"));

    assert!(state.sessions.verify("garbage").is_err());
}
