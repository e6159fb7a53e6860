use moodify::error::Error;
use moodify::store::PlaylistStore;
use moodify::types::{NewUser, Provider};

// Helper function to create sign-in data for a test user
fn create_test_user(email: &str) -> NewUser {
    NewUser {
        name: Some("Test User".to_string()),
        email: email.to_string(),
        image: Some("https://avatar.example/test.png".to_string()),
        oauth_id: format!("oauth-{}", email),
        provider: Provider::Google,
    }
}

#[tokio::test]
async fn test_find_or_create_user_reuses_the_row_by_email() {
    let store = PlaylistStore::in_memory().await.unwrap();

    let first = store
        .find_or_create_user(create_test_user("user@example.com"))
        .await
        .unwrap();
    let second = store
        .find_or_create_user(create_test_user("user@example.com"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.email, "user@example.com");

    let other = store
        .find_or_create_user(create_test_user("other@example.com"))
        .await
        .unwrap();
    assert_ne!(first.id, other.id);
}

#[tokio::test]
async fn test_user_lookups() {
    let store = PlaylistStore::in_memory().await.unwrap();
    let user = store
        .find_or_create_user(create_test_user("lookup@example.com"))
        .await
        .unwrap();

    let by_id = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "lookup@example.com");
    assert_eq!(by_id.provider, "google");

    assert!(store.get_user(9999).await.unwrap().is_none());
    assert!(
        store
            .find_user_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_create_playlist_is_idempotent_by_name_and_user() {
    let store = PlaylistStore::in_memory().await.unwrap();
    let user = store
        .find_or_create_user(create_test_user("chill@example.com"))
        .await
        .unwrap();

    let first = store.create_playlist("Chill", user.id).await.unwrap();
    let second = store.create_playlist("Chill", user.id).await.unwrap();

    // The duplicate request returns the existing record, no new row
    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Chill");
    assert_eq!(second.user_id, user.id);

    let playlists = store.list_saved_playlists(user.id).await.unwrap();
    assert_eq!(playlists.len(), 1);
}

#[tokio::test]
async fn test_same_playlist_name_for_different_users() {
    let store = PlaylistStore::in_memory().await.unwrap();
    let alice = store
        .find_or_create_user(create_test_user("alice@example.com"))
        .await
        .unwrap();
    let bob = store
        .find_or_create_user(create_test_user("bob@example.com"))
        .await
        .unwrap();

    let for_alice = store.create_playlist("Workout", alice.id).await.unwrap();
    let for_bob = store.create_playlist("Workout", bob.id).await.unwrap();

    assert_ne!(for_alice.id, for_bob.id);
    assert_eq!(store.list_saved_playlists(alice.id).await.unwrap().len(), 1);
    assert_eq!(store.list_saved_playlists(bob.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_playlist_rejects_empty_names() {
    let store = PlaylistStore::in_memory().await.unwrap();
    let user = store
        .find_or_create_user(create_test_user("empty@example.com"))
        .await
        .unwrap();

    for name in ["", "   ", "\t"] {
        let err = store.create_playlist(name, user.id).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    assert!(store.list_saved_playlists(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_saved_playlists_includes_songs() {
    let store = PlaylistStore::in_memory().await.unwrap();
    let user = store
        .find_or_create_user(create_test_user("songs@example.com"))
        .await
        .unwrap();

    let playlist = store.create_playlist("Evening", user.id).await.unwrap();
    assert!(playlist.songs.is_empty());

    sqlx::query("INSERT INTO playlist_songs (name, artist, url, playlist_id) VALUES (?, ?, ?, ?)")
        .bind("Saved Song")
        .bind("Saved Artist")
        .bind("https://songs.example/saved")
        .bind(playlist.id)
        .execute(store.pool())
        .await
        .unwrap();

    let playlists = store.list_saved_playlists(user.id).await.unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].songs.len(), 1);
    assert_eq!(playlists[0].songs[0].name, "Saved Song");
    assert_eq!(playlists[0].songs[0].artist, "Saved Artist");
    assert_eq!(playlists[0].songs[0].playlist_id, playlist.id);
}
