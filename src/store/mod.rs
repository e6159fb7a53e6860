//! Playlist persistence gateway.
//!
//! Create-or-reuse playlist records scoped to an owning user, plus the
//! first-sign-in user bookkeeping. All rows are mapped by hand from plain
//! queries; migrations are embedded and run at connect time.

use std::str::FromStr;

use chrono::Utc;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};

use crate::{
    error::{Error, Result},
    types::{NewUser, SavedPlaylist, SavedSong, User},
};

pub struct PlaylistStore {
    pool: SqlitePool,
}

impl PlaylistStore {
    /// Opens the store at `database_url`, creating the database file and
    /// running migrations when needed.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(PlaylistStore { pool })
    }

    /// In-memory store for tests. Pinned to a single connection: every
    /// pooled connection to `:memory:` would otherwise see its own empty
    /// database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(PlaylistStore { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        const MIGRATIONS: &[&str] = &[
            include_str!("../../migrations/20250601000001_create_users.sql"),
            include_str!("../../migrations/20250601000002_create_playlists.sql"),
            include_str!("../../migrations/20250601000003_create_playlist_songs.sql"),
        ];

        for migration in MIGRATIONS {
            sqlx::query(migration).execute(pool).await?;
        }
        Ok(())
    }

    // ---- Users ----

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, image, oauth_id, provider FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::user_from_row(&row)))
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, image, oauth_id, provider FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::user_from_row(&row)))
    }

    /// First-sign-in semantics: an account already registered under the
    /// email is reused as-is, otherwise a new row is created.
    pub async fn find_or_create_user(&self, new_user: NewUser) -> Result<User> {
        if let Some(existing) = self.find_user_by_email(&new_user.email).await? {
            return Ok(existing);
        }

        let result = sqlx::query(
            "INSERT INTO users (name, email, image, oauth_id, provider, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.image)
        .bind(&new_user.oauth_id)
        .bind(new_user.provider.as_str())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_user(id)
            .await?
            .ok_or(Error::Storage(sqlx::Error::RowNotFound))
    }

    // ---- Playlists ----

    /// Create-or-reuse by `(name, user_id)`: an existing row is returned
    /// unchanged, a duplicate request is not an error.
    pub async fn create_playlist(&self, name: &str, user_id: i64) -> Result<SavedPlaylist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Playlist name is required".to_string()));
        }

        if let Some(existing) = self.find_playlist(name, user_id).await? {
            return Ok(existing);
        }

        let inserted = sqlx::query("INSERT INTO playlists (name, user_id, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(user_id)
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => {}
            // Lost a create race: the winner's row is the result.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {}
            Err(e) => return Err(e.into()),
        }

        self.find_playlist(name, user_id)
            .await?
            .ok_or(Error::Storage(sqlx::Error::RowNotFound))
    }

    /// All playlists owned by the user, each with its songs, in
    /// storage-default order.
    pub async fn list_saved_playlists(&self, user_id: i64) -> Result<Vec<SavedPlaylist>> {
        let rows = sqlx::query("SELECT id, name, user_id FROM playlists WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        let mut playlists = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");
            playlists.push(SavedPlaylist {
                id,
                name: row.get("name"),
                user_id: row.get("user_id"),
                songs: self.playlist_songs(id).await?,
            });
        }
        Ok(playlists)
    }

    async fn find_playlist(&self, name: &str, user_id: i64) -> Result<Option<SavedPlaylist>> {
        let row = sqlx::query("SELECT id, name, user_id FROM playlists WHERE name = ? AND user_id = ?")
            .bind(name)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row.get("id");
        Ok(Some(SavedPlaylist {
            id,
            name: row.get("name"),
            user_id: row.get("user_id"),
            songs: self.playlist_songs(id).await?,
        }))
    }

    async fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<SavedSong>> {
        let rows = sqlx::query(
            "SELECT id, name, artist, url, playlist_id FROM playlist_songs WHERE playlist_id = ?",
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| SavedSong {
                id: row.get("id"),
                name: row.get("name"),
                artist: row.get("artist"),
                url: row.get("url"),
                playlist_id: row.get("playlist_id"),
            })
            .collect())
    }

    fn user_from_row(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            image: row.get("image"),
            oauth_id: row.get("oauth_id"),
            provider: row.get("provider"),
        }
    }
}
