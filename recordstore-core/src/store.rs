//! The record store: one connection pool, three query patterns.

use futures::TryStreamExt;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::record::{Album, NewAlbum};

/// Owns the MySQL connection pool and exposes the three data-access
/// operations. Construct once at startup, release with [`RecordStore::close`]
/// on shutdown.
pub struct RecordStore {
    pool: MySqlPool,
}

impl RecordStore {
    /// Open the pool and verify it with a liveness round-trip.
    ///
    /// A failure to open the pool is a [`StoreError::Connect`]; a pool that
    /// opens but fails the round-trip is a [`StoreError::Ping`].
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(&config.connect_url())
            .await
            .map_err(|source| StoreError::Connect { source })?;

        let store = Self { pool };
        store.ping().await?;
        info!("connected to {}", config.redacted_url());
        Ok(store)
    }

    /// Wrap an already-open pool. Used by tests that provision their own
    /// database.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Lightweight round-trip verifying the connection is usable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| StoreError::Ping { source })?;
        Ok(())
    }

    /// Albums whose artist matches `artist` exactly.
    ///
    /// Zero matches is an empty `Vec`, not an error.
    pub async fn list_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        let mut rows = sqlx::query_as::<_, Album>(
            "SELECT id, title, artist, price FROM album WHERE artist = ?",
        )
        .bind(artist)
        .fetch(&self.pool);

        // Stream row by row: a transport or decode failure can surface after
        // rows were already yielded, and it fails the whole query rather
        // than returning a partial result.
        let mut albums = Vec::new();
        while let Some(album) = rows
            .try_next()
            .await
            .map_err(|source| StoreError::query("list_by_artist", format!("{artist:?}"), source))?
        {
            albums.push(album);
        }

        debug!(artist, count = albums.len(), "list_by_artist");
        Ok(albums)
    }

    /// The album with the given id.
    ///
    /// Zero rows is a distinguished [`StoreError::NotFound`], never folded
    /// into a generic query error.
    pub async fn get_by_id(&self, id: i64) -> Result<Album> {
        let album = sqlx::query_as::<_, Album>(
            "SELECT id, title, artist, price FROM album WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|source| StoreError::query("get_by_id", id.to_string(), source))?;

        debug!(id, found = album.is_some(), "get_by_id");
        album.ok_or(StoreError::NotFound { id })
    }

    /// Insert an album and return its store-assigned id.
    pub async fn insert(&self, album: &NewAlbum) -> Result<i64> {
        let result = sqlx::query("INSERT INTO album (title, artist, price) VALUES (?, ?, ?)")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await
            .map_err(|source| {
                StoreError::insert(
                    format!("{:?} by {:?}", album.title, album.artist),
                    Some(source),
                )
            })?;

        // MySQL reports 0 when no AUTO_INCREMENT value was generated.
        let id = result.last_insert_id();
        if id == 0 {
            return Err(StoreError::insert("no generated id returned", None));
        }
        let id = i64::try_from(id)
            .map_err(|_| StoreError::insert(format!("generated id {id} out of range"), None))?;

        debug!(id, "insert");
        Ok(id)
    }

    /// Close the pool, waiting for in-flight connections to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
