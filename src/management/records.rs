use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::types::PlaylistRecord;

/// Durable log of generated playlists.
///
/// A record is only ever inserted with a link returned by a successful
/// publish; the `link` column is unique and a duplicate insert is a silent
/// no-op rather than an error.
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Opens (and creates, if missing) the record database and its schema.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS playlists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                link TEXT NOT NULL UNIQUE,
                created_date TEXT NOT NULL,
                rating INTEGER
            )",
        )
        .execute(&pool)
        .await?;

        Ok(RecordStore { pool })
    }

    /// Inserts a new record. Returns `Ok(None)` when the link is already
    /// recorded.
    pub async fn insert(
        &self,
        name: &str,
        link: &str,
        created: NaiveDate,
        rating: Option<i64>,
    ) -> Result<Option<PlaylistRecord>, sqlx::Error> {
        let result = sqlx::query_as::<_, PlaylistRecord>(
            "INSERT INTO playlists (name, link, created_date, rating)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, link, created_date, rating",
        )
        .bind(name)
        .bind(link)
        .bind(created)
        .bind(rating)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(Some(record)),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<PlaylistRecord>, sqlx::Error> {
        sqlx::query_as::<_, PlaylistRecord>(
            "SELECT id, name, link, created_date, rating FROM playlists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sets the rating of a record. Ratings outside `[0, 10]` and unknown
    /// ids both leave the store untouched and return `false`.
    pub async fn set_rating(&self, id: i64, rating: i64) -> Result<bool, sqlx::Error> {
        if !(0..=10).contains(&rating) {
            return Ok(false);
        }

        let result = sqlx::query("UPDATE playlists SET rating = ? WHERE id = ?")
            .bind(rating)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
