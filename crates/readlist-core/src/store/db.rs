//! SQLite-backed item database.
//!
//! Handles connection, migrations, and timestamp helpers. Item CRUD lives in `items`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed item database.
///
/// The default database file is stored under the XDG state directory:
/// `~/.local/state/readlist/items.db`.
#[derive(Clone)]
pub struct ItemDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl ItemDb {
    /// Open (or create) the default item database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("readlist")?;
        let db_path = xdg_dirs.place_state_file("items.db")?;
        Self::open_at(db_path).await
    }

    /// Open the configured database, or the default one when `path` is None.
    pub async fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::open_at(p).await,
            None => Self::open_default().await,
        }
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&uri)
            .await?;
        let db = ItemDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "opened item database");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // - `canonical_url` is unique: one row per canonical page.
        // - `hash` is the SHA-256 of `canonical_url`, indexed for dedup lookups.
        // - `tags_json` holds the tag list as a JSON array.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                canonical_url TEXT NOT NULL,
                hash TEXT NOT NULL,
                tags_json TEXT NOT NULL DEFAULT '[]',
                source TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                done_at INTEGER
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS items_canonical_url ON items (canonical_url)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS items_hash ON items (hash)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// True if `err` is SQLite rejecting a write on a UNIQUE index
/// (e.g. a second row with the same `canonical_url`).
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
        _ => false,
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<ItemDb> {
    // Single connection so the pool never hands back a different empty DB.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = ItemDb { pool };
    db.migrate().await?;
    Ok(db)
}
