//! Item read operations: list, get, and dedup lookups.

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::ItemDb;
use super::super::types::{ItemDetails, ItemId, ItemSource, ItemStatus, ItemSummary};

const DETAIL_COLUMNS: &str = "id, title, canonical_url, hash, tags_json, source, status, \
                              created_at, updated_at, done_at";

fn parse_tags(tags_json: &str) -> Result<Vec<String>> {
    if tags_json.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(tags_json).with_context(|| format!("decode tags_json {tags_json:?}"))
}

fn details_from_row(row: &SqliteRow) -> Result<ItemDetails> {
    let tags_json: String = row.get("tags_json");
    let source: String = row.get("source");
    let status: String = row.get("status");
    Ok(ItemDetails {
        id: row.get("id"),
        title: row.get("title"),
        canonical_url: row.get("canonical_url"),
        hash: row.get("hash"),
        tags: parse_tags(&tags_json)?,
        source: ItemSource::from_str(&source),
        status: ItemStatus::from_str(&status),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        done_at: row.get("done_at"),
    })
}

impl ItemDb {
    /// List items newest first, optionally only those in `status`.
    pub async fn list_items(&self, status: Option<ItemStatus>) -> Result<Vec<ItemSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, canonical_url, status, tags_json
            FROM items
            WHERE ?1 IS NULL OR status = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(status.map(ItemStatus::as_str))
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let status_str: String = row.get("status");
            let tags_json: String = row.get("tags_json");
            out.push(ItemSummary {
                id: row.get("id"),
                title: row.get("title"),
                canonical_url: row.get("canonical_url"),
                status: ItemStatus::from_str(&status_str),
                tags: parse_tags(&tags_json)?,
            });
        }

        Ok(out)
    }

    /// Fetch a single item by id.
    pub async fn get_item(&self, id: ItemId) -> Result<Option<ItemDetails>> {
        let sql = format!("SELECT {DETAIL_COLUMNS} FROM items WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(details_from_row).transpose()
    }

    /// Find the item whose content hash equals `hash`.
    pub async fn find_by_hash(&self, hash: &str) -> Result<Option<ItemDetails>> {
        let sql = format!("SELECT {DETAIL_COLUMNS} FROM items WHERE hash = ?1 ORDER BY id LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(details_from_row).transpose()
    }

    /// Find the item stored under exactly this canonical URL.
    pub async fn find_by_canonical_url(&self, canonical_url: &str) -> Result<Option<ItemDetails>> {
        let sql = format!("SELECT {DETAIL_COLUMNS} FROM items WHERE canonical_url = ?1");
        let row = sqlx::query(&sql)
            .bind(canonical_url)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(details_from_row).transpose()
    }

    /// Every tag of every item, as stored (not deduplicated).
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT tags_json FROM items")
            .fetch_all(&self.pool)
            .await?;

        let mut out = Vec::new();
        for row in rows {
            let tags_json: String = row.get("tags_json");
            out.extend(parse_tags(&tags_json)?);
        }
        Ok(out)
    }
}
