//! Item write operations: add, status, remove.

use anyhow::Result;

use super::super::db::{unix_timestamp, ItemDb};
use super::super::types::{ItemId, ItemStatus, NewItem};

impl ItemDb {
    /// Insert a new item in the `todo` state.
    ///
    /// Fails if another item already has the same canonical URL.
    pub async fn add_item(&self, item: &NewItem) -> Result<ItemId> {
        let now = unix_timestamp();
        let tags_json = serde_json::to_string(&item.tags)?;

        let row_id = sqlx::query(
            r#"
            INSERT INTO items (
                title, canonical_url, hash, tags_json, source,
                status, created_at, updated_at, done_at
            ) VALUES (?1, ?2, ?3, ?4, ?5,
                      ?6, ?7, ?8, NULL)
            "#,
        )
        .bind(&item.title)
        .bind(&item.canonical_url)
        .bind(&item.hash)
        .bind(tags_json)
        .bind(item.source.as_str())
        .bind(ItemStatus::Todo.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// Update the status of an item. Entering `done` stamps `done_at`; any other
    /// status clears it. Returns false if no item has this id.
    pub async fn set_status(&self, id: ItemId, status: ItemStatus) -> Result<bool> {
        let now = unix_timestamp();
        let done_at = (status == ItemStatus::Done).then_some(now);
        let affected = sqlx::query(
            r#"
            UPDATE items
            SET status = ?1,
                done_at = ?2,
                updated_at = ?3
            WHERE id = ?4
            "#,
        )
        .bind(status.as_str())
        .bind(done_at)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    /// Permanently remove an item. Returns false if no item has this id.
    pub async fn remove_item(&self, id: ItemId) -> Result<bool> {
        let affected = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }
}
