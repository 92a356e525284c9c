//! Reading-list operations: save with dedup, check, lifecycle, tags.
//!
//! Every URL that reaches the store goes through canonicalization first, so
//! lookups by canonical URL or content hash see through tracking noise.

use std::collections::BTreeSet;

use crate::canonical::{canonicalize_with, Canonical, CanonicalizeError, TrackingPolicy};
use crate::store::{
    is_unique_violation, ItemDb, ItemDetails, ItemId, ItemSource, ItemStatus, ItemSummary, NewItem,
};

/// Errors surfaced by reading-list operations.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error(transparent)]
    InvalidUrl(#[from] CanonicalizeError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("no item with id {0}")]
    NotFound(ItemId),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// A page to add to the reading list.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub source: ItemSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created { id: ItemId, canonical: Canonical },
    /// An item with the same content hash already exists; nothing was written.
    Duplicate { existing_id: ItemId, canonical: Canonical },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Exists(ItemDetails),
    Missing { canonical: Canonical },
}

/// Unique tags, trimmed and lower-cased, empties dropped, sorted ascending.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Item store plus the canonicalization policy applied to incoming URLs.
#[derive(Clone)]
pub struct Library {
    db: ItemDb,
    policy: TrackingPolicy,
}

impl Library {
    pub fn new(db: ItemDb, policy: TrackingPolicy) -> Self {
        Self { db, policy }
    }

    pub fn db(&self) -> &ItemDb {
        &self.db
    }

    /// Canonicalize `raw` with this library's policy.
    pub fn canonicalize(&self, raw: &str) -> Result<Canonical, CanonicalizeError> {
        canonicalize_with(raw, &self.policy)
    }

    /// Save a page unless an item with the same content hash exists.
    ///
    /// Tags are stored trimmed with empty entries dropped; their case is kept.
    pub async fn save(&self, req: &SaveRequest) -> Result<SaveOutcome, LibraryError> {
        if req.url.trim().is_empty() {
            return Err(LibraryError::MissingField("url"));
        }
        if req.title.trim().is_empty() {
            return Err(LibraryError::MissingField("title"));
        }

        let canonical = self.canonicalize(&req.url)?;

        if let Some(existing) = self.db.find_by_hash(&canonical.hash).await? {
            tracing::info!(
                existing_id = existing.id,
                canonical = %canonical.canonical,
                "duplicate save skipped"
            );
            return Ok(SaveOutcome::Duplicate {
                existing_id: existing.id,
                canonical,
            });
        }

        let tags = req
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let item = NewItem {
            title: req.title.trim().to_string(),
            canonical_url: canonical.canonical.clone(),
            hash: canonical.hash.clone(),
            tags,
            source: req.source,
        };
        let id = match self.db.add_item(&item).await {
            Ok(id) => id,
            // Another writer stored this canonical URL after the hash lookup.
            Err(err) if is_unique_violation(&err) => {
                let existing = self
                    .db
                    .find_by_canonical_url(&canonical.canonical)
                    .await?
                    .ok_or(LibraryError::Store(err))?;
                tracing::info!(
                    existing_id = existing.id,
                    canonical = %canonical.canonical,
                    "duplicate save raced with another writer"
                );
                return Ok(SaveOutcome::Duplicate {
                    existing_id: existing.id,
                    canonical,
                });
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(id, canonical = %canonical.canonical, source = req.source.as_str(), "saved item");
        Ok(SaveOutcome::Created { id, canonical })
    }

    /// Look up an existing item for `url` by its canonical form.
    pub async fn check(&self, url: &str) -> Result<CheckOutcome, LibraryError> {
        if url.trim().is_empty() {
            return Err(LibraryError::MissingField("url"));
        }
        let canonical = self.canonicalize(url)?;
        match self.db.find_by_canonical_url(&canonical.canonical).await? {
            Some(item) => Ok(CheckOutcome::Exists(item)),
            None => Ok(CheckOutcome::Missing { canonical }),
        }
    }

    /// Move an item to `status` and return its updated record.
    pub async fn mark(&self, id: ItemId, status: ItemStatus) -> Result<ItemDetails, LibraryError> {
        if !self.db.set_status(id, status).await? {
            return Err(LibraryError::NotFound(id));
        }
        tracing::info!(id, status = status.as_str(), "item status updated");
        self.db
            .get_item(id)
            .await?
            .ok_or(LibraryError::NotFound(id))
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), LibraryError> {
        if !self.db.remove_item(id).await? {
            return Err(LibraryError::NotFound(id));
        }
        tracing::info!(id, "item deleted");
        Ok(())
    }

    /// All distinct tags in use (see [`normalize_tags`]).
    pub async fn tags(&self) -> Result<Vec<String>, LibraryError> {
        let raw = self.db.all_tags().await?;
        let tags = normalize_tags(raw);
        tracing::debug!(count = tags.len(), "collected tags");
        Ok(tags)
    }

    pub async fn list(&self, status: Option<ItemStatus>) -> Result<Vec<ItemSummary>, LibraryError> {
        Ok(self.db.list_items(status).await?)
    }
}
