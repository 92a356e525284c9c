//! Types used by the item store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier.
pub type ItemId = i64;

/// Reading-list lifecycle state, stored as a string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Todo,
    Next,
    Done,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Todo => "todo",
            ItemStatus::Next => "next",
            ItemStatus::Done => "done",
        }
    }

    /// Unknown strings map to `Todo` so a hand-edited row never hides an item.
    pub fn from_str(s: &str) -> Self {
        match s {
            "next" => ItemStatus::Next,
            "done" => ItemStatus::Done,
            _ => ItemStatus::Todo,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a save request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    #[default]
    Extension,
    IosShortcut,
}

impl ItemSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemSource::Extension => "extension",
            ItemSource::IosShortcut => "ios_shortcut",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ios_shortcut" => ItemSource::IosShortcut,
            _ => ItemSource::Extension,
        }
    }
}

/// Fields for a new item. `canonical_url` and `hash` come from canonicalization.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub canonical_url: String,
    pub hash: String,
    pub tags: Vec<String>,
    pub source: ItemSource,
}

/// Summary view used by the CLI `list` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    pub canonical_url: String,
    pub status: ItemStatus,
    pub tags: Vec<String>,
}

/// Full item record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub id: ItemId,
    pub title: String,
    pub canonical_url: String,
    pub hash: String,
    pub tags: Vec<String>,
    pub source: ItemSource,
    pub status: ItemStatus,
    pub created_at: i64,
    pub updated_at: i64,
    /// Unix seconds when the item was last marked done; cleared when it leaves `Done`.
    pub done_at: Option<i64>,
}
