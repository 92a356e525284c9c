//! `readlist tags` – list distinct tags.

use anyhow::Result;
use readlist_core::library::Library;

pub async fn run_tags(lib: &Library) -> Result<()> {
    let tags = lib.tags().await?;
    for t in &tags {
        println!("{t}");
    }
    tracing::debug!(count = tags.len(), "printed tags");
    Ok(())
}
