//! `readlist mark <id> <todo|next|done>` – change an item's state.

use anyhow::Result;
use readlist_core::library::Library;
use readlist_core::store::ItemStatus;

pub async fn run_mark(lib: &Library, id: i64, status: ItemStatus) -> Result<()> {
    let item = lib.mark(id, status).await?;
    match item.done_at {
        Some(ts) => println!("Item {id} marked {} (done at {ts})", item.status),
        None => println!("Item {id} marked {}", item.status),
    }
    Ok(())
}
