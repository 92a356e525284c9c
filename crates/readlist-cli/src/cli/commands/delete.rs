//! `readlist delete <id>` – remove an item.

use anyhow::Result;
use readlist_core::library::Library;

pub async fn run_delete(lib: &Library, id: i64) -> Result<()> {
    lib.delete(id).await?;
    println!("Deleted item {id}");
    Ok(())
}
