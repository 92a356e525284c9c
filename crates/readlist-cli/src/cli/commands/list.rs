//! `readlist list [--status <state>]` – show saved items.

use anyhow::Result;
use readlist_core::library::Library;
use readlist_core::store::ItemStatus;

pub async fn run_list(lib: &Library, status: Option<ItemStatus>) -> Result<()> {
    let items = lib.list(status).await?;
    if items.is_empty() {
        println!("No items.");
    } else {
        println!("{:<6} {:<6} {:<40} {}", "ID", "STATE", "TITLE", "URL");
        for i in items {
            println!(
                "{:<6} {:<6} {:<40} {}",
                i.id,
                i.status.as_str(),
                i.title,
                i.canonical_url
            );
        }
    }
    Ok(())
}
