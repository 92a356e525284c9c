//! `readlist check <url>` – report whether an equivalent URL is saved.

use anyhow::Result;
use readlist_core::library::{CheckOutcome, Library};

pub async fn run_check(lib: &Library, url: &str) -> Result<()> {
    match lib.check(url).await? {
        CheckOutcome::Exists(item) => {
            println!("Saved as item {} [{}]: {}", item.id, item.status, item.title);
            if !item.tags.is_empty() {
                println!("Tags: {}", item.tags.join(", "));
            }
        }
        CheckOutcome::Missing { canonical } => {
            println!("Not saved: {}", canonical.canonical);
        }
    }
    Ok(())
}
