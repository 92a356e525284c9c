//! `readlist save <url> --title <title> [--tag <tag>]...` – add a page unless already saved.

use anyhow::Result;
use readlist_core::library::{Library, SaveOutcome, SaveRequest};
use readlist_core::store::ItemSource;

pub async fn run_save(
    lib: &Library,
    url: String,
    title: String,
    tags: Vec<String>,
    source: ItemSource,
) -> Result<()> {
    let req = SaveRequest {
        url,
        title,
        tags,
        source,
    };
    match lib.save(&req).await? {
        SaveOutcome::Created { id, canonical } => {
            println!("Saved item {id}: {}", canonical.canonical);
        }
        SaveOutcome::Duplicate {
            existing_id,
            canonical,
        } => {
            println!(
                "Already saved as item {existing_id}: {}",
                canonical.canonical
            );
        }
    }
    Ok(())
}
