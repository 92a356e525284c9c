//! `readlist canonicalize <url>` – print canonical URL and content hash.

use anyhow::Result;
use readlist_core::canonical::{canonicalize_with, TrackingPolicy};

pub fn run_canonicalize(policy: &TrackingPolicy, url: &str) -> Result<()> {
    let c = canonicalize_with(url, policy)?;
    println!("{}", c.canonical);
    println!("{}", c.hash);
    Ok(())
}
