//! URL canonicalization for deduplication.
//!
//! Normalizes a user-supplied URL into a stable canonical string and derives
//! a SHA-256 content hash from it. Two URLs that differ only in tracking
//! parameters, scheme/host case, or a single trailing path slash map to the
//! same canonical string and hash.

mod error;
mod path;
mod policy;
mod query;

pub use error::CanonicalizeError;
pub use path::strip_trailing_slash;
pub use policy::{FragmentPolicy, TrackingPolicy, TRACKING_PARAMS, TRACKING_PREFIXES};
pub use query::filter_query;

use serde::Serialize;
use url::Url;

use crate::checksum;

/// Canonical form of a URL plus its content hash (64 lowercase hex chars).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Canonical {
    pub canonical: String,
    pub hash: String,
}

/// Canonicalizes `raw` with the built-in tracking policy.
///
/// # Examples
///
/// - `canonicalize("HTTPS://EXAMPLE.COM/Path/?utm_source=x&page=1")` → `"https://example.com/Path?page=1"`
/// - `canonicalize("https://example.com/")` → `"https://example.com/"` (root slash kept)
pub fn canonicalize(raw: &str) -> Result<Canonical, CanonicalizeError> {
    canonicalize_with(raw, TrackingPolicy::builtin())
}

/// Canonicalizes `raw` with an explicit policy.
///
/// Steps: parse, lower-case scheme and host, drop tracking query pairs,
/// strip one trailing path slash (never the root), apply the fragment
/// policy, then hash the serialized URL.
pub fn canonicalize_with(
    raw: &str,
    policy: &TrackingPolicy,
) -> Result<Canonical, CanonicalizeError> {
    let mut url = Url::parse(raw).map_err(|e| CanonicalizeError::invalid(raw, e.to_string()))?;

    // The parser already lower-cases the scheme, and the host of special
    // schemes; opaque hosts keep their case and are lowered here.
    let host = match url.host_str() {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => return Err(CanonicalizeError::invalid(raw, "missing host")),
    };
    let lowered = host.to_ascii_lowercase();
    if lowered != host {
        url.set_host(Some(lowered.as_str()))
            .map_err(|e| CanonicalizeError::invalid(raw, e.to_string()))?;
    }

    let filtered = url.query().and_then(|q| filter_query(q, policy));
    url.set_query(filtered.as_deref());

    let trimmed = strip_trailing_slash(url.path()).map(str::to_string);
    if let Some(p) = trimmed {
        url.set_path(&p);
    }

    if policy.fragment() == FragmentPolicy::Strip {
        url.set_fragment(None);
    }

    let canonical = String::from(url);
    let hash = checksum::sha256_hex(canonical.as_bytes());
    tracing::trace!(raw, canonical = %canonical, "canonicalized url");
    Ok(Canonical { canonical, hash })
}
