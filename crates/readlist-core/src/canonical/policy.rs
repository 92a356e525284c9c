//! Tracking-parameter policy: which query keys are analytics noise.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Query keys removed on exact match.
pub const TRACKING_PARAMS: &[&str] = &[
    // Marketing attribution
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "utm_source_platform",
    "utm_creative_format",
    "utm_marketing_tactic",
    // Click identifiers
    "gclid",
    "fbclid",
    "yclid",
    "irclickid",
    // Mailing-list campaign ids
    "mc_cid",
    "mc_eid",
    // Misc attribution
    "spm",
    "gbraid",
    "wbraid",
    "vero_conv",
    "vero_id",
    "ref",
    "ref_src",
    "ref_url",
    // Video platform (playlist position, timestamps, share tracking)
    "list",
    "index",
    "t",
    "start",
    "end",
    "feature",
    "app",
    "si",
    "pp",
    "ab_channel",
    "source",
    "kw",
    // Search engine
    "gws_rd",
    "ei",
    "ved",
    "usg",
    "sa",
    "rlz",
    "biw",
    "bih",
];

/// Query key prefixes removed regardless of suffix.
pub const TRACKING_PREFIXES: &[&str] = &["utm_", "mc_", "vero_", "ref_"];

/// What happens to the `#fragment` of a URL during canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentPolicy {
    /// Fragment is kept and participates in the dedup key.
    #[default]
    Keep,
    /// Fragment is dropped before hashing.
    Strip,
}

/// Immutable removal sets consulted for every query key.
#[derive(Debug, Clone)]
pub struct TrackingPolicy {
    exact: HashSet<String>,
    prefixes: Vec<String>,
    fragment: FragmentPolicy,
}

impl Default for TrackingPolicy {
    fn default() -> Self {
        Self {
            exact: TRACKING_PARAMS.iter().map(|s| s.to_string()).collect(),
            prefixes: TRACKING_PREFIXES.iter().map(|s| s.to_string()).collect(),
            fragment: FragmentPolicy::default(),
        }
    }
}

impl TrackingPolicy {
    /// Shared instance of the built-in policy.
    pub fn builtin() -> &'static TrackingPolicy {
        static BUILTIN: OnceLock<TrackingPolicy> = OnceLock::new();
        BUILTIN.get_or_init(TrackingPolicy::default)
    }

    /// Adds exact-match keys. Empty names are ignored.
    pub fn with_extra_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exact.extend(
            params
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .filter(|p| !p.is_empty()),
        );
        self
    }

    /// Adds key prefixes. Empty prefixes are ignored since they would match every key.
    pub fn with_extra_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for p in prefixes {
            let p = p.as_ref().trim();
            if !p.is_empty() && !self.prefixes.iter().any(|existing| existing == p) {
                self.prefixes.push(p.to_string());
            }
        }
        self
    }

    pub fn with_fragment(mut self, fragment: FragmentPolicy) -> Self {
        self.fragment = fragment;
        self
    }

    pub fn fragment(&self) -> FragmentPolicy {
        self.fragment
    }

    /// True if a (decoded) query key is tracking noise. Matching is case-sensitive.
    pub fn is_tracking(&self, key: &str) -> bool {
        self.exact.contains(key) || self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_prefix_matches() {
        let p = TrackingPolicy::default();
        assert!(p.is_tracking("utm_source"));
        assert!(p.is_tracking("gclid"));
        assert!(p.is_tracking("t"));
        assert!(p.is_tracking("utm_anything_new"));
        assert!(p.is_tracking("mc_tc"));
        assert!(p.is_tracking("vero_xyz"));
        assert!(p.is_tracking("ref_campaign"));
    }

    #[test]
    fn ordinary_keys_survive() {
        let p = TrackingPolicy::default();
        assert!(!p.is_tracking("page"));
        assert!(!p.is_tracking("q"));
        assert!(!p.is_tracking("v"));
        assert!(!p.is_tracking("reference"));
        assert!(!p.is_tracking("UTM_SOURCE"));
    }

    #[test]
    fn extensions_add_to_builtin() {
        let p = TrackingPolicy::default()
            .with_extra_params(["igshid", ""])
            .with_extra_prefixes(["hsa_", "", "utm_"]);
        assert!(p.is_tracking("igshid"));
        assert!(p.is_tracking("hsa_cam"));
        assert!(!p.is_tracking(""));
        assert!(!p.is_tracking("page"));
        assert_eq!(p.prefixes.iter().filter(|x| *x == "utm_").count(), 1);
    }

    #[test]
    fn fragment_policy_toml_names() {
        #[derive(Deserialize)]
        struct Wrap {
            fragment: FragmentPolicy,
        }
        let w: Wrap = toml::from_str(r#"fragment = "strip""#).unwrap();
        assert_eq!(w.fragment, FragmentPolicy::Strip);
        assert_eq!(TrackingPolicy::builtin().fragment(), FragmentPolicy::Keep);
    }
}
