//! Query-string filtering.

use url::form_urlencoded;

use super::policy::TrackingPolicy;

/// Drops `key=value` pairs whose decoded key the policy marks as tracking and
/// re-serializes the rest as `application/x-www-form-urlencoded`.
///
/// Surviving pairs keep their relative order. Serialization makes equivalent
/// spellings converge: `rust+lang`, `rust%20lang` and a raw space all come
/// out as `rust+lang`, and a bare `flag` becomes `flag=`. Empty pairs
/// (`a=1&&b=2`) are dropped. Returns `None` when nothing survives, so the
/// caller can remove the `?` entirely.
pub fn filter_query(query: &str, policy: &TrackingPolicy) -> Option<String> {
    let mut kept = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !policy.is_tracking(key))
        .peekable();
    kept.peek()?;

    let serialized = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(kept)
        .finish();
    Some(serialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(q: &str) -> Option<String> {
        filter_query(q, TrackingPolicy::builtin())
    }

    #[test]
    fn all_tracking() {
        assert_eq!(filter("utm_source=google&utm_medium=cpc&gclid=1"), None);
    }

    #[test]
    fn keeps_order_and_reserializes() {
        assert_eq!(
            filter("b=2&utm_source=x&a=hello%20world&c=x+y").as_deref(),
            Some("b=2&a=hello+world&c=x+y")
        );
    }

    #[test]
    fn space_spellings_converge() {
        let plus = filter("q=rust+lang");
        assert_eq!(plus.as_deref(), Some("q=rust+lang"));
        assert_eq!(filter("q=rust%20lang"), plus);
        assert_eq!(filter("q=rust lang"), plus);
    }

    #[test]
    fn reserialized_output_is_stable() {
        let once = filter("path=%2Fa%2Fb&name=caf%C3%A9&sym=a%26b").unwrap();
        assert_eq!(once, "path=%2Fa%2Fb&name=caf%C3%A9&sym=a%26b");
        assert_eq!(filter(&once).as_deref(), Some(once.as_str()));
    }

    #[test]
    fn encoded_key_is_matched_decoded() {
        assert_eq!(filter("utm%5Fsource=x&page=1").as_deref(), Some("page=1"));
    }

    #[test]
    fn bare_keys_and_empty_pairs() {
        assert_eq!(filter("flag&&ref&x=").as_deref(), Some("flag=&x="));
        assert_eq!(filter("flag&x=1").as_deref(), Some("flag=&x=1"));
        assert_eq!(filter(""), None);
    }
}
