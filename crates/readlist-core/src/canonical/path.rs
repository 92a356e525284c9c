//! Path normalization.

/// Returns the path with exactly one trailing `/` removed, or `None` when
/// nothing changes. The root path `/` is left alone, and only the final
/// slash is removed (`/a//` becomes `/a/`).
pub fn strip_trailing_slash(path: &str) -> Option<&str> {
    if path.len() > 1 {
        path.strip_suffix('/')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slash_removed() {
        assert_eq!(strip_trailing_slash("/path/"), Some("/path"));
        assert_eq!(strip_trailing_slash("/a/b/"), Some("/a/b"));
    }

    #[test]
    fn root_and_bare_paths_untouched() {
        assert_eq!(strip_trailing_slash("/"), None);
        assert_eq!(strip_trailing_slash(""), None);
        assert_eq!(strip_trailing_slash("/path"), None);
    }

    #[test]
    fn not_iterative() {
        assert_eq!(strip_trailing_slash("/a//"), Some("/a/"));
        assert_eq!(strip_trailing_slash("//"), Some("/"));
    }
}
