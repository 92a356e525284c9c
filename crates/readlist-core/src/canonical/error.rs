//! Error type for URL canonicalization.

/// Raised when an input string cannot be turned into a canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonicalizeError {
    /// Unparseable input, or a URL without a host. Carries the raw input for diagnostics.
    #[error("invalid URL: {raw} ({reason})")]
    InvalidUrl { raw: String, reason: String },
}

impl CanonicalizeError {
    pub(crate) fn invalid(raw: &str, reason: impl Into<String>) -> Self {
        CanonicalizeError::InvalidUrl {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    /// The raw input that failed to canonicalize.
    pub fn raw(&self) -> &str {
        match self {
            CanonicalizeError::InvalidUrl { raw, .. } => raw,
        }
    }
}
