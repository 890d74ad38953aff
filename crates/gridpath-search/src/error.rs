use gridpath_core::Point;
use thiserror::Error;

/// Convenient result alias for the search engine.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised before a search starts.
///
/// An unreachable goal is not an error: it is reported as a
/// [`SearchResult`](crate::SearchResult) with `found == false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Options were rejected, or an integer or string code named no known variant.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The start or goal cell lies outside the map bounds.
    #[error("endpoint {point} is outside the map")]
    EndpointOffGrid { point: Point },
}

impl SearchError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
