//! Search query builder for dictionary lookups.
//!
//! This module provides a fluent API for constructing dictionary searches,
//! replacing error-prone hand-built query strings with checked methods.
//!
//! # Example
//!
//! ```
//! use ikit::SearchQuery;
//!
//! // Exact-phrase search for sentences of at least 12 characters
//! let query = SearchQuery::new("猫").min_length(12).exact(true);
//! ```

/// Default minimum sentence length for searches.
const DEFAULT_MIN_LENGTH: u32 = 12;

/// The sort order requested from the API. Shortest sentences first keeps
/// results card-sized.
const SORT: &str = "shortness";

/// A dictionary search to run against the API.
///
/// Searches always request shortest-first ordering. An exact search wraps
/// the keyword in Japanese corner brackets (`「…」`), which the API treats
/// as an exact-phrase match.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    keyword: String,
    min_length: u32,
    exact: bool,
}

impl SearchQuery {
    /// Create a query for a keyword with default settings.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            min_length: DEFAULT_MIN_LENGTH,
            exact: false,
        }
    }

    /// Set the minimum sentence length, in characters.
    ///
    /// Defaults to 12.
    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    /// Request exact-phrase matching.
    ///
    /// # Example
    ///
    /// ```
    /// use ikit::SearchQuery;
    ///
    /// let query = SearchQuery::new("猫").exact(true);
    /// ```
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// The keyword as sent to the API, quoted when exact.
    fn keyword_param(&self) -> String {
        if self.exact {
            format!("「{}」", self.keyword)
        } else {
            self.keyword.clone()
        }
    }

    /// The query parameters for the search request.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", self.keyword_param()),
            ("sort", SORT.to_string()),
            ("min_length", self.min_length.to_string()),
        ]
    }
}
