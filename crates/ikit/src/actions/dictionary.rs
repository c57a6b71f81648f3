//! Dictionary search actions.
//!
//! # Example
//!
//! ```no_run
//! use ikit::{ImmersionKitClient, SearchQuery};
//!
//! # async fn example() -> ikit::Result<()> {
//! let client = ImmersionKitClient::new();
//!
//! let query = SearchQuery::new("食べる").min_length(12);
//! let response = client.dictionary().look_up(&query).await?;
//!
//! for group in &response.data {
//!     println!("{} examples", group.examples.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::ImmersionKitClient;
use crate::error::Result;
use crate::query::SearchQuery;
use crate::types::DictionaryResponse;

/// Provides access to dictionary search operations.
///
/// Obtained via [`ImmersionKitClient::dictionary()`].
#[derive(Debug)]
pub struct DictionaryActions<'a> {
    pub(crate) client: &'a ImmersionKitClient,
}

impl<'a> DictionaryActions<'a> {
    /// Search the example corpus for a keyword.
    ///
    /// Returns the raw result groups; an empty `data` list means the
    /// keyword matched nothing.
    pub async fn look_up(&self, query: &SearchQuery) -> Result<DictionaryResponse> {
        self.client
            .get_json("look_up_dictionary", &query.params())
            .await
    }
}
