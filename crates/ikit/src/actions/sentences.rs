//! Sentence context actions.

use crate::client::ImmersionKitClient;
use crate::error::Result;
use crate::types::ContextResponse;

/// Provides access to sentence context operations.
///
/// Obtained via [`ImmersionKitClient::sentences()`].
#[derive(Debug)]
pub struct SentenceActions<'a> {
    pub(crate) client: &'a ImmersionKitClient,
}

impl<'a> SentenceActions<'a> {
    /// Fetch the sentences surrounding an example in its source media.
    ///
    /// The `id` is the opaque example identifier from a dictionary search.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ikit::ImmersionKitClient;
    /// # async fn example() -> ikit::Result<()> {
    /// let client = ImmersionKitClient::new();
    /// let context = client.sentences().with_context("some_example_id").await?;
    /// if let Some(prev) = context.previous() {
    ///     println!("previous: {}", prev.sentence);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn with_context(&self, id: &str) -> Result<ContextResponse> {
        self.client
            .get_json("sentence_with_context", &[("id", id.to_string())])
            .await
    }
}
