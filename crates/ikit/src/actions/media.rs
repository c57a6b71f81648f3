//! Media download actions.
//!
//! Every example has a deterministic audio and image download URL derived
//! from its identifier. The URLs are plain GETs; a non-success status means
//! the example has no media of that kind.

use crate::client::ImmersionKitClient;
use crate::error::Result;

/// Provides access to media download operations.
///
/// Obtained via [`ImmersionKitClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a ImmersionKitClient,
}

impl<'a> MediaActions<'a> {
    /// The audio download URL for an example.
    pub fn audio_url(&self, id: &str) -> String {
        format!(
            "{}/download_sentence_audio?id={}",
            self.client.base_url(),
            id
        )
    }

    /// The image download URL for an example.
    pub fn image_url(&self, id: &str) -> String {
        format!(
            "{}/download_sentence_image?id={}",
            self.client.base_url(),
            id
        )
    }

    /// Download a media resource.
    ///
    /// Returns `None` for any non-success status, since missing media is an
    /// expected outcome rather than a failure. The response body has not
    /// been read yet; stream it with [`reqwest::Response::chunk`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ikit::ImmersionKitClient;
    /// # async fn example() -> ikit::Result<()> {
    /// let client = ImmersionKitClient::new();
    /// let url = client.media().audio_url("some_example_id");
    /// if let Some(response) = client.media().download(&url).await? {
    ///     let bytes = response.bytes().await?;
    ///     println!("downloaded {} bytes", bytes.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download(&self, url: &str) -> Result<Option<reqwest::Response>> {
        let response = self.client.get(url).await?;
        if response.status().is_success() {
            Ok(Some(response))
        } else {
            Ok(None)
        }
    }
}
