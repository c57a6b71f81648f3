//! The ImmersionKit client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::actions::{DictionaryActions, MediaActions, SentenceActions};
use crate::error::{Error, Result};

/// Default URL for the ImmersionKit API.
const DEFAULT_URL: &str = "https://api.immersionkit.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with the ImmersionKit API.
///
/// # Example
///
/// ```no_run
/// use ikit::{ImmersionKitClient, SearchQuery};
///
/// # async fn example() -> ikit::Result<()> {
/// // Create a client with default settings
/// let client = ImmersionKitClient::new();
///
/// // Look up a keyword
/// let response = client.dictionary().look_up(&SearchQuery::new("猫")).await?;
/// println!("Found {} result groups", response.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImmersionKitClient {
    http_client: Client,
    base_url: String,
}

impl ImmersionKitClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `https://api.immersionkit.com` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access dictionary search operations.
    pub fn dictionary(&self) -> DictionaryActions<'_> {
        DictionaryActions { client: self }
    }

    /// Access sentence context operations.
    pub fn sentences(&self) -> SentenceActions<'_> {
        SentenceActions { client: self }
    }

    /// Access media download operations.
    pub fn media(&self) -> MediaActions<'_> {
        MediaActions { client: self }
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Issue a GET request against an API path and decode the JSON body.
    pub(crate) async fn get_json<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url(), path);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::Unreachable
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Issue a GET request against an absolute URL, returning the raw response.
    ///
    /// The status is not checked; callers decide how to treat non-success.
    pub(crate) async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.http_client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                Error::Unreachable
            } else {
                Error::Http(e)
            }
        })
    }
}

impl Default for ImmersionKitClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`ImmersionKitClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ikit::ImmersionKitClient;
///
/// let client = ImmersionKitClient::builder()
///     .url("https://api.immersionkit.com")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://api.immersionkit.com`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds. The timeout covers each individual request,
    /// including media downloads.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> ImmersionKitClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        ImmersionKitClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
