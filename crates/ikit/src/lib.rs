//! An async Rust client for the ImmersionKit dictionary and sentence API.
//!
//! ImmersionKit serves example sentences mined from native media, along with
//! furigana renderings, English translations, and per-sentence audio and
//! screenshot downloads. This crate provides typed access to those endpoints.
//!
//! # Quick Start
//!
//! ```no_run
//! use ikit::{ImmersionKitClient, SearchQuery};
//!
//! # async fn example() -> ikit::Result<()> {
//! // Create a client with default settings (api.immersionkit.com)
//! let client = ImmersionKitClient::new();
//!
//! // Search the dictionary for a keyword
//! let query = SearchQuery::new("食べる").min_length(12);
//! let response = client.dictionary().look_up(&query).await?;
//!
//! if let Some(example) = response.first_example() {
//!     println!("{} — {}", example.sentence, example.translation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use ikit::ImmersionKitClient;
//!
//! let client = ImmersionKitClient::builder()
//!     .url("https://api.immersionkit.com")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`ImmersionKitClient::dictionary()`] - Keyword search over the example corpus
//! - [`ImmersionKitClient::sentences()`] - Surrounding-context lookup for an example
//! - [`ImmersionKitClient::media()`] - Audio and image download URLs and transfers

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{ClientBuilder, ImmersionKitClient};
pub use error::{Error, Result};
pub use query::SearchQuery;
pub use types::{
    ContextResponse, ContextSentence, DictionaryResponse, ExampleData, ExampleGroup,
};
