//! Error types for the ikit crate.
//!
//! # Error Handling
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::Unreachable`]: the API host could not be reached at all
//! - [`Error::Status`]: the API answered with a non-success status
//!
//! # Example
//!
//! ```no_run
//! use ikit::{Error, ImmersionKitClient, SearchQuery};
//!
//! # async fn example() {
//! let client = ImmersionKitClient::new();
//!
//! match client.dictionary().look_up(&SearchQuery::new("猫")).await {
//!     Ok(response) => println!("Found {} result groups", response.data.len()),
//!     Err(Error::Unreachable) => {
//!         eprintln!("Could not reach the ImmersionKit API");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for ImmersionKit API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Also covers JSON bodies that failed to decode into the expected
    /// shape. For connection-level failures, see [`Error::Unreachable`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API host could not be reached.
    ///
    /// This error occurs when the connection itself fails: DNS resolution,
    /// refused connections, or no network.
    #[error("Could not reach the ImmersionKit API")]
    Unreachable,

    /// The API answered with a non-success status code.
    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// A specialized Result type for ImmersionKit API operations.
pub type Result<T> = std::result::Result<T, Error>;
