//! Error types for ikit-engine.
//!
//! Errors from engine workflows fall into two categories:
//!
//! 1. **Client errors**: Wrapped from the underlying [`ikit::Error`] type
//! 2. **Workflow errors**: Specific to engine operations (e.g., no example
//!    found for a keyword)
//!
//! Media downloads are deliberately absent from the taxonomy: a failed
//! download skips the corresponding note field rather than erroring.
//!
//! # Example
//!
//! ```no_run
//! use ikit_engine::lookup::LookupOptions;
//! use ikit_engine::{Engine, Error};
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! match engine.lookup().example("食べる", &LookupOptions::default()).await {
//!     Ok(example) => println!("{}", example.sentence),
//!     Err(Error::NotFound(keyword)) => {
//!         eprintln!("no examples for '{}'", keyword);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use std::fmt;

/// Result type for ikit-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine operations.
///
/// Engine errors wrap lower-level client errors and add workflow-specific
/// variants for common failure cases.
#[derive(Debug)]
pub enum Error {
    /// An error from the underlying ikit client.
    Client(ikit::Error),

    /// The search matched no results.
    NotFound(String),

    /// The matched result group contained no examples.
    NoExamples(String),

    /// The configured source field is missing or blank on a note.
    MissingSourceField {
        /// The note ID.
        note: i64,
        /// The configured source field name.
        field: String,
    },

    /// A note was not found in the note store.
    NoteNotFound(i64),

    /// A note store operation failed.
    ///
    /// Produced by host implementations of
    /// [`NoteStore`](crate::note::NoteStore).
    Store(String),

    /// The configuration is invalid.
    Config(String),

    /// An I/O error occurred.
    Io(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client(e) => write!(f, "{}", e),
            Error::NotFound(keyword) => write!(f, "no results for keyword: {}", keyword),
            Error::NoExamples(keyword) => {
                write!(f, "no examples in results for keyword: {}", keyword)
            }
            Error::MissingSourceField { note, field } => {
                write!(f, "note {} has no usable source field '{}'", note, field)
            }
            Error::NoteNotFound(id) => write!(f, "note not found: {}", id),
            Error::Store(msg) => write!(f, "note store error: {}", msg),
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ikit::Error> for Error {
    fn from(err: ikit::Error) -> Self {
        Error::Client(err)
    }
}
