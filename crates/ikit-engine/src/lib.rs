//! High-level note-enrichment workflows over the ImmersionKit API.
//!
//! This crate builds on the [`ikit`] client library. While `ikit` provides
//! 1:1 API bindings, `ikit-engine` combines them into the enrichment
//! pipeline: look up an example for a note's keyword, emphasize the keyword
//! in the sentence, download the sentence audio and screenshot, and write
//! everything into the note fields the user mapped.
//!
//! The host application stays behind two injected capabilities: a
//! [`NoteStore`] for reading and persisting notes and a
//! [`ConfigStore`] for the saved settings, plus a media directory path.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use ikit_engine::batch::{BatchOptions, CancelToken};
//! use ikit_engine::{Engine, FieldMapping, LogicalField, LookupSettings, MemoryStore, Note};
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! let store = Arc::new(MemoryStore::new());
//! store.insert(Note::new(
//!     1,
//!     HashMap::from([
//!         ("Word".to_string(), "食べる".to_string()),
//!         ("Sentence".to_string(), String::new()),
//!     ]),
//! ));
//!
//! let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);
//! let settings = LookupSettings {
//!     source_field: "Word".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = engine
//!     .batch()
//!     .run(
//!         store,
//!         &[1],
//!         &mapping,
//!         &settings,
//!         Path::new("/tmp"),
//!         &BatchOptions::default(),
//!         &CancelToken::new(),
//!     )
//!     .await;
//! println!("updated {} notes", report.succeeded);
//! # }
//! ```
//!
//! # Feature Flags
//!
//! All workflow modules are enabled by default. Disable with:
//!
//! ```toml
//! [dependencies]
//! ikit-engine = { version = "0.1", default-features = false, features = ["lookup"] }
//! ```
//!
//! Available features:
//! - `lookup` - Example lookup with context join
//! - `highlight` - Sentence cleanup and keyword emphasis
//! - `media` - Media downloads into the host media directory
//! - `enrich` - Per-note enrichment and re-roll
//! - `batch` - Concurrent batch orchestration with cancellation

mod error;

pub mod config;
pub mod note;

#[cfg(feature = "batch")]
pub mod batch;

#[cfg(feature = "enrich")]
pub mod enrich;

#[cfg(feature = "highlight")]
pub mod highlight;

#[cfg(feature = "lookup")]
pub mod lookup;

#[cfg(feature = "media")]
pub mod media;

pub use error::{Error, Result};

pub use config::{
    ConfigStore, EnrichConfig, FieldMapping, FieldTarget, JsonConfigStore, LogicalField,
    LookupSettings,
};
pub use note::{MemoryStore, Note, NoteStore};

// Re-export ikit types for convenience
pub use ikit::{ClientBuilder, ImmersionKitClient, SearchQuery};

#[cfg(feature = "batch")]
use batch::BatchEngine;

#[cfg(feature = "enrich")]
use enrich::EnrichEngine;

#[cfg(feature = "lookup")]
use lookup::LookupEngine;

#[cfg(feature = "media")]
use media::MediaEngine;

/// High-level workflow engine for note enrichment.
///
/// The engine wraps an [`ImmersionKitClient`] and provides access to the
/// workflow modules.
///
/// # Example
///
/// ```no_run
/// use ikit_engine::Engine;
/// use ikit_engine::lookup::LookupOptions;
///
/// # async fn example() -> ikit_engine::Result<()> {
/// // Create with default client settings
/// let engine = Engine::new();
///
/// // Or with a custom client
/// let client = ikit_engine::ImmersionKitClient::builder()
///     .url("https://api.immersionkit.com")
///     .build();
/// let engine = Engine::from_client(client);
///
/// let example = engine.lookup().example("猫", &LookupOptions::default()).await?;
/// println!("{}", example.sentence);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: ImmersionKitClient,
}

impl Engine {
    /// Create a new engine with default client settings.
    ///
    /// Connects to the ImmersionKit API at `https://api.immersionkit.com`.
    pub fn new() -> Self {
        Self {
            client: ImmersionKitClient::new(),
        }
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: ImmersionKitClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    ///
    /// Use this for direct API access when workflows don't cover your use
    /// case.
    pub fn client(&self) -> &ImmersionKitClient {
        &self.client
    }

    /// Access example lookup.
    ///
    /// Combines dictionary search, example selection, and the context join.
    #[cfg(feature = "lookup")]
    pub fn lookup(&self) -> LookupEngine<'_> {
        LookupEngine::new(&self.client)
    }

    /// Access media downloads.
    ///
    /// Streams sentence audio and screenshots into the media directory.
    #[cfg(feature = "media")]
    pub fn media(&self) -> MediaEngine<'_> {
        MediaEngine::new(&self.client)
    }

    /// Access per-note enrichment.
    ///
    /// Provides the full pipeline for a single note, plus re-roll.
    #[cfg(feature = "enrich")]
    pub fn enrich(&self) -> EnrichEngine<'_> {
        EnrichEngine::new(&self.client)
    }

    /// Access batch orchestration.
    ///
    /// Fans enrichment out over many notes with bounded concurrency.
    #[cfg(feature = "batch")]
    pub fn batch(&self) -> BatchEngine<'_> {
        BatchEngine::new(&self.client)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
