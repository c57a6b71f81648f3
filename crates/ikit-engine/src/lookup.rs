//! Remote example lookup.
//!
//! This module combines the dictionary search, example selection, and the
//! surrounding-context join into one operation that yields a fully
//! assembled [`Example`].
//!
//! # Example
//!
//! ```no_run
//! use ikit_engine::Engine;
//! use ikit_engine::lookup::LookupOptions;
//!
//! # async fn example() -> ikit_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let options = LookupOptions {
//!     min_length: 12,
//!     ..Default::default()
//! };
//! let example = engine.lookup().example("食べる", &options).await?;
//! println!("{} — {}", example.sentence, example.translation);
//! # Ok(())
//! # }
//! ```

use ikit::{ImmersionKitClient, SearchQuery};
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::error::{Error, Result};

/// Options for an example lookup.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Minimum example sentence length, in characters.
    pub min_length: u32,
    /// Ask the API for exact-phrase matches.
    pub exact: bool,
    /// Pick a uniformly random example instead of the first one.
    pub random: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            min_length: 12,
            exact: false,
            random: false,
        }
    }
}

/// A fully assembled example, ready to be applied to a note.
///
/// The context fields come from a second, best-effort lookup keyed by the
/// example's id; they are `None` when the source media has no adjacent
/// sentence or the context fetch failed.
#[derive(Debug, Clone)]
pub struct Example {
    /// Opaque example identifier.
    pub id: String,
    /// The example sentence.
    pub sentence: String,
    /// The sentence with bracketed reading annotations.
    pub sentence_with_furigana: String,
    /// English translation of the sentence.
    pub translation: String,
    /// Name of the source media the sentence was mined from.
    pub deck_name: String,
    /// Download URL for the sentence audio.
    pub audio_url: String,
    /// Download URL for the sentence screenshot.
    pub image_url: String,
    /// The sentence immediately preceding this one in the source media.
    pub prev_sentence: Option<String>,
    /// Furigana rendering of the preceding sentence.
    pub prev_furigana: Option<String>,
    /// The sentence immediately following this one in the source media.
    pub next_sentence: Option<String>,
    /// Furigana rendering of the following sentence.
    pub next_furigana: Option<String>,
}

/// Example lookup engine.
#[derive(Debug)]
pub struct LookupEngine<'a> {
    client: &'a ImmersionKitClient,
}

impl<'a> LookupEngine<'a> {
    pub(crate) fn new(client: &'a ImmersionKitClient) -> Self {
        Self { client }
    }

    /// Look up an example for a keyword.
    ///
    /// Selects the first example of the first result group, or a uniformly
    /// random one from that group when `options.random` is set. The
    /// surrounding context is then fetched with the example's id as the
    /// join key; a context miss degrades to a bare example rather than
    /// failing the lookup.
    pub async fn example(&self, keyword: &str, options: &LookupOptions) -> Result<Example> {
        let query = SearchQuery::new(keyword)
            .min_length(options.min_length)
            .exact(options.exact);
        let response = self.client.dictionary().look_up(&query).await?;

        let Some(group) = response.data.first() else {
            return Err(Error::NotFound(keyword.to_string()));
        };

        let chosen = if options.random {
            group.examples.choose(&mut rand::rng())
        } else {
            group.examples.first()
        };
        let Some(data) = chosen else {
            return Err(Error::NoExamples(keyword.to_string()));
        };

        let context = match self.client.sentences().with_context(&data.id).await {
            Ok(context) => Some(context),
            Err(e) => {
                debug!(id = %data.id, error = %e, "context fetch failed; continuing without context");
                None
            }
        };
        let previous = context.as_ref().and_then(|c| c.previous());
        let next = context.as_ref().and_then(|c| c.next());

        Ok(Example {
            id: data.id.clone(),
            sentence: data.sentence.clone(),
            sentence_with_furigana: data.sentence_with_furigana.clone(),
            translation: data.translation.clone(),
            deck_name: data.deck_name.clone(),
            audio_url: self.client.media().audio_url(&data.id),
            image_url: self.client.media().image_url(&data.id),
            prev_sentence: previous.map(|s| s.sentence.clone()),
            prev_furigana: previous.map(|s| s.sentence_with_furigana.clone()),
            next_sentence: next.map(|s| s.sentence.clone()),
            next_furigana: next.map(|s| s.sentence_with_furigana.clone()),
        })
    }
}
