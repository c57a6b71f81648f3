//! Dictionary search response types.

use serde::Deserialize;

/// Response from a dictionary search.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryResponse {
    /// Result groups, one per matched dictionary entry.
    #[serde(default)]
    pub data: Vec<ExampleGroup>,
}

impl DictionaryResponse {
    /// The first example of the first result group, if any.
    pub fn first_example(&self) -> Option<&ExampleData> {
        self.data.first().and_then(|group| group.examples.first())
    }
}

/// A group of example sentences for one matched entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleGroup {
    /// The example sentences in this group.
    #[serde(default)]
    pub examples: Vec<ExampleData>,
}

/// One example sentence as returned by the dictionary search.
///
/// Sentence values are plain text; the furigana rendering annotates each
/// word with its bracketed reading (`食べる[たべる]`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleData {
    /// Opaque identifier, used as the key for context and media lookups.
    pub id: String,
    /// The example sentence.
    pub sentence: String,
    /// The sentence with bracketed reading annotations.
    #[serde(default)]
    pub sentence_with_furigana: String,
    /// English translation of the sentence.
    #[serde(default)]
    pub translation: String,
    /// Name of the source media the sentence was mined from.
    #[serde(default)]
    pub deck_name: String,
}
