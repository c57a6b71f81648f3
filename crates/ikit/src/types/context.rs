//! Sentence context response types.

use serde::Deserialize;

/// Response from a sentence-with-context lookup.
///
/// Context sentences are ordered as they appear in the source media:
/// `pretext_sentences` leads up to the example, `posttext_sentences`
/// follows it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextResponse {
    /// Sentences preceding the example, in source order.
    #[serde(default)]
    pub pretext_sentences: Vec<ContextSentence>,
    /// Sentences following the example, in source order.
    #[serde(default)]
    pub posttext_sentences: Vec<ContextSentence>,
}

impl ContextResponse {
    /// The sentence immediately preceding the example, if any.
    pub fn previous(&self) -> Option<&ContextSentence> {
        self.pretext_sentences.last()
    }

    /// The sentence immediately following the example, if any.
    pub fn next(&self) -> Option<&ContextSentence> {
        self.posttext_sentences.first()
    }
}

/// A single surrounding-context sentence.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextSentence {
    /// The sentence text.
    pub sentence: String,
    /// The sentence with bracketed reading annotations.
    #[serde(default)]
    pub sentence_with_furigana: String,
}
