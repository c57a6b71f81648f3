//! Wire types for the ImmersionKit API.

mod context;
mod dictionary;

pub use context::{ContextResponse, ContextSentence};
pub use dictionary::{DictionaryResponse, ExampleData, ExampleGroup};
