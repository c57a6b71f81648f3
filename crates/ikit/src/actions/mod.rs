//! Action modules for ImmersionKit API operations.
//!
//! Each module provides a set of related operations grouped by endpoint
//! family.

mod dictionary;
mod media;
mod sentences;

pub use dictionary::DictionaryActions;
pub use media::MediaActions;
pub use sentences::SentenceActions;
