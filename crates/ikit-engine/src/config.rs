//! Persisted enrichment settings and the field schema.
//!
//! The configuration decides which note field each piece of fetched content
//! lands in, and how lookups behave. It round-trips through serde so hosts
//! can persist it wherever they keep add-on settings; [`JsonConfigStore`]
//! covers the common flat-file case.
//!
//! # Example
//!
//! ```
//! use ikit_engine::{EnrichConfig, FieldMapping, LogicalField, LookupSettings};
//!
//! let config = EnrichConfig {
//!     lookup: LookupSettings {
//!         source_field: "Word".to_string(),
//!         ..Default::default()
//!     },
//!     fields: FieldMapping::new()
//!         .with(LogicalField::Sentence, "Sentence", false)
//!         .with(LogicalField::Audio, "Audio", true),
//! };
//!
//! assert!(config.validate().is_ok());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The logical enrichment fields the pipeline can produce.
///
/// This is a closed set; the mapping decides which note field, if any,
/// each one lands in. Serialized names are the human-readable labels a
/// host would show in its mapping configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogicalField {
    /// Sentence audio, embedded as a sound tag.
    Audio,
    /// Sentence screenshot, embedded as an image tag.
    Image,
    /// The example sentence.
    Sentence,
    /// The example sentence with bracketed reading annotations.
    #[serde(rename = "Sentence With Furigana")]
    SentenceWithFurigana,
    /// English translation of the sentence.
    #[serde(rename = "English Translation")]
    Translation,
    /// Name of the source media the sentence was mined from.
    #[serde(rename = "Source Media")]
    SourceMedia,
}

impl LogicalField {
    /// The human-readable name, as used in serialized configuration.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalField::Audio => "Audio",
            LogicalField::Image => "Image",
            LogicalField::Sentence => "Sentence",
            LogicalField::SentenceWithFurigana => "Sentence With Furigana",
            LogicalField::Translation => "English Translation",
            LogicalField::SourceMedia => "Source Media",
        }
    }
}

/// Where a logical field lands on the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldTarget {
    /// Note field to write into; `None` leaves the logical field ignored.
    #[serde(default)]
    pub target: Option<String>,
    /// Append to existing field content instead of overwriting.
    #[serde(default)]
    pub append: bool,
}

/// Mapping from logical enrichment fields to note fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping(BTreeMap<LogicalField, FieldTarget>);

impl FieldMapping {
    /// Create an empty mapping. Every logical field starts out ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style target assignment.
    pub fn with(mut self, field: LogicalField, target: &str, append: bool) -> Self {
        self.set(
            field,
            FieldTarget {
                target: Some(target.to_string()),
                append,
            },
        );
        self
    }

    /// Set the target for a logical field.
    pub fn set(&mut self, field: LogicalField, target: FieldTarget) {
        self.0.insert(field, target);
    }

    /// The target for a logical field, if it is not ignored.
    pub fn target(&self, field: LogicalField) -> Option<&FieldTarget> {
        self.0.get(&field).filter(|t| t.target.is_some())
    }

    /// All configured entries, in a stable order.
    pub fn entries(&self) -> impl Iterator<Item = (LogicalField, &FieldTarget)> {
        self.0.iter().map(|(field, target)| (*field, target))
    }

    /// Reject blank and duplicate target field names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (field, entry) in self.entries() {
            let Some(name) = entry.target.as_deref() else {
                continue;
            };
            if name.trim().is_empty() {
                return Err(Error::Config(format!(
                    "blank target field for {}",
                    field.name()
                )));
            }
            if !seen.insert(name) {
                return Err(Error::Config(format!(
                    "duplicate target field: {}",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Lookup behavior for an enrichment run. Immutable for the duration of a
/// batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Note field holding the search keyword.
    pub source_field: String,
    /// Minimum example sentence length, in characters.
    pub min_length: u32,
    /// Ask the API for exact-phrase matches.
    pub exact: bool,
    /// Wrap keyword occurrences in emphasis markup in sentence fields.
    pub highlighting: bool,
    /// Tag the note with the example's source media.
    pub tag: bool,
    /// Surround the sentence with its previous and next context sentences.
    pub merge: bool,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            source_field: String::new(),
            min_length: 12,
            exact: false,
            highlighting: true,
            tag: false,
            merge: false,
        }
    }
}

/// The persisted configuration blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// Lookup behavior.
    pub lookup: LookupSettings,
    /// Field mapping.
    #[serde(default)]
    pub fields: FieldMapping,
}

impl EnrichConfig {
    /// Validate the configuration.
    ///
    /// A usable configuration names a source field and maps each logical
    /// field to at most one distinct note field.
    pub fn validate(&self) -> Result<()> {
        if self.lookup.source_field.trim().is_empty() {
            return Err(Error::Config("source field is not set".to_string()));
        }
        self.fields.validate()
    }
}

/// Host capability for persisting enrichment settings.
pub trait ConfigStore {
    /// Load the stored configuration, if any exists.
    fn load(&self) -> Result<Option<EnrichConfig>>;

    /// Persist the configuration.
    fn save(&self, config: &EnrichConfig) -> Result<()>;
}

/// JSON-file-backed configuration store.
///
/// Validates on both load and save, so a bad mapping is caught when the
/// configuration enters the system rather than mid-batch.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Option<EnrichConfig>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config: EnrichConfig = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("invalid configuration file: {}", e)))?;
        config.validate()?;
        Ok(Some(config))
    }

    fn save(&self, config: &EnrichConfig) -> Result<()> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config)
            .map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> EnrichConfig {
        EnrichConfig {
            lookup: LookupSettings {
                source_field: "Word".to_string(),
                ..Default::default()
            },
            fields: FieldMapping::new()
                .with(LogicalField::Sentence, "Sentence", false)
                .with(LogicalField::Translation, "Meaning", true),
        }
    }

    #[test]
    fn test_validate_accepts_good_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_source_field() {
        let mut config = valid_config();
        config.lookup.source_field = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_targets() {
        let config = EnrichConfig {
            lookup: LookupSettings {
                source_field: "Word".to_string(),
                ..Default::default()
            },
            fields: FieldMapping::new()
                .with(LogicalField::Sentence, "Sentence", false)
                .with(LogicalField::Translation, "Sentence", false),
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_target() {
        let config = EnrichConfig {
            lookup: LookupSettings {
                source_field: "Word".to_string(),
                ..Default::default()
            },
            fields: FieldMapping::new().with(LogicalField::Audio, " ", false),
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_ignored_entries_have_no_target() {
        let mut mapping = FieldMapping::new().with(LogicalField::Audio, "Audio", false);
        mapping.set(LogicalField::Image, FieldTarget::default());

        assert!(mapping.target(LogicalField::Audio).is_some());
        assert!(mapping.target(LogicalField::Image).is_none());
        assert!(mapping.target(LogicalField::Sentence).is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let mapping = FieldMapping::new().with(LogicalField::SentenceWithFurigana, "Reading", false);
        let json = serde_json::to_value(&mapping).unwrap();
        assert!(json.get("Sentence With Furigana").is_some());
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.json"));

        assert!(store.load().unwrap().is_none());

        let config = valid_config();
        store.save(&config).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.lookup.source_field, "Word");
        assert!(loaded.fields.target(LogicalField::Sentence).is_some());
    }

    #[test]
    fn test_json_store_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonConfigStore::new(path);
        assert!(matches!(store.load(), Err(Error::Config(_))));
    }
}
