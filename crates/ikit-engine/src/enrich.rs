//! Per-note enrichment: lookup, media fetch, and field application.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! use ikit_engine::{Engine, FieldMapping, LogicalField, LookupSettings, MemoryStore, Note};
//!
//! # async fn example() -> ikit_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let store = MemoryStore::new();
//! let fields = HashMap::from([
//!     ("Word".to_string(), "食べる".to_string()),
//!     ("Sentence".to_string(), String::new()),
//! ]);
//! store.insert(Note::new(1, fields));
//!
//! let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);
//! let settings = LookupSettings {
//!     source_field: "Word".to_string(),
//!     ..Default::default()
//! };
//!
//! engine
//!     .enrich()
//!     .enrich_note(&store, 1, &mapping, &settings, Path::new("/tmp"), false)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use ikit::ImmersionKitClient;

use crate::config::{FieldMapping, LogicalField, LookupSettings};
use crate::error::{Error, Result};
use crate::highlight;
use crate::lookup::{Example, LookupEngine, LookupOptions};
use crate::media::MediaEngine;
use crate::note::{Note, NoteStore};

/// Basenames of the media files fetched for one example.
#[derive(Debug, Clone, Default)]
pub struct FetchedMedia {
    /// Basename of the downloaded audio file, if any.
    pub audio: Option<String>,
    /// Basename of the downloaded image file, if any.
    pub image: Option<String>,
}

/// Enrichment workflow engine.
#[derive(Debug)]
pub struct EnrichEngine<'a> {
    client: &'a ImmersionKitClient,
}

impl<'a> EnrichEngine<'a> {
    pub(crate) fn new(client: &'a ImmersionKitClient) -> Self {
        Self { client }
    }

    /// Enrich a single note in place.
    ///
    /// Reads the keyword from the configured source field, looks up an
    /// example, downloads media for the mapped audio/image fields, applies
    /// everything to the note, and persists it. A lookup failure aborts
    /// the note before any field is written; media failures merely skip
    /// their field.
    pub async fn enrich_note<S>(
        &self,
        store: &S,
        note_id: i64,
        mapping: &FieldMapping,
        settings: &LookupSettings,
        media_dir: &Path,
        random: bool,
    ) -> Result<()>
    where
        S: NoteStore + ?Sized,
    {
        let mut note = store.note(note_id)?;

        let keyword = note
            .field(&settings.source_field)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if keyword.is_empty() {
            return Err(Error::MissingSourceField {
                note: note_id,
                field: settings.source_field.clone(),
            });
        }

        let options = LookupOptions {
            min_length: settings.min_length,
            exact: settings.exact,
            random,
        };
        let example = LookupEngine::new(self.client)
            .example(&keyword, &options)
            .await?;

        let media_engine = MediaEngine::new(self.client);
        let mut media = FetchedMedia::default();
        if mapping.target(LogicalField::Audio).is_some() {
            let path = media_engine.fetch(&example.audio_url, media_dir, "mp3").await?;
            media.audio = basename(path);
        }
        if mapping.target(LogicalField::Image).is_some() {
            let path = media_engine.fetch(&example.image_url, media_dir, "png").await?;
            media.image = basename(path);
        }

        apply(&mut note, mapping, &example, settings, &keyword, &media);
        store.persist(&note)?;
        Ok(())
    }

    /// Regenerate a note's enrichment with a fresh random example.
    ///
    /// The re-roll counterpart to a batch run: same settings, but the
    /// example is picked uniformly at random so repeated invocations cycle
    /// through the available sentences.
    pub async fn reroll<S>(
        &self,
        store: &S,
        note_id: i64,
        mapping: &FieldMapping,
        settings: &LookupSettings,
        media_dir: &Path,
    ) -> Result<()>
    where
        S: NoteStore + ?Sized,
    {
        self.enrich_note(store, note_id, mapping, settings, media_dir, true)
            .await
    }
}

fn basename(path: Option<PathBuf>) -> Option<String> {
    path.as_deref()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Apply an example to a note according to the mapping and settings.
///
/// Logical fields whose target is ignored, or whose target field the note
/// does not have, are skipped. Targets marked `append` get a space plus the
/// new value concatenated onto existing content; everything else is
/// overwritten, which makes repeat application with the same example
/// converge.
pub fn apply(
    note: &mut Note,
    mapping: &FieldMapping,
    example: &Example,
    settings: &LookupSettings,
    keyword: &str,
    media: &FetchedMedia,
) {
    for (field, entry) in mapping.entries() {
        let Some(name) = entry.target.as_deref() else {
            continue;
        };
        if !note.has_field(name) {
            // The note type simply lacks this field.
            continue;
        }
        let Some(value) = field_value(field, example, settings, keyword, media) else {
            continue;
        };
        let value = match note.field(name) {
            Some(existing) if entry.append && !existing.is_empty() => {
                format!("{existing} {value}")
            }
            _ => value,
        };
        note.set_field(name, value);
    }

    if settings.tag && !example.deck_name.is_empty() {
        note.add_tag(example.deck_name.replace(' ', "::"));
    }
}

fn field_value(
    field: LogicalField,
    example: &Example,
    settings: &LookupSettings,
    keyword: &str,
    media: &FetchedMedia,
) -> Option<String> {
    match field {
        LogicalField::Audio => media.audio.as_ref().map(|name| format!("[sound:{name}]")),
        LogicalField::Image => media
            .image
            .as_ref()
            .map(|name| format!(r#"<img src="{name}">"#)),
        LogicalField::Sentence => {
            let sentence =
                highlight::highlight(&example.sentence, keyword, false, settings.highlighting);
            Some(if settings.merge {
                merge_context(
                    example.prev_sentence.as_deref(),
                    &sentence,
                    example.next_sentence.as_deref(),
                )
            } else {
                sentence
            })
        }
        LogicalField::SentenceWithFurigana => {
            let sentence = highlight::highlight(
                &example.sentence_with_furigana,
                keyword,
                true,
                settings.highlighting,
            );
            Some(if settings.merge {
                merge_context(
                    example.prev_furigana.as_deref(),
                    &sentence,
                    example.next_furigana.as_deref(),
                )
            } else {
                sentence
            })
        }
        LogicalField::Translation => Some(example.translation.clone()),
        LogicalField::SourceMedia => Some(example.deck_name.clone()),
    }
}

/// Flank the sentence with its context in fine print: small, big, small.
fn merge_context(prev: Option<&str>, current: &str, next: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(prev) = prev {
        parts.push(format!("<small>{}</small>", highlight::strip_decorative(prev)));
    }
    parts.push(current.to_string());
    if let Some(next) = next {
        parts.push(format!("<small>{}</small>", highlight::strip_decorative(next)));
    }
    parts.join("<br>")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn example() -> Example {
        Example {
            id: "ex_1".to_string(),
            sentence: "彼は食べる。".to_string(),
            sentence_with_furigana: "彼[かれ]は食べる[たべる]。".to_string(),
            translation: "He eats.".to_string(),
            deck_name: "Some Show".to_string(),
            audio_url: "https://example.invalid/audio".to_string(),
            image_url: "https://example.invalid/image".to_string(),
            prev_sentence: Some("前の文。".to_string()),
            prev_furigana: Some("前[まえ]の文[ぶん]。".to_string()),
            next_sentence: Some("次の文。".to_string()),
            next_furigana: Some("次[つぎ]の文[ぶん]。".to_string()),
        }
    }

    fn note(pairs: &[(&str, &str)]) -> Note {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Note::new(1, fields)
    }

    fn settings() -> LookupSettings {
        LookupSettings {
            source_field: "Word".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_writes_mapped_fields() {
        let mut note = note(&[("Word", "食べる"), ("Sentence", ""), ("Meaning", "")]);
        let mapping = FieldMapping::new()
            .with(LogicalField::Sentence, "Sentence", false)
            .with(LogicalField::Translation, "Meaning", false);

        apply(
            &mut note,
            &mapping,
            &example(),
            &settings(),
            "食べる",
            &FetchedMedia::default(),
        );

        assert_eq!(note.field("Sentence"), Some("彼は<b>食べる</b>。"));
        assert_eq!(note.field("Meaning"), Some("He eats."));
    }

    #[test]
    fn test_apply_overwrite_is_idempotent() {
        let mut note = note(&[("Sentence", "old")]);
        let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());
        let once = note.field("Sentence").unwrap().to_string();
        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert_eq!(note.field("Sentence"), Some(once.as_str()));
    }

    #[test]
    fn test_apply_append_concatenates() {
        let mut note = note(&[("Meaning", "existing")]);
        let mapping = FieldMapping::new().with(LogicalField::Translation, "Meaning", true);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert_eq!(note.field("Meaning"), Some("existing He eats."));
    }

    #[test]
    fn test_apply_append_to_empty_field_has_no_leading_space() {
        let mut note = note(&[("Meaning", "")]);
        let mapping = FieldMapping::new().with(LogicalField::Translation, "Meaning", true);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert_eq!(note.field("Meaning"), Some("He eats."));
    }

    #[test]
    fn test_apply_skips_fields_the_note_lacks() {
        let mut note = note(&[("Word", "食べる")]);
        let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert!(!note.has_field("Sentence"));
    }

    #[test]
    fn test_apply_skips_media_without_download() {
        let mut note = note(&[("Audio", "untouched"), ("Image", "untouched")]);
        let mapping = FieldMapping::new()
            .with(LogicalField::Audio, "Audio", false)
            .with(LogicalField::Image, "Image", false);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert_eq!(note.field("Audio"), Some("untouched"));
        assert_eq!(note.field("Image"), Some("untouched"));
    }

    #[test]
    fn test_apply_embeds_downloaded_media() {
        let mut note = note(&[("Audio", ""), ("Image", "")]);
        let mapping = FieldMapping::new()
            .with(LogicalField::Audio, "Audio", false)
            .with(LogicalField::Image, "Image", false);
        let media = FetchedMedia {
            audio: Some("20240101120000_ab12cd34.mp3".to_string()),
            image: Some("20240101120000_ef56ab78.png".to_string()),
        };

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &media);

        assert_eq!(
            note.field("Audio"),
            Some("[sound:20240101120000_ab12cd34.mp3]")
        );
        assert_eq!(
            note.field("Image"),
            Some(r#"<img src="20240101120000_ef56ab78.png">"#)
        );
    }

    #[test]
    fn test_apply_merge_orders_small_big_small() {
        let mut note = note(&[("Sentence", "")]);
        let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);
        let mut settings = settings();
        settings.merge = true;

        apply(&mut note, &mapping, &example(), &settings, "食べる", &FetchedMedia::default());

        assert_eq!(
            note.field("Sentence"),
            Some("<small>前の文。</small><br>彼は<b>食べる</b>。<br><small>次の文。</small>")
        );
    }

    #[test]
    fn test_apply_merge_without_context_is_bare() {
        let mut note = note(&[("Sentence", "")]);
        let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);
        let mut settings = settings();
        settings.merge = true;

        let mut example = example();
        example.prev_sentence = None;
        example.next_sentence = None;

        apply(&mut note, &mapping, &example, &settings, "食べる", &FetchedMedia::default());

        assert_eq!(note.field("Sentence"), Some("彼は<b>食べる</b>。"));
    }

    #[test]
    fn test_apply_tags_by_source() {
        let mut note = note(&[("Sentence", "")]);
        let mapping = FieldMapping::new().with(LogicalField::Sentence, "Sentence", false);
        let mut settings = settings();
        settings.tag = true;

        apply(&mut note, &mapping, &example(), &settings, "食べる", &FetchedMedia::default());
        // Re-applying does not duplicate the tag.
        apply(&mut note, &mapping, &example(), &settings, "食べる", &FetchedMedia::default());

        assert_eq!(note.tags(), ["Some::Show"]);
    }

    #[test]
    fn test_apply_furigana_highlighting() {
        let mut note = note(&[("Reading", "")]);
        let mapping =
            FieldMapping::new().with(LogicalField::SentenceWithFurigana, "Reading", false);

        apply(&mut note, &mapping, &example(), &settings(), "食べる", &FetchedMedia::default());

        assert_eq!(
            note.field("Reading"),
            Some("彼[かれ]は<b>食べる[たべる]</b>。")
        );
    }
}
