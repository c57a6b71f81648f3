//! The host note capability.
//!
//! Notes are owned by the host application; the engine only reads one field
//! (the lookup keyword) and writes the mapped target fields. Hosts plug in
//! by implementing [`NoteStore`]; the engine never reaches for host state
//! any other way.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};

/// A snapshot of one note: named fields plus tags.
///
/// Field values are HTML, as the host renders them.
#[derive(Debug, Clone)]
pub struct Note {
    id: i64,
    fields: HashMap<String, String>,
    tags: Vec<String>,
}

impl Note {
    /// Create a note snapshot with the given fields and no tags.
    pub fn new(id: i64, fields: HashMap<String, String>) -> Self {
        Self {
            id,
            fields,
            tags: Vec::new(),
        }
    }

    /// The note ID.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The value of a field, if the note has it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether the note has a field with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set a field value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// All fields, keyed by field name.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// The note's tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a tag. Adding an existing tag is a no-op.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

/// Host capability for reading and persisting notes.
///
/// Implementations must be safe to share across the batch worker pool.
/// Errors from the host side should use [`Error::Store`] (or
/// [`Error::NoteNotFound`] for unknown IDs).
pub trait NoteStore: Send + Sync {
    /// Load a snapshot of a note.
    fn note(&self, id: i64) -> Result<Note>;

    /// Persist a modified note back to the host.
    fn persist(&self, note: &Note) -> Result<()>;
}

/// In-memory note store.
///
/// Backs the test suite and the demo example; real hosts implement
/// [`NoteStore`] over their own collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Mutex<HashMap<i64, Note>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a note.
    pub fn insert(&self, note: Note) {
        self.notes.lock().unwrap().insert(note.id(), note);
    }

    /// A snapshot of a note, if present.
    pub fn get(&self, id: i64) -> Option<Note> {
        self.notes.lock().unwrap().get(&id).cloned()
    }
}

impl NoteStore for MemoryStore {
    fn note(&self, id: i64) -> Result<Note> {
        self.notes
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    fn persist(&self, note: &Note) -> Result<()> {
        self.notes.lock().unwrap().insert(note.id(), note.clone());
        Ok(())
    }
}
