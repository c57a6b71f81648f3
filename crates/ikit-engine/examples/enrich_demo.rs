//! Demonstrates the enrichment workflow end to end.
//!
//! Run with: `cargo run --example enrich_demo`
//!
//! Uses an in-memory note store; lookups hit the live ImmersionKit API, so
//! expect a few seconds of network time.

use std::collections::HashMap;
use std::sync::Arc;

use ikit_engine::batch::{BatchOptions, CancelToken};
use ikit_engine::{Engine, FieldMapping, LogicalField, LookupSettings, MemoryStore, Note};

#[tokio::main]
async fn main() {
    let engine = Engine::new();

    // A handful of vocabulary notes with empty example fields.
    let store = Arc::new(MemoryStore::new());
    for (id, word) in [(1, "食べる"), (2, "猫"), (3, "走る")] {
        let fields = HashMap::from([
            ("Word".to_string(), word.to_string()),
            ("Sentence".to_string(), String::new()),
            ("Translation".to_string(), String::new()),
        ]);
        store.insert(Note::new(id, fields));
    }

    let mapping = FieldMapping::new()
        .with(LogicalField::Sentence, "Sentence", false)
        .with(LogicalField::Translation, "Translation", false);
    let settings = LookupSettings {
        source_field: "Word".to_string(),
        tag: true,
        ..Default::default()
    };

    let media_dir = std::env::temp_dir();
    let report = engine
        .batch()
        .run(
            store.clone(),
            &[1, 2, 3],
            &mapping,
            &settings,
            &media_dir,
            &BatchOptions::default(),
            &CancelToken::new(),
        )
        .await;

    println!("succeeded: {}", report.succeeded);
    println!("failed:    {}", report.failed);
    for failure in &report.failures {
        println!("  note {}: {}", failure.note_id, failure.error);
    }

    println!("\nEnriched notes:");
    for id in [1, 2, 3] {
        if let Some(note) = store.get(id) {
            println!("  note {}", id);
            println!("    sentence:    {}", note.field("Sentence").unwrap_or(""));
            println!("    translation: {}", note.field("Translation").unwrap_or(""));
            println!("    tags:        {:?}", note.tags());
        }
    }
}
