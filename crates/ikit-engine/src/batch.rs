//! Batch enrichment across many notes.
//!
//! Each note is an independent job: it reads its own keyword, performs its
//! own lookups and downloads, and writes only its own fields and uniquely
//! named files. The orchestrator's job is bounding concurrency, counting
//! outcomes, and honoring cancellation.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use ikit_engine::batch::{BatchOptions, CancelToken};
//! use ikit_engine::{Engine, FieldMapping, LogicalField, LookupSettings, MemoryStore};
//!
//! # async fn example() {
//! let engine = Engine::new();
//! let store = Arc::new(MemoryStore::new());
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
//!         &[1, 2, 3],
//!         &mapping,
//!         &settings,
//!         Path::new("/tmp"),
//!         &BatchOptions::default(),
//!         &CancelToken::new(),
//!     )
//!     .await;
//! println!("updated {} notes, {} failed", report.succeeded, report.failed);
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ikit::ImmersionKitClient;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::warn;

use crate::config::{FieldMapping, LookupSettings};
use crate::enrich::EnrichEngine;
use crate::note::NoteStore;

/// Default number of concurrent enrichment jobs.
const DEFAULT_WORKERS: usize = 4;

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum number of notes enriched concurrently.
    pub workers: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Advisory cancellation signal for a batch run.
///
/// Cancellation stops new jobs from starting; jobs already in flight run
/// to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been signaled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Report from a batch enrichment run.
///
/// For an uncancelled run, `succeeded + failed` equals the number of note
/// IDs passed in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Number of notes successfully enriched.
    pub succeeded: usize,
    /// Number of notes that failed.
    pub failed: usize,
    /// Number of notes never started because the run was cancelled.
    pub skipped: usize,
    /// Whether cancellation was signaled during the run.
    pub cancelled: bool,
    /// Details about failed notes.
    pub failures: Vec<BatchFailure>,
}

/// Details about a failed enrichment.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    /// The note ID that failed.
    pub note_id: i64,
    /// The error message.
    pub error: String,
}

/// Batch orchestration engine.
#[derive(Debug)]
pub struct BatchEngine<'a> {
    client: &'a ImmersionKitClient,
}

impl<'a> BatchEngine<'a> {
    pub(crate) fn new(client: &'a ImmersionKitClient) -> Self {
        Self { client }
    }

    /// Enrich a batch of notes concurrently.
    ///
    /// One job per note ID, at most `options.workers` in flight at a time.
    /// Job failures are logged, recorded in the report, and never abort
    /// sibling jobs. The token is checked before each job starts; see
    /// [`CancelToken`].
    #[allow(clippy::too_many_arguments)]
    pub async fn run<S>(
        &self,
        store: Arc<S>,
        note_ids: &[i64],
        mapping: &FieldMapping,
        settings: &LookupSettings,
        media_dir: &Path,
        options: &BatchOptions,
        cancel: &CancelToken,
    ) -> BatchReport
    where
        S: NoteStore + 'static,
    {
        let succeeded = Arc::new(AtomicUsize::new(0));
        let failures: Arc<Mutex<Vec<BatchFailure>>> = Arc::new(Mutex::new(Vec::new()));
        let semaphore = Arc::new(Semaphore::new(options.workers.max(1)));

        let mapping = Arc::new(mapping.clone());
        let settings = Arc::new(settings.clone());
        let media_dir: Arc<PathBuf> = Arc::new(media_dir.to_path_buf());

        let mut handles = Vec::new();
        let mut skipped = 0;

        for &note_id in note_ids {
            if cancel.is_cancelled() {
                skipped += 1;
                continue;
            }

            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                skipped += 1;
                continue;
            };

            let client = self.client.clone();
            let store = store.clone();
            let mapping = mapping.clone();
            let settings = settings.clone();
            let media_dir = media_dir.clone();
            let succeeded = succeeded.clone();
            let failures = failures.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;

                let engine = EnrichEngine::new(&client);
                match engine
                    .enrich_note(store.as_ref(), note_id, &mapping, &settings, &media_dir, false)
                    .await
                {
                    Ok(()) => {
                        succeeded.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        warn!(note_id, error = %e, "enrichment failed");
                        failures.lock().unwrap().push(BatchFailure {
                            note_id,
                            error: e.to_string(),
                        });
                    }
                }
            });
            handles.push((note_id, handle));
        }

        for (note_id, handle) in handles {
            if let Err(e) = handle.await {
                warn!(note_id, error = %e, "enrichment task panicked");
                failures.lock().unwrap().push(BatchFailure {
                    note_id,
                    error: e.to_string(),
                });
            }
        }

        let failures = {
            let mut guard = failures.lock().unwrap();
            std::mem::take(&mut *guard)
        };

        BatchReport {
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failures.len(),
            skipped,
            cancelled: cancel.is_cancelled(),
            failures,
        }
    }
}
