use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use recall_codec::{decode_history, encode_history};
use recall_exec::{Job, JobError, JobExecutor};
use recall_store::HistoryFile;
use recall_types::Keyed;

use crate::error::HistoryError;
use crate::observer::HistoryObserver;

/// Default bound on the number of remembered selections.
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration for a [`HistoryManager`].
#[derive(Clone, Debug)]
pub struct HistoryConfig {
    /// Maximum number of selections retained; older entries are evicted.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Progress of the initial load from the backing file.
///
/// `Ready` is reached after the load job completes, successfully or not,
/// and is steady-state for the manager's remaining lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// The load job is enqueued or running.
    Loading,
    /// The load completed (or failed); the sequence is authoritative.
    Ready,
}

/// Sequence plus load progress, guarded by one lock.
struct Sequence<T> {
    items: Vec<T>,
    load: LoadState,
}

/// State shared between the manager and its in-flight job continuations.
struct Shared<T> {
    sequence: Mutex<Sequence<T>>,
    observer: Mutex<Option<Arc<dyn HistoryObserver<T>>>>,
    file: HistoryFile,
    capacity: usize,
}

impl<T> Shared<T> {
    /// Invoke the registered observer, if any, outside the sequence lock.
    fn notify(&self, items: &[T]) {
        let observer = self
            .observer
            .lock()
            .expect("observer lock poisoned")
            .clone();
        if let Some(observer) = observer {
            observer.on_history_updated(items);
        }
    }
}

/// Remove any key-equal element, insert at the front, trim to capacity.
///
/// The single mutation path: `add` and load replay both go through here,
/// so a loaded sequence ends up exactly as if each item had been added at
/// history-writing time.
fn insert_front<T: Keyed>(items: &mut Vec<T>, item: T, capacity: usize) {
    items.retain(|existing| !existing.same_key(&item));
    items.insert(0, item);
    items.truncate(capacity);
}

/// Bounded, deduplicated, most-recent-first selection history with
/// asynchronous durability and observer notification.
///
/// Construction immediately schedules a load of the persisted document;
/// every `add` mutates the in-memory sequence synchronously and schedules
/// a save of a snapshot. See the crate docs for the load/save ordering
/// hazard and the failure policy.
pub struct HistoryManager<T> {
    shared: Arc<Shared<T>>,
    executor: Arc<dyn JobExecutor>,
}

impl<T> HistoryManager<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned + Send + 'static,
{
    /// Create a manager over `file`, scheduling work on `executor`, and
    /// enqueue the initial load.
    pub fn new(file: HistoryFile, executor: Arc<dyn JobExecutor>, config: HistoryConfig) -> Self {
        let manager = Self {
            shared: Arc::new(Shared {
                sequence: Mutex::new(Sequence {
                    items: Vec::new(),
                    load: LoadState::Loading,
                }),
                observer: Mutex::new(None),
                file,
                capacity: config.capacity,
            }),
            executor,
        };
        manager.enqueue_load();
        manager
    }

    /// Create a manager with the default configuration.
    pub fn with_defaults(file: HistoryFile, executor: Arc<dyn JobExecutor>) -> Self {
        Self::new(file, executor, HistoryConfig::default())
    }

    /// Record a selection: move-or-insert at the front, trim to capacity,
    /// then schedule a save of the resulting snapshot.
    ///
    /// The in-memory mutation is synchronous and visible to
    /// [`selections`](Self::selections) immediately; durability and the
    /// observer notification follow when the save job completes.
    pub fn add(&self, item: T) {
        let snapshot = {
            let mut seq = self.shared.sequence.lock().expect("sequence lock poisoned");
            insert_front(&mut seq.items, item, self.shared.capacity);
            seq.items.clone()
        };
        self.enqueue_save(snapshot);
    }

    /// The current sequence, most recent first. A defensive copy; later
    /// mutations are not visible through it.
    pub fn selections(&self) -> Vec<T> {
        self.shared
            .sequence
            .lock()
            .expect("sequence lock poisoned")
            .items
            .clone()
    }

    /// Replace or clear the single observer slot.
    pub fn set_observer(&self, observer: Option<Arc<dyn HistoryObserver<T>>>) {
        *self.shared.observer.lock().expect("observer lock poisoned") = observer;
    }

    /// Progress of the initial load.
    pub fn load_state(&self) -> LoadState {
        self.shared
            .sequence
            .lock()
            .expect("sequence lock poisoned")
            .load
    }

    fn enqueue_load(&self) {
        let body_shared = self.shared.clone();
        let ok_shared = self.shared.clone();
        let err_shared = self.shared.clone();

        self.executor.enqueue(Job::new(
            move || -> Result<Vec<T>, JobError> {
                match body_shared
                    .file
                    .read()
                    .map_err(|e| JobError::failed(HistoryError::from(e)))?
                {
                    // Never committed: history starts empty.
                    None => Ok(Vec::new()),
                    Some(bytes) => decode_history(&bytes)
                        .map_err(|e| JobError::failed(HistoryError::from(e))),
                }
            },
            move |decoded: Vec<T>| {
                let snapshot = {
                    let mut seq = ok_shared.sequence.lock().expect("sequence lock poisoned");
                    // Replay oldest-first through the normal mutation path,
                    // over whatever early `add` calls already put here (the
                    // preserved ordering hazard, see crate docs).
                    for item in decoded.into_iter().rev() {
                        insert_front(&mut seq.items, item, ok_shared.capacity);
                    }
                    seq.load = LoadState::Ready;
                    seq.items.clone()
                };
                debug!(len = snapshot.len(), "selection history loaded");
                ok_shared.notify(&snapshot);
            },
            move |err| {
                // Load failures are swallowed: history simply starts empty,
                // and the observer is not told.
                warn!(error = %err, "unable to load selection history");
                err_shared
                    .sequence
                    .lock()
                    .expect("sequence lock poisoned")
                    .load = LoadState::Ready;
            },
        ));
    }

    fn enqueue_save(&self, snapshot: Vec<T>) {
        let body_shared = self.shared.clone();
        let ok_shared = self.shared.clone();
        let err_shared = self.shared.clone();

        self.executor.enqueue(Job::new(
            move || -> Result<(), JobError> {
                let bytes = encode_history(&snapshot)
                    .map_err(|e| JobError::failed(HistoryError::from(e)))?;
                body_shared
                    .file
                    .replace(&bytes)
                    .map_err(|e| JobError::failed(HistoryError::from(e)))?;
                Ok(())
            },
            move |()| {
                debug!("selection history saved");
                // Observers always see the latest state, which may already
                // have moved past the snapshot that was just committed.
                let current = ok_shared
                    .sequence
                    .lock()
                    .expect("sequence lock poisoned")
                    .items
                    .clone();
                ok_shared.notify(&current);
            },
            move |err| {
                // An unpersistable history is discarded outright rather than
                // left diverging from disk.
                error!(error = %err, "failed to save selection history; resetting");
                err_shared
                    .sequence
                    .lock()
                    .expect("sequence lock poisoned")
                    .items
                    .clear();
                err_shared.notify(&[]);
            },
        ));
    }
}
