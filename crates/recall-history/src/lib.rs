//! Bounded, deduplicated, durably persisted selection recency.
//!
//! A [`HistoryManager`] owns the in-memory most-recent-first sequence of a
//! user's past selections, persists it through `recall-store` via jobs
//! scheduled on an injected `recall-exec` executor, and notifies a single
//! registered [`HistoryObserver`] of state transitions.
//!
//! # Design Rules
//!
//! 1. `add` and `selections` never block and never touch storage; all I/O
//!    runs inside background job bodies.
//! 2. The sequence is capacity-bounded (default 5) and deduplicated by the
//!    item's stable identity key; index 0 is the most recent selection.
//! 3. Save jobs operate on a snapshot clone taken at enqueue time, so a
//!    later `add` cannot corrupt bytes already being written.
//! 4. A failed save wipes the in-memory sequence and notifies the observer
//!    with the now-empty history; a failed load is logged and leaves the
//!    history empty, silently. No operation retries.
//!
//! # Load/save ordering hazard
//!
//! `add` may be called before the initial load completes. Such calls
//! mutate the (initially empty) sequence immediately and schedule a save.
//! When the deferred load later completes, the persisted items are
//! replayed through the same dedup/trim path *over* the current sequence,
//! prepending history above any early additions; whichever save completes
//! last determines the on-disk document. This last-completion-wins
//! behavior is deliberate and pinned by
//! `load_completing_after_add_prepends_persisted_items`; no sequencing
//! barrier is imposed between the initial load and early saves.

pub mod error;
pub mod manager;
pub mod observer;

pub use error::HistoryError;
pub use manager::{HistoryConfig, HistoryManager, LoadState, DEFAULT_CAPACITY};
pub use observer::HistoryObserver;
