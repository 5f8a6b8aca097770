//! Crash-safe single-document file storage for Recall history.
//!
//! A [`HistoryFile`] holds exactly one logical document (the serialized
//! recency list) on stable storage with atomic replace-or-keep-previous
//! semantics.
//!
//! # Design Rules
//!
//! 1. Commits are atomic: a replacement is written to a sibling temporary
//!    file, flushed and fsynced, then renamed over the target. A reader
//!    observes either the old document or the new one in full, never a mix.
//! 2. Any failure before the rename discards the temporary file and leaves
//!    the previously committed document untouched.
//! 3. A document that was never committed reads as `None` — absence is not
//!    an error.
//! 4. At most one writer is assumed in flight at a time; callers serialize
//!    writes (the history manager does so through its job executor).
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;

pub use error::{StoreError, StoreResult};
pub use file::HistoryFile;
