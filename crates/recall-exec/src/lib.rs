//! Background job execution for the Recall selection-recency store.
//!
//! A [`Job`] is a unit of deferred work: a fallible body plus a success
//! continuation and a failure continuation. Exactly one of the two
//! continuations runs, exactly once, after the body completes.
//!
//! Executors implement the [`JobExecutor`] seam so callers can inject the
//! scheduling policy:
//!
//! - [`BackgroundExecutor`] — dedicated worker thread draining a queue;
//!   `enqueue` never blocks and a single submitter's jobs start in issue
//!   order
//! - [`InlineExecutor`] — runs the job synchronously inside `enqueue`, for
//!   deterministic tests and embedding
//!
//! # Design Rules
//!
//! 1. A failing or panicking job body never crashes the executor; the
//!    failure is routed to the job's failure continuation.
//! 2. Jobs carry no identity beyond their single execution and cannot be
//!    cancelled once enqueued.
//! 3. The executor owns only its queue and worker; shared-resource ordering
//!    beyond per-submitter issue order is the caller's responsibility.

pub mod background;
pub mod error;
pub mod inline;
pub mod job;
pub mod traits;

pub use background::BackgroundExecutor;
pub use error::JobError;
pub use inline::InlineExecutor;
pub use job::Job;
pub use traits::JobExecutor;
