use crate::job::Job;

/// Scheduling seam for background work.
///
/// Contract for all implementations:
/// - `enqueue` returns without blocking the caller and raises no error
///   synchronously.
/// - Jobs enqueued by a single submitting thread start executing in issue
///   order. No ordering is guaranteed across submitters.
/// - Every accepted job runs to completion; there is no cancellation.
/// - A failing job never takes the executor down.
pub trait JobExecutor: Send + Sync {
    /// Schedule a job for execution.
    fn enqueue(&self, job: Job);
}
