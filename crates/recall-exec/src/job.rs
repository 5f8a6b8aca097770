use std::panic::{self, AssertUnwindSafe};

use crate::error::JobError;

/// A unit of deferred work: a fallible body plus its two continuations.
///
/// The result type of the body is erased at construction; executors only
/// see a single-shot closure. Running a job invokes exactly one of the two
/// continuations, exactly once:
///
/// - the body returns `Ok(r)` — the success continuation receives `r`
/// - the body returns `Err(e)` — the failure continuation receives `e`
///   verbatim
/// - the body panics — the failure continuation receives
///   [`JobError::Panicked`]
pub struct Job {
    run: Box<dyn FnOnce() + Send + 'static>,
}

impl Job {
    /// Build a job from a body and its continuations.
    pub fn new<R, B, S, F>(body: B, on_success: S, on_failure: F) -> Self
    where
        R: Send + 'static,
        B: FnOnce() -> Result<R, JobError> + Send + 'static,
        S: FnOnce(R) + Send + 'static,
        F: FnOnce(JobError) + Send + 'static,
    {
        Self {
            run: Box::new(move || {
                match panic::catch_unwind(AssertUnwindSafe(body)) {
                    Ok(Ok(result)) => on_success(result),
                    Ok(Err(err)) => on_failure(err),
                    Err(payload) => on_failure(JobError::Panicked(panic_message(&payload))),
                }
            }),
        }
    }

    /// Execute the body and dispatch the appropriate continuation.
    pub fn run(self) {
        (self.run)()
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job").finish_non_exhaustive()
    }
}

/// Extract a printable message from a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
