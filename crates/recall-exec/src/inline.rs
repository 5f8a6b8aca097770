use crate::job::Job;
use crate::traits::JobExecutor;

/// Executor that runs each job synchronously inside `enqueue`.
///
/// Intended for tests and embedding: jobs execute deterministically on the
/// calling thread, in issue order, with no background machinery. Body
/// failures still route to the failure continuation exactly as with the
/// background executor.
#[derive(Debug, Default)]
pub struct InlineExecutor;

impl InlineExecutor {
    /// Create a new inline executor.
    pub fn new() -> Self {
        Self
    }
}

impl JobExecutor for InlineExecutor {
    fn enqueue(&self, job: Job) {
        job.run();
    }
}
