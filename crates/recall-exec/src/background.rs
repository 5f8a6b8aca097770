use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::job::Job;
use crate::traits::JobExecutor;

/// Queue-backed executor with a single dedicated worker thread.
///
/// `enqueue` pushes onto an unbounded queue and returns immediately. The
/// worker drains the queue one job at a time, so jobs start in issue order
/// (a single consumer gives global FIFO, which is stronger than the
/// per-submitter ordering the [`JobExecutor`] contract requires).
///
/// Dropping the executor closes the queue; the worker finishes the jobs
/// already enqueued, then exits and is joined.
pub struct BackgroundExecutor {
    sender: Option<mpsc::UnboundedSender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundExecutor {
    /// Spawn the worker thread and return the executor.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        let worker = thread::Builder::new()
            .name("recall-exec".to_string())
            .spawn(move || {
                while let Some(job) = receiver.blocking_recv() {
                    // Job::run catches body panics itself; this guard covers
                    // a panicking continuation so the worker survives.
                    if panic::catch_unwind(AssertUnwindSafe(|| job.run())).is_err() {
                        warn!("job continuation panicked");
                    }
                }
                debug!("background executor drained and stopped");
            })
            .expect("failed to spawn background executor thread");

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }
}

impl Default for BackgroundExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl JobExecutor for BackgroundExecutor {
    fn enqueue(&self, job: Job) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(job).is_err() {
            // Only possible once the worker has stopped.
            warn!("background executor is shut down; job dropped");
        }
    }
}

impl Drop for BackgroundExecutor {
    fn drop(&mut self) {
        // Closing the queue lets the worker drain and exit.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
